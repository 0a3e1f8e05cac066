//! GMP connection abstraction
//!
//! The protocol layer never talks to a socket itself; it hands each
//! serialized command to a [`Connection`] and gets the raw response back.
//! Concrete transports (TLS, TCP, unix socket) implement this trait outside
//! the crate. [`MockConnection`] keeps tests daemon-free, and
//! [`LoggingConnection`] wraps any transport with debug-level wire logging.

pub mod mock;

pub use mock::MockConnection;

use log::debug;

use crate::error::Result;

/// A transport capable of delivering one GMP command.
///
/// `send` takes the serialized XML of a single command and returns the raw
/// XML response. Transport-level failures surface as
/// [`Error::Connection`](crate::error::Error::Connection). Implementations
/// are responsible for serializing concurrent use of one connection;
/// independent connections are independent.
pub trait Connection {
    /// Send a serialized XML command and return the raw XML response.
    fn send(&mut self, command: &str) -> Result<String>;
}

/// Wrapper that logs every request and response at debug level.
///
/// Useful when diagnosing protocol issues against a live manager daemon.
/// Enable with any `log` backend, e.g. `env_logger` and
/// `RUST_LOG=gmp_client=debug`.
pub struct LoggingConnection<C> {
    inner: C,
}

impl<C: Connection> LoggingConnection<C> {
    /// Wrap an existing connection.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Unwrap and return the inner connection.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Connection> Connection for LoggingConnection<C> {
    fn send(&mut self, command: &str) -> Result<String> {
        debug!("request: {command}");
        let response = self.inner.send(command)?;
        debug!("response: {response}");
        Ok(response)
    }
}
