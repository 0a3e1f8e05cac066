//! Error types for the GMP client

use thiserror::Error;

/// Result type alias for GMP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the client
#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory argument was missing or empty.
    ///
    /// Raised by command builders before anything is serialized or sent.
    #[error("{function} requires a {argument} argument")]
    RequiredArgument {
        /// The GMP command that rejected the call
        function: &'static str,
        /// The argument that was missing or empty
        argument: &'static str,
    },

    /// An argument with a fixed vocabulary was given a value outside it.
    ///
    /// Raised at the coercion boundary, before anything is serialized or
    /// sent.
    #[error("invalid value {value:?} for {argument}")]
    InvalidArgument {
        /// The argument that rejected the value
        argument: &'static str,
        /// The offending raw value
        value: String,
    },

    /// Transport-level failure reported by the connection.
    ///
    /// Never produced by the command builders themselves; surfaced unchanged
    /// from the [`Connection`](crate::connection::Connection) in use.
    #[error("connection error: {0}")]
    Connection(String),
}
