//! Client library for the Greenbone Management Protocol (GMP)
//!
//! GMP is an XML request/response protocol for controlling a
//! vulnerability-scan manager daemon. [`Gmp`] builds and validates protocol
//! commands, then hands the serialized XML to a [`Connection`] transport and
//! returns the raw response. Transports themselves (TLS, TCP, unix socket)
//! live outside this crate behind the [`Connection`] trait.
//!
//! # Example
//!
//! ```
//! use gmp_client::{Gmp, MockConnection, Result, ScannerModification, ScannerType};
//!
//! fn main() -> Result<()> {
//!     // A real application would hand in a TLS or unix-socket transport.
//!     let mut gmp = Gmp::new(MockConnection::new());
//!
//!     let modification = ScannerModification::new()
//!         .name("lab scanner")
//!         .host("scanner.lab.example")
//!         .port(9390)
//!         .scanner_type(ScannerType::OpenVas);
//!
//!     let response = gmp.modify_scanner("6b2db524-9fb0-45b8-9b56-d958f84cb546", &modification)?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```

pub mod connection;
pub mod error;
pub mod protocol;
pub mod xml;

pub use connection::{Connection, LoggingConnection, MockConnection};
pub use error::{Error, Result};
pub use protocol::{Gmp, Port, ScannerModification, ScannerType};
