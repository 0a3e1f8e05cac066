//! GMP protocol client
//!
//! [`Gmp`] wraps a [`Connection`] and exposes one method per protocol
//! command. Each method validates its arguments, builds the command element
//! and hands the serialized XML to the connection; the raw response comes
//! back uninterpreted. Validation always happens before the send, so a
//! rejected call never reaches the wire.

mod scanner;

pub use scanner::{Port, ScannerModification, ScannerType};

use crate::connection::Connection;
use crate::error::{Error, Result};
use crate::xml::XmlCommand;

/// GMP protocol client over an established connection.
///
/// The client owns its connection; concurrent use of one client must be
/// serialized by the caller, independent clients are independent.
pub struct Gmp<C> {
    connection: C,
}

impl<C: Connection> Gmp<C> {
    /// Create a client over an established connection.
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Borrow the underlying connection.
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Consume the client, returning the connection.
    pub fn into_connection(self) -> C {
        self.connection
    }

    /// Modify an existing scanner.
    ///
    /// Only fields set on `modification` are sent; omitted fields keep their
    /// server-side value. `scanner_id` must be non-empty or the call fails
    /// with [`Error::RequiredArgument`] before anything is sent.
    ///
    /// Returns the manager's raw XML response.
    pub fn modify_scanner(
        &mut self,
        scanner_id: &str,
        modification: &ScannerModification,
    ) -> Result<String> {
        if scanner_id.is_empty() {
            return Err(Error::RequiredArgument {
                function: "modify_scanner",
                argument: "scanner_id",
            });
        }

        let mut cmd = XmlCommand::new("modify_scanner");
        cmd.set_attribute("scanner_id", scanner_id);

        // Child order is fixed by the protocol, not alphabetical
        if let Some(comment) = &modification.comment {
            cmd.add_element("comment").set_text(comment);
        }
        if let Some(host) = &modification.host {
            cmd.add_element("host").set_text(host);
        }
        if let Some(port) = modification.port {
            cmd.add_element("port").set_text(port.to_string());
        }
        if let Some(name) = &modification.name {
            cmd.add_element("name").set_text(name);
        }
        if let Some(ca_pub) = &modification.ca_pub {
            cmd.add_element("ca_pub").set_text(ca_pub);
        }
        if let Some(credential_id) = &modification.credential_id {
            cmd.add_element("credential").set_attribute("id", credential_id);
        }
        if let Some(scanner_type) = modification.scanner_type {
            cmd.add_element("type").set_text(scanner_type.to_string());
        }

        self.connection.send(&cmd.to_string())
    }
}
