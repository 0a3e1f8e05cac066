//! Scanner domain types
//!
//! GMP identifies scanner backends by a small fixed set of integer codes.
//! [`ScannerType`] models that vocabulary as a closed enum with explicit
//! coercion from the loose representations the protocol tolerates (integer
//! codes and their decimal string form). [`ScannerModification`] collects
//! the optional fields of a `modify_scanner` command.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Scanner backend types known to GMP.
///
/// The integer codes are part of the wire protocol and fixed: any other
/// value is rejected client-side before a command is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerType {
    /// OSP scanner
    Osp = 1,
    /// OpenVAS scanner
    OpenVas = 2,
    /// CVE feed scanner
    Cve = 3,
    /// Another GMP manager acting as a scanner
    Gmp = 4,
}

impl ScannerType {
    /// Protocol integer code for this scanner type.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Coerce a raw protocol code into a scanner type.
    ///
    /// Fails with [`Error::InvalidArgument`] for anything outside 1..=4.
    pub fn from_code(code: i64) -> Result<Self, Error> {
        match code {
            1 => Ok(ScannerType::Osp),
            2 => Ok(ScannerType::OpenVas),
            3 => Ok(ScannerType::Cve),
            4 => Ok(ScannerType::Gmp),
            _ => Err(Error::InvalidArgument {
                argument: "scanner_type",
                value: code.to_string(),
            }),
        }
    }
}

impl TryFrom<i64> for ScannerType {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Error> {
        Self::from_code(code)
    }
}

impl FromStr for ScannerType {
    type Err = Error;

    /// Parse the decimal string form of a scanner type code.
    ///
    /// Empty, non-numeric and out-of-range strings all fail with
    /// [`Error::InvalidArgument`].
    fn from_str(s: &str) -> Result<Self, Error> {
        let code: i64 = s.parse().map_err(|_| Error::InvalidArgument {
            argument: "scanner_type",
            value: s.to_string(),
        })?;
        Self::from_code(code)
    }
}

impl fmt::Display for ScannerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// TCP port of a scanner.
///
/// The protocol accepts a port as a native integer or its decimal string
/// form; both serialize identically. No range validation is applied beyond
/// being integer-convertible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port(i64);

impl Port {
    /// The port value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for Port {
    fn from(value: i64) -> Self {
        Port(value)
    }
}

impl FromStr for Port {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let value: i64 = s.parse().map_err(|_| Error::InvalidArgument {
            argument: "port",
            value: s.to_string(),
        })?;
        Ok(Port(value))
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional fields of a `modify_scanner` command.
///
/// All fields default to absent; only fields that were set produce a child
/// element in the serialized command. Setters chain:
///
/// ```
/// use gmp_client::{ScannerModification, ScannerType};
///
/// let modification = ScannerModification::new()
///     .name("lab scanner")
///     .scanner_type(ScannerType::OpenVas);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScannerModification {
    pub(crate) comment: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<Port>,
    pub(crate) name: Option<String>,
    pub(crate) ca_pub: Option<String>,
    pub(crate) credential_id: Option<String>,
    pub(crate) scanner_type: Option<ScannerType>,
}

impl ScannerModification {
    /// Create a modification with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scanner comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the host the scanner listens on.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port the scanner listens on.
    pub fn port(mut self, port: impl Into<Port>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Set the scanner name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the CA certificate (PEM) used to verify the scanner.
    pub fn ca_pub(mut self, ca_pub: impl Into<String>) -> Self {
        self.ca_pub = Some(ca_pub.into());
        self
    }

    /// Reference a stored credential by its identifier.
    pub fn credential_id(mut self, credential_id: impl Into<String>) -> Self {
        self.credential_id = Some(credential_id.into());
        self
    }

    /// Set the scanner backend type.
    pub fn scanner_type(mut self, scanner_type: ScannerType) -> Self {
        self.scanner_type = Some(scanner_type);
        self
    }
}
