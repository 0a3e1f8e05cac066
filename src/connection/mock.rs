//! Mock GMP connection for testing
//!
//! Records every command handed to `send` so tests can assert on the exact
//! serialized XML without a running manager daemon.

use std::collections::VecDeque;

use super::Connection;
use crate::error::{Error, Result};

/// Response returned when no scripted response is queued.
const DEFAULT_RESPONSE: &str = r#"<response status="200" status_text="OK"/>"#;

/// Recording transport for tests.
///
/// Configure scripted responses or a one-shot error via builder methods,
/// then assert on the captured commands.
///
/// # Example
/// ```
/// use gmp_client::{Connection, MockConnection};
///
/// let mut conn = MockConnection::new().with_response("<ok/>");
/// let response = conn.send("<get_version/>").unwrap();
/// assert_eq!(response, "<ok/>");
/// assert_eq!(conn.last_command(), Some("<get_version/>"));
/// ```
#[derive(Debug, Default)]
pub struct MockConnection {
    /// Commands captured from `send`, in call order
    sent: Vec<String>,
    /// Scripted responses, consumed front to back
    responses: VecDeque<String>,
    /// Error to return on the next `send` - consumed on first use
    error: Option<Error>,
}

impl MockConnection {
    /// Create a mock with no scripted responses.
    ///
    /// Every `send` succeeds with a generic `status="200"` response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response; responses are consumed in the order queued.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.responses.push_back(response.into());
        self
    }

    /// Configure an error to return on the next `send`.
    /// The error is consumed after one use; the failed command is not
    /// recorded.
    pub fn with_error(mut self, error: Error) -> Self {
        self.error = Some(error);
        self
    }

    /// All commands captured so far, in call order.
    pub fn sent_commands(&self) -> &[String] {
        &self.sent
    }

    /// The most recently sent command, if any.
    pub fn last_command(&self) -> Option<&str> {
        self.sent.last().map(String::as_str)
    }

    /// Number of successful `send` calls.
    pub fn send_count(&self) -> usize {
        self.sent.len()
    }
}

impl Connection for MockConnection {
    fn send(&mut self, command: &str) -> Result<String> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        self.sent.push(command.to_string());
        Ok(self
            .responses
            .pop_front()
            .unwrap_or_else(|| DEFAULT_RESPONSE.to_string()))
    }
}
