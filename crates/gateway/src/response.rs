//! Transport-agnostic response.

use serde::de::DeserializeOwned;

use crate::transport::TransportError;

/// A completed call: status, headers, raw body.
///
/// Non-auth failure statuses (5xx and the rest) are passed to callers
/// unchanged; branching on them is caller policy, not gateway policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl GatewayResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the backend rejected the credential (401/403), i.e. the
    /// belief in a valid session has been falsified.
    pub fn is_auth_failure(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
