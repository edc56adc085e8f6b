//! Gateway configuration.

use serde::{Deserialize, Serialize};

/// Endpoints the gateway needs. Paths are resolved against `base_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Origin the application talks to (same-origin session refresh).
    pub base_url: String,
    /// Session-validation endpoint (GET, credentials attached, no body).
    #[serde(default = "default_session_probe_path")]
    pub session_probe_path: String,
    /// Client-side navigation target on confirmed session termination.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Endpoint returning the flat permission set for the principal.
    #[serde(default = "default_permissions_path")]
    pub permissions_path: String,
}

fn default_session_probe_path() -> String {
    "/auth/session".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_permissions_path() -> String {
    "/auth/permissions".to_string()
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            session_probe_path: default_session_probe_path(),
            login_path: default_login_path(),
            permissions_path: default_permissions_path(),
        }
    }
}
