//! `steward-gateway` — session-aware request gateway.
//!
//! Every authenticated call in the application goes through
//! [`SessionGateway::execute`]: on a 401/403 the gateway probes the
//! session endpoint once and, if the session is still good, replays the
//! original request. A session that cannot be confirmed redirects to the
//! login entry point and surfaces [`GatewayError::SessionExpired`].
//!
//! The gateway owns no session object; the real session lives in
//! transport-level cookies. [`SessionHandle`] tracks only the client's
//! belief about it.

pub mod config;
pub mod gateway;
pub mod navigate;
pub mod permissions;
pub mod request;
pub mod response;
pub mod session;
pub mod transport;

pub use config::GatewayConfig;
pub use gateway::{GatewayError, SessionGateway};
pub use navigate::LoginNavigator;
pub use permissions::PermissionSnapshot;
pub use request::{ApiRequest, Method};
pub use response::GatewayResponse;
pub use session::SessionHandle;
pub use transport::{HttpTransport, Transport, TransportError};
