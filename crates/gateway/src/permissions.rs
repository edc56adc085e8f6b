//! Permission fetch.
//!
//! Permissions are granted wholesale per session: the source returns the
//! complete flat set and the client replaces its snapshot, never patching
//! it incrementally. The fetch goes through [`SessionGateway::execute`],
//! so it inherits the revalidation protocol like any other call.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use steward_auth::{Permission, PermissionSet};
use steward_core::PrincipalId;

use crate::gateway::{GatewayError, SessionGateway};
use crate::request::ApiRequest;
use crate::transport::Transport;

/// Wire shape of the permission source.
#[derive(Debug, Deserialize)]
struct PermissionsWire {
    principal_id: PrincipalId,
    permissions: Vec<String>,
}

/// An immutable permission snapshot with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionSnapshot {
    pub principal_id: PrincipalId,
    pub fetched_at: DateTime<Utc>,
    pub permissions: PermissionSet,
}

impl<T: Transport> SessionGateway<T> {
    /// Fetch the current permission set for the authenticated principal.
    pub async fn fetch_permissions(&self) -> Result<PermissionSnapshot, GatewayError> {
        let request = ApiRequest::get(self.config().permissions_path.clone());
        let response = self.execute(&request).await?;

        let wire: PermissionsWire = response.json()?;
        let snapshot = PermissionSnapshot {
            principal_id: wire.principal_id,
            fetched_at: Utc::now(),
            permissions: wire
                .permissions
                .into_iter()
                .map(Permission::from)
                .collect(),
        };

        tracing::debug!(
            principal = %snapshot.principal_id,
            granted = snapshot.permissions.len(),
            "permission snapshot refreshed"
        );
        Ok(snapshot)
    }
}
