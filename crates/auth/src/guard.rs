//! Fine-grained authorization guard (all-of policy).
//!
//! UI guards gate affordances on **every** listed permission, unlike menu
//! visibility which is satisfied by any one of them. The two policies are
//! kept as separately named operations on purpose.

use thiserror::Error;

use crate::permission::Permission;
use crate::set::PermissionSet;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

/// Guard contract for affordances that require permissions.
///
/// Implement this on the actions a UI surface exposes; the guard enforces
/// the full list before the affordance is rendered enabled.
pub trait ActionAuthorization {
    fn required_permissions(&self) -> &[Permission];
}

/// Authorize a single permission against the held snapshot.
///
/// - No IO
/// - No panics
/// - Honors the `"*"` wildcard grant (guard layer only; the evaluator's
///   membership checks stay exact)
pub fn authorize(permissions: &PermissionSet, required: &Permission) -> Result<(), AuthzError> {
    if permissions.has_permission(required) || permissions.has_permission(&Permission::new("*")) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}

/// Authorize every permission an affordance declares (all-of).
pub fn authorize_action<A: ActionAuthorization>(
    permissions: &PermissionSet,
    action: &A,
) -> Result<(), AuthzError> {
    for required in action.required_permissions() {
        authorize(permissions, required)?;
    }
    Ok(())
}
