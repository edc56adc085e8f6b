//! Immutable permission-set snapshot and the evaluator over it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::permission::Permission;

/// The flat set of permissions granted to the current session.
///
/// The set is an **immutable snapshot**: it is built wholesale (on login or
/// permission re-fetch) and never patched incrementally. Components hold a
/// snapshot for the duration of an evaluation, so a check never observes
/// the set changing mid-way.
///
/// Absence of a permission is a normal `false`, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    granted: HashSet<Permission>,
}

impl PermissionSet {
    /// Build a snapshot from granted permissions.
    pub fn new(granted: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            granted: granted.into_iter().collect(),
        }
    }

    /// A snapshot with nothing granted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact membership check.
    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.granted.contains(permission)
    }

    /// True iff every element of `required` is granted.
    ///
    /// Vacuously true for an empty list. This is the strict policy used by
    /// fine-grained UI guards; menu visibility uses [`Self::has_any`].
    pub fn has_all(&self, required: &[Permission]) -> bool {
        required.iter().all(|p| self.has_permission(p))
    }

    /// True iff at least one element of `required` is granted.
    ///
    /// Vacuously false for an empty list. This is the coarse policy used
    /// for menu visibility; guards use [`Self::has_all`]. The asymmetry is
    /// deliberate and load-bearing for menu behavior.
    pub fn has_any(&self, required: &[Permission]) -> bool {
        required.iter().any(|p| self.has_permission(p))
    }

    /// Membership of the canonical `entity:action` permission.
    ///
    /// Missing or empty entity/action never panics; the composed string
    /// simply isn't a member.
    pub fn can_perform(&self, entity: &str, action: &str) -> bool {
        self.has_permission(&Permission::of(entity, action))
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.granted.iter()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self::new(iter)
    }
}
