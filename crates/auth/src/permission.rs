//! Permission identifier.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Canonical separator between the entity and action parts of a permission.
pub const PERMISSION_SEPARATOR: char = ':';

/// A granted capability, canonically an `entity:action` pair
/// (e.g. `"user:create"`).
///
/// Permissions are modeled as opaque strings; the entity/action structure
/// is a naming convention, not an invariant. A special wildcard permission
/// `"*"` can be used by guard layers to indicate "allow all" without
/// enumerating domain permissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Build the canonical `entity:action` form.
    pub fn of(entity: &str, action: &str) -> Self {
        Self(Cow::Owned(format!(
            "{entity}{PERMISSION_SEPARATOR}{action}"
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The entity part, if this permission follows the `entity:action` form.
    pub fn entity(&self) -> Option<&str> {
        self.0.split_once(PERMISSION_SEPARATOR).map(|(e, _)| e)
    }

    /// The action part, if this permission follows the `entity:action` form.
    pub fn action(&self) -> Option<&str> {
        self.0.split_once(PERMISSION_SEPARATOR).map(|(_, a)| a)
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Permission {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl From<&'static str> for Permission {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}
