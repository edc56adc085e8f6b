//! Static menu catalog.
//!
//! Catalog entries are defined once (in code or as embedded JSON) and never
//! mutated at runtime. The assembler only ever borrows them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use steward_auth::Permission;
use thiserror::Error;

/// A catalog node: a titled group of entries, or a navigable leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuEntry {
    Group(MenuGroup),
    Leaf(MenuLeaf),
}

/// A titled group of child entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuEntry>,
}

/// A navigable destination.
///
/// Visibility policy: a leaf with no required permissions is public within
/// the authenticated area; a leaf with requirements is visible if the user
/// holds **any** of them. Sub-actions are gated individually so a leaf can
/// render with some actions enabled and others disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLeaf {
    pub label: String,
    pub path: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Entity the leaf's sub-actions act on (e.g. `"user"`).
    #[serde(default)]
    pub entity: Option<String>,
    #[serde(default)]
    pub required_permissions: Vec<Permission>,
    /// Sub-action names gated as `entity:action`.
    #[serde(default)]
    pub actions: Vec<String>,
}

impl MenuEntry {
    pub fn group(title: impl Into<String>, children: Vec<MenuEntry>) -> Self {
        Self::Group(MenuGroup {
            title: title.into(),
            icon: None,
            children,
        })
    }

    pub fn leaf(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Leaf(MenuLeaf {
            label: label.into(),
            path: path.into(),
            icon: None,
            entity: None,
            required_permissions: Vec::new(),
            actions: Vec::new(),
        })
    }
}

impl MenuGroup {
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl MenuLeaf {
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn require(mut self, permission: Permission) -> Self {
        self.required_permissions.push(permission);
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document itself is not a JSON array.
    #[error("catalog is not a JSON array: {0}")]
    Document(#[from] serde_json::Error),
}

/// Load a catalog from a JSON document.
///
/// Individual malformed entries are skipped with a warning; one bad entry
/// never prevents its siblings from loading. Only a document that is not a
/// JSON array at all is an error.
pub fn catalog_from_json(raw: &str) -> Result<Vec<MenuEntry>, CatalogError> {
    let values: Vec<Value> = serde_json::from_str(raw)?;
    Ok(parse_entries(&values))
}

fn parse_entries(values: &[Value]) -> Vec<MenuEntry> {
    values.iter().filter_map(parse_entry).collect()
}

fn parse_entry(value: &Value) -> Option<MenuEntry> {
    match value.get("type").and_then(Value::as_str) {
        Some("group") => {
            let Some(title) = value.get("title").and_then(Value::as_str) else {
                tracing::warn!("skipping menu group without a title");
                return None;
            };
            // Children are parsed one by one so a bad child is dropped
            // without taking the group down with it.
            let children = value
                .get("children")
                .and_then(Value::as_array)
                .map(|vs| parse_entries(vs))
                .unwrap_or_default();

            Some(MenuEntry::Group(MenuGroup {
                title: title.to_string(),
                icon: value
                    .get("icon")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                children,
            }))
        }
        Some("leaf") => match serde_json::from_value::<MenuLeaf>(value.clone()) {
            Ok(leaf) => Some(MenuEntry::Leaf(leaf)),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed menu leaf");
                None
            }
        },
        other => {
            tracing::warn!(kind = ?other, "skipping menu entry of unknown kind");
            None
        }
    }
}
