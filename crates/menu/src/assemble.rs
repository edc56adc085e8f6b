//! Menu assembly: static catalog + permission snapshot → processed tree.

use serde::Serialize;
use steward_auth::PermissionSet;

use crate::catalog::{MenuEntry, MenuGroup, MenuLeaf};
use crate::icon::Icon;

/// A processed catalog node, recomputed on every permission-set change.
///
/// Purely derived state: never persisted, no identity of its own. Two runs
/// over the same catalog and snapshot produce structurally equal trees, so
/// callers may memoize keyed on snapshot identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProcessedMenuNode {
    Group(ProcessedGroup),
    Leaf(ProcessedLeaf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedGroup {
    pub title: String,
    pub icon: Icon,
    /// OR of all (recursively computed) child access flags. A group with
    /// no visible children is not rendered.
    pub has_any_access: bool,
    pub children: Vec<ProcessedMenuNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedLeaf {
    pub label: String,
    pub icon: Icon,
    pub path: String,
    pub has_access: bool,
    /// Per-action gating so a visible leaf can render some actions
    /// disabled without hiding the whole destination.
    pub available_actions: Vec<ActionAccess>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionAccess {
    pub action: String,
    pub allowed: bool,
}

impl ProcessedMenuNode {
    /// Whether this node grants the user anything to see.
    pub fn has_access(&self) -> bool {
        match self {
            Self::Group(group) => group.has_any_access,
            Self::Leaf(leaf) => leaf.has_access,
        }
    }
}

/// Build the processed navigation tree.
///
/// Catalog order is preserved; the catalog itself is never mutated. The
/// assembler is idempotent and side-effect-free.
pub fn build_menu(catalog: &[MenuEntry], permissions: &PermissionSet) -> Vec<ProcessedMenuNode> {
    catalog
        .iter()
        .map(|entry| process_entry(entry, permissions))
        .collect()
}

fn process_entry(entry: &MenuEntry, permissions: &PermissionSet) -> ProcessedMenuNode {
    match entry {
        MenuEntry::Group(group) => ProcessedMenuNode::Group(process_group(group, permissions)),
        MenuEntry::Leaf(leaf) => ProcessedMenuNode::Leaf(process_leaf(leaf, permissions)),
    }
}

fn process_group(group: &MenuGroup, permissions: &PermissionSet) -> ProcessedGroup {
    // Children first; the group's own visibility is derived from theirs.
    let children = build_menu(&group.children, permissions);
    let has_any_access = children.iter().any(ProcessedMenuNode::has_access);

    ProcessedGroup {
        title: group.title.clone(),
        icon: Icon::resolve(group.icon.as_deref()),
        has_any_access,
        children,
    }
}

fn process_leaf(leaf: &MenuLeaf, permissions: &PermissionSet) -> ProcessedLeaf {
    // Any-of gating: a leaf with no requirements is public within the
    // authenticated area.
    let has_access = leaf.required_permissions.is_empty()
        || permissions.has_any(&leaf.required_permissions);

    let entity = leaf.entity.as_deref().unwrap_or("");
    let available_actions = leaf
        .actions
        .iter()
        .map(|action| ActionAccess {
            action: action.clone(),
            allowed: permissions.can_perform(entity, action),
        })
        .collect();

    ProcessedLeaf {
        label: leaf.label.clone(),
        icon: Icon::resolve(leaf.icon.as_deref()),
        path: leaf.path.clone(),
        has_access,
        available_actions,
    }
}
