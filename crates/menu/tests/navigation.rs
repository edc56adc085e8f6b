//! Black-box test over the full catalog → menu pipeline, the way the
//! navigation collaborator consumes it.

use steward_auth::{Permission, PermissionSet};
use steward_menu::{ProcessedMenuNode, build_menu, catalog_from_json};

const CATALOG: &str = r#"[
    { "type": "leaf", "label": "Dashboard", "path": "/", "icon": "dashboard" },
    {
        "type": "group",
        "title": "Administration",
        "icon": "shield",
        "children": [
            {
                "type": "leaf",
                "label": "Users",
                "path": "/admin/users",
                "icon": "users",
                "entity": "user",
                "required_permissions": ["user:read", "user:manage"],
                "actions": ["create", "update", "delete"]
            },
            {
                "type": "leaf",
                "label": "Audit log",
                "path": "/admin/audit",
                "icon": "document",
                "required_permissions": ["audit:read"]
            }
        ]
    },
    {
        "type": "group",
        "title": "Billing",
        "icon": "chart",
        "children": [
            {
                "type": "leaf",
                "label": "Invoices",
                "path": "/billing/invoices",
                "entity": "invoice",
                "required_permissions": ["invoice:read"],
                "actions": ["create", "void"]
            }
        ]
    }
]"#;

fn permissions(granted: &[&'static str]) -> PermissionSet {
    granted.iter().map(|p| Permission::new(*p)).collect()
}

#[test]
fn an_operator_sees_only_their_sections() {
    let catalog = catalog_from_json(CATALOG).unwrap();
    let tree = build_menu(&catalog, &permissions(&["user:read", "user:update"]));

    // Dashboard is public within the authenticated area.
    assert!(tree[0].has_access());

    // Administration is visible through the Users leaf (any-of gating),
    // with actions individually gated.
    let ProcessedMenuNode::Group(admin) = &tree[1] else {
        panic!("expected the Administration group");
    };
    assert!(admin.has_any_access);

    let ProcessedMenuNode::Leaf(users) = &admin.children[0] else {
        panic!("expected the Users leaf");
    };
    assert!(users.has_access);
    let allowed: Vec<(&str, bool)> = users
        .available_actions
        .iter()
        .map(|a| (a.action.as_str(), a.allowed))
        .collect();
    assert_eq!(
        allowed,
        [("create", false), ("update", true), ("delete", false)]
    );

    // The audit leaf stays hidden but does not hide its sibling.
    assert!(!admin.children[1].has_access());

    // Billing has no visible children at all.
    assert!(!tree[2].has_access());
}

#[test]
fn refreshing_the_snapshot_recomputes_the_tree() {
    let catalog = catalog_from_json(CATALOG).unwrap();

    let before = build_menu(&catalog, &permissions(&[]));
    assert!(!before[1].has_access());
    assert!(!before[2].has_access());

    // Permission sets are replaced wholesale; the next render flips the
    // affected branches and nothing else.
    let after = build_menu(&catalog, &permissions(&["invoice:read"]));
    assert!(!after[1].has_access());
    assert!(after[2].has_access());

    // Same snapshot, same tree.
    assert_eq!(after, build_menu(&catalog, &permissions(&["invoice:read"])));
}
