// navx/src/filters.rs
use crate::menu::{NavigationNode, NavigationSection, SidebarModule};
use crate::models::permission_model::PermissionsHash;
use crate::utils::keys::derive_key;
use crate::utils::rbac::{has_module_permission, has_permission};

/// Action a leaf must carry to stay visible in navigation.
const LEAF_ACTION: &str = "show";

/// How the filter sees a node, independent of which container shape it
/// came from. Group wins over leaf when a node carries both `subItems`
/// and `href`; anything else passes through untouched.
enum NodeShape<'a> {
    Group(&'a [NavigationNode]),
    Leaf(String),
    PassThrough,
}

fn classify(node: &NavigationNode) -> NodeShape<'_> {
    if let Some(children) = &node.sub_items {
        NodeShape::Group(children)
    } else if node.href.is_some() {
        NodeShape::Leaf(derive_key(&node.name))
    } else {
        NodeShape::PassThrough
    }
}

/// Filter a single node. Returns `None` when the user may not see it.
///
/// The output is a newly-allocated copy; source trees are static data and
/// are never mutated. Depth is unbounded even though real sidebars stay
/// within three levels.
pub fn filter_node(node: &NavigationNode, permissions: &PermissionsHash) -> Option<NavigationNode> {
    match classify(node) {
        NodeShape::Group(children) => {
            let kept = filter_tree(children, permissions);
            if kept.is_empty() {
                // A group with no surviving descendants disappears rather
                // than rendering an empty submenu.
                None
            } else {
                Some(NavigationNode {
                    sub_items: Some(kept),
                    ..node.clone()
                })
            }
        }
        NodeShape::Leaf(key) => {
            if has_permission(permissions, &key, LEAF_ACTION) {
                Some(node.clone())
            } else {
                None
            }
        }
        NodeShape::PassThrough => Some(node.clone()),
    }
}

/// Filter a bare array of navigation nodes, preserving sibling order.
pub fn filter_tree(nodes: &[NavigationNode], permissions: &PermissionsHash) -> Vec<NavigationNode> {
    nodes
        .iter()
        .filter_map(|node| filter_node(node, permissions))
        .collect()
}

/// Filter one top-level sidebar module.
///
/// Modules with `subItems` reuse the node filter (two-level nesting is
/// just recursion). A module with no `subItems` at all has no leaf keys to
/// check, so visibility falls back to the whole-module aggregate.
pub fn filter_sidebar_module(
    module: &SidebarModule,
    permissions: &PermissionsHash,
) -> Option<SidebarModule> {
    match &module.sub_items {
        Some(children) => {
            let kept = filter_tree(children, permissions);
            if kept.is_empty() {
                None
            } else {
                Some(SidebarModule {
                    sub_items: Some(kept),
                    ..module.clone()
                })
            }
        }
        None => {
            if has_module_permission(permissions, &module.permission_key()) {
                Some(module.clone())
            } else {
                None
            }
        }
    }
}

pub fn filter_sidebar_modules(
    modules: &[SidebarModule],
    permissions: &PermissionsHash,
) -> Vec<SidebarModule> {
    modules
        .iter()
        .filter_map(|module| filter_sidebar_module(module, permissions))
        .collect()
}

/// Filter the keyed-section variant; a section emptied by filtering is
/// dropped entirely.
pub fn filter_navigation_structure(
    sections: &[NavigationSection],
    permissions: &PermissionsHash,
) -> Vec<NavigationSection> {
    sections
        .iter()
        .filter_map(|section| {
            let kept = filter_tree(&section.items, permissions);
            if kept.is_empty() {
                None
            } else {
                Some(NavigationSection {
                    key: section.key.clone(),
                    items: kept,
                })
            }
        })
        .collect()
}
