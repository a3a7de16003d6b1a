// navx/src/menu.rs

use serde::{Serialize, Deserialize};

use crate::utils::keys::derive_key;

/// One entry in a static, hand-authored navigation tree.
///
/// A node is exactly one of: leaf (`href`, no `subItems`), group
/// (`subItems`, no `href`), or pass-through (neither; rendered verbatim,
/// e.g. a divider label).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "subItems", default, skip_serializing_if = "Option::is_none")]
    pub sub_items: Option<Vec<NavigationNode>>,
}

impl NavigationNode {
    pub fn leaf(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            href: Some(href.to_string()),
            icon: None,
            sub_items: None,
        }
    }

    pub fn group(name: &str, children: Vec<NavigationNode>) -> Self {
        Self {
            name: name.to_string(),
            href: None,
            icon: None,
            sub_items: Some(children),
        }
    }

    /// A pass-through entry: no link, no children.
    pub fn label(name: &str) -> Self {
        Self {
            name: name.to_string(),
            href: None,
            icon: None,
            sub_items: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Permission key this node joins against in the permissions hash.
    pub fn permission_key(&self) -> String {
        derive_key(&self.name)
    }
}

/// Top-level sidebar entry registered by the host application. A module
/// without `subItems` is checked against the whole-module permission
/// aggregate instead of per-leaf keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarModule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "subItems", default, skip_serializing_if = "Option::is_none")]
    pub sub_items: Option<Vec<NavigationNode>>,
}

impl SidebarModule {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: None,
            sub_items: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_items(mut self, items: Vec<NavigationNode>) -> Self {
        self.sub_items = Some(items);
        self
    }

    pub fn permission_key(&self) -> String {
        derive_key(&self.name)
    }
}

/// Keyed-section variant of the same tree shape: a named section carrying
/// `items` instead of a bare node array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationSection {
    pub key: String,
    pub items: Vec<NavigationNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionAction {
    All,
    Show,
    Index,
    Read,
    Create,
    Update,
    Destroy,
}

impl PermissionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionAction::All => "all",
            PermissionAction::Show => "show",
            PermissionAction::Index => "index",
            PermissionAction::Read => "read",
            PermissionAction::Create => "create",
            PermissionAction::Update => "update",
            PermissionAction::Destroy => "destroy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_permission_key_follows_display_name() {
        let node = NavigationNode::leaf("Escalation Matrix", "/escalation-matrix");
        assert_eq!(node.permission_key(), "escalation_matrix");
    }

    #[test]
    fn test_sub_items_wire_name() {
        let group = NavigationNode::group(
            "Settings",
            vec![NavigationNode::leaf("Role Setup", "/settings/roles")],
        );
        let encoded = serde_json::to_value(&group).unwrap();
        assert_eq!(encoded["subItems"][0]["name"], json!("Role Setup"));
        assert!(encoded.get("href").is_none());
    }

    #[test]
    fn test_pass_through_round_trip() {
        let label = NavigationNode::label("Operations");
        let encoded = serde_json::to_value(&label).unwrap();
        assert_eq!(encoded, json!({ "name": "Operations" }));
        let decoded: NavigationNode = serde_json::from_value(encoded).unwrap();
        assert!(decoded.href.is_none());
        assert!(decoded.sub_items.is_none());
    }

    #[test]
    fn test_action_names() {
        assert_eq!(PermissionAction::Show.as_str(), "show");
        assert_eq!(PermissionAction::All.as_str(), "all");
        assert_eq!(PermissionAction::Destroy.as_str(), "destroy");
    }
}
