// navx/src/utils/rbac.rs
use crate::models::permission_model::PermissionsHash;

/// Action checked when a caller does not care about a specific one.
pub const DEFAULT_ACTION: &str = "all";

/// Broad actions tried, in order, before falling back to an exhaustive
/// scan when deciding whether a whole module is visible.
pub const BROAD_ACTIONS: [&str; 4] = ["all", "show", "index", "read"];

pub fn has_permission(permissions: &PermissionsHash, module_key: &str, action: &str) -> bool {
    permissions
        .get(module_key)
        .and_then(|actions| actions.get(action))
        .map(|value| value.is_granted())
        .unwrap_or(false)
}

/// Whether a module has any usable permission at all.
///
/// Tries the broad actions first, then accepts any granted action. The
/// fallback matters: some modules only expose narrow actions (a
/// `create`-only checklist has no `all`/`show`) and must still surface in
/// navigation.
pub fn has_module_permission(permissions: &PermissionsHash, module_key: &str) -> bool {
    let actions = match permissions.get(module_key) {
        Some(actions) => actions,
        None => return false,
    };

    for action in BROAD_ACTIONS {
        if has_permission(permissions, module_key, action) {
            return true;
        }
    }

    actions.values().any(|value| value.is_granted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::permission_model::parse_permissions_hash;
    use serde_json::json;

    fn sample_permissions() -> PermissionsHash {
        parse_permissions_hash(&json!({
            "assets": { "all": "true" },
            "audits": { "show": true, "destroy": "false" },
            "checklists": { "create": "true" },
            "reports": { "show": "false", "index": false }
        }))
    }

    #[test]
    fn test_has_permission_mixed_encodings() {
        let permissions = sample_permissions();
        assert!(has_permission(&permissions, "assets", "all"));
        assert!(has_permission(&permissions, "audits", "show"));
        assert!(!has_permission(&permissions, "audits", "destroy"));
        assert!(!has_permission(&permissions, "reports", "show"));
    }

    #[test]
    fn test_has_permission_absent_keys_deny() {
        let permissions = sample_permissions();
        assert!(!has_permission(&permissions, "missing_module", DEFAULT_ACTION));
        assert!(!has_permission(&permissions, "assets", "missing_action"));
        assert!(!has_permission(&PermissionsHash::new(), "assets", "all"));
    }

    #[test]
    fn test_module_permission_broad_actions() {
        let permissions = sample_permissions();
        assert!(has_module_permission(&permissions, "assets"));
        assert!(has_module_permission(&permissions, "audits"));
    }

    #[test]
    fn test_module_permission_narrow_fallback() {
        // Only "create" is granted; the broad list misses it but the
        // exhaustive fallback must still surface the module.
        let permissions = sample_permissions();
        assert!(has_module_permission(&permissions, "checklists"));
    }

    #[test]
    fn test_module_permission_all_falsy() {
        let permissions = sample_permissions();
        assert!(!has_module_permission(&permissions, "reports"));
        assert!(!has_module_permission(&permissions, "missing_module"));
    }
}
