// navx/src/registry.rs
use crate::filters::filter_sidebar_modules;
use crate::menu::SidebarModule;
use crate::models::permission_model::PermissionsHash;
use lazy_static::lazy_static;
use std::sync::RwLock;

lazy_static! {
    static ref SIDEBAR_REGISTRY: RwLock<Vec<SidebarModule>> = RwLock::new(vec![]);
}

/// Register one sidebar module globally. Hosts call this during startup,
/// before the server begins accepting requests.
pub fn register_sidebar_module(module: SidebarModule) {
    SIDEBAR_REGISTRY.write().unwrap().push(module);
}

pub fn register_sidebar_modules(modules: Vec<SidebarModule>) {
    SIDEBAR_REGISTRY.write().unwrap().extend(modules);
}

pub fn registered_modules() -> Vec<SidebarModule> {
    SIDEBAR_REGISTRY.read().unwrap().clone()
}

/// The registered sidebar reduced to what `permissions` allows, in
/// registration order.
pub fn filtered_menus(permissions: &PermissionsHash) -> Vec<SidebarModule> {
    let modules = SIDEBAR_REGISTRY.read().unwrap();
    filter_sidebar_modules(&modules, permissions)
}

/// Clear all registered modules (useful for testing)
pub fn clear_registry() {
    SIDEBAR_REGISTRY.write().unwrap().clear();
}

/// Get count of registered sidebar modules
pub fn module_count() -> usize {
    SIDEBAR_REGISTRY.read().unwrap().len()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    // The registry is process-global; tests that touch it serialize here.
    lazy_static::lazy_static! {
        pub(crate) static ref REGISTRY_LOCK: Mutex<()> = Mutex::new(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::NavigationNode;
    use crate::models::permission_model::parse_permissions_hash;
    use serde_json::json;

    #[test]
    fn test_register_and_filter() {
        let _guard = test_support::REGISTRY_LOCK.lock().unwrap();
        clear_registry();

        register_sidebar_module(
            SidebarModule::new("Parking").with_items(vec![NavigationNode::leaf(
                "Parking Bookings",
                "/parking/bookings",
            )]),
        );
        register_sidebar_module(SidebarModule::new("Waste Log"));
        assert_eq!(module_count(), 2);

        let permissions = parse_permissions_hash(&json!({
            "parking_bookings": { "show": "true" }
        }));
        let menus = filtered_menus(&permissions);
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].name, "Parking");

        clear_registry();
        assert_eq!(module_count(), 0);
    }
}
