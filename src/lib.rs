// navx/src/lib.rs

pub mod menu;
pub mod filters;
pub mod registry;
pub mod error;
pub mod router;
pub mod health;
pub mod middleware;
pub mod models;
pub mod utils;
pub mod configs;
pub mod controllers;

// Export configuration and app creation functions
pub use configs::initializer::{
    get_navx_config,
    setup_navx_logging,
    get_navx_session_middleware,
    configure_navx_services,
    navx_initialize,
    NavxConfig
};

// Export the navigation data model
pub use menu::{NavigationNode, NavigationSection, PermissionAction, SidebarModule};

// Export the permission model and parsers
pub use models::permission_model::{
    parse_permissions_hash, parse_permissions_json, ActionMap, PermissionIngestError,
    PermissionValue, PermissionsHash, UserRole, UserRoleResponse,
};

// Export the tree filter
pub use filters::{
    filter_navigation_structure, filter_node, filter_sidebar_module, filter_sidebar_modules,
    filter_tree,
};

// Export commonly used utilities
pub use utils::{
    keys::derive_key,
    rbac::{has_module_permission, has_permission, BROAD_ACTIONS, DEFAULT_ACTION},
    session::{
        clear_permission_session, extract_permission_session, store_permission_session,
        PermissionSession, PERMISSION_SESSION_KEY,
    },
    structs::{ApiResponse, PermissionStatus},
};

// Export the sidebar registry
pub use registry::{
    clear_registry, filtered_menus, module_count, register_sidebar_module,
    register_sidebar_modules, registered_modules,
};

// Export controllers for custom route registration
pub use controllers::navigation_controller::{
    clear_permissions, navigation_menu, permission_status, refresh_permissions,
};

// Export router for custom integration
pub use router::register_all_navx_routes;

// Export middleware
pub use middleware::permission_guard::PermissionGuard;

pub use error::NavxError;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

// Convenience imports for common operations
pub mod prelude {
    pub use crate::{
        NavxConfig,
        navx_initialize,
        NavigationNode,
        SidebarModule,
        PermissionSession,
        PermissionGuard,
        register_sidebar_module,
        register_all_navx_routes,
        filtered_menus,
        derive_key,
        has_permission,
        has_module_permission,
    };
}
