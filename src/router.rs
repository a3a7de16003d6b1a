// navx/src/router.rs
use actix_web::{web, Scope};
use tracing::{info, warn};

use crate::controllers::navigation_controller::{
    clear_permissions, navigation_menu, permission_status, refresh_permissions,
};
use crate::health::health_check;
use crate::registry::{module_count, registered_modules};

pub fn register_all_navx_routes() -> Scope {
    info!("🔧 Starting navx route registration...");

    let scope = web::scope("/navx")
        // ===========================
        // NAVIGATION ROUTES
        // ===========================
        .route("/menu", web::get().to(navigation_menu))
        .route("/status", web::get().to(permission_status))
        // ===========================
        // SESSION ROUTES
        // ===========================
        .route("/refresh", web::post().to(refresh_permissions))
        .route("/clear", web::post().to(clear_permissions))
        // ===========================
        // HEALTH
        // ===========================
        .route("/health", web::get().to(health_check));

    if module_count() == 0 {
        warn!("⚠️  No sidebar modules registered! Call register_sidebar_module() before starting the server.");
        return scope;
    }

    for module in registered_modules() {
        info!(
            "📝 Sidebar module '{}' registered (key: '{}', {} entries)",
            module.name,
            module.permission_key(),
            module.sub_items.as_ref().map(|items| items.len()).unwrap_or(0)
        );
    }

    info!("🎉 navx route registration completed!");
    scope
}
