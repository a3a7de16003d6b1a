// navx/src/controllers/navigation_controller.rs
use actix_session::Session;
use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::NavxError;
use crate::menu::SidebarModule;
use crate::registry::filtered_menus;
use crate::utils::session::{
    clear_permission_session, extract_permission_session, store_permission_session,
    PermissionSession,
};
use crate::utils::structs::{ApiResponse, PermissionStatus};

/// GET /navx/menu - The registered sidebar filtered by the session's
/// permission hash. Entries the user cannot access are absent, not
/// disabled; with no usable permissions the menu is simply empty.
pub async fn navigation_menu(session: Session) -> impl Responder {
    match extract_permission_session(&session) {
        Ok(record) => {
            let menus = filtered_menus(&record.permissions);
            HttpResponse::Ok().json(ApiResponse::success(menus))
        }
        Err(_) => HttpResponse::Unauthorized().json(ApiResponse::<Vec<SidebarModule>>::error(
            "No permission data in session".to_string(),
        )),
    }
}

/// POST /navx/refresh - Ingest a user-role payload fetched by the host and
/// store it for the session. The error state is stored too, so a bad
/// payload leaves the user with an empty menu rather than a stale one.
pub async fn refresh_permissions(
    body: web::Json<Value>,
    session: Session,
) -> Result<HttpResponse, NavxError> {
    let record = PermissionSession::ingest(&body);

    store_permission_session(&session, &record).map_err(|_| NavxError::InternalError)?;

    if record.fetch_failed {
        warn!("Permission refresh rejected: unexpected response shape");
        return Err(NavxError::UnexpectedResponseShape);
    }

    info!(
        "Permission session refreshed (role: {:?}, {} modules)",
        record.role_name,
        record.module_count()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        PermissionStatus::from(&record),
        "Permissions refreshed".to_string(),
    )))
}

/// GET /navx/status - Role name and permission-fetch state for the session.
pub async fn permission_status(session: Session) -> impl Responder {
    match extract_permission_session(&session) {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(PermissionStatus::from(&record))),
        Err(_) => HttpResponse::Unauthorized().json(ApiResponse::<PermissionStatus>::error(
            "No permission data in session".to_string(),
        )),
    }
}

/// POST /navx/clear - Drop the session's permission record (logout support).
pub async fn clear_permissions(session: Session) -> impl Responder {
    clear_permission_session(&session);
    info!("Permission session cleared");
    HttpResponse::Ok().json(ApiResponse::success_with_message((), "Cleared".to_string()))
}
