// navx/src/middleware/permission_guard.rs
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;
use actix_session::SessionExt;
use tracing::{info, warn};

use crate::menu::PermissionAction;
use crate::utils::keys::derive_key;
use crate::utils::rbac::has_permission;
use crate::utils::session::extract_permission_session;

/// Guards a scope with a module/action check against the session's
/// permission hash. No session record means 401; a record that denies the
/// action (including the failed-fetch deny-all state) means 403.
#[derive(Debug, Clone)]
pub struct PermissionGuard {
    pub module_key: String,
    pub action: PermissionAction,
}

impl PermissionGuard {
    /// Build a guard from a display name or an already-derived key; either
    /// way the name goes through the same derivation the filter uses.
    pub fn new(module: &str, action: PermissionAction) -> Self {
        Self {
            module_key: derive_key(module),
            action,
        }
    }

    /// Guard for read-style screens.
    pub fn view(module: &str) -> Self {
        Self::new(module, PermissionAction::Show)
    }

    /// Guard for blanket module access.
    pub fn manage(module: &str) -> Self {
        Self::new(module, PermissionAction::All)
    }
}

impl<S, B> Transform<S, ServiceRequest> for PermissionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = PermissionGuardMiddleware<S>;
    type InitError = ();
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let module_key = self.module_key.clone();
        let action = self.action.clone();
        Box::pin(async move {
            Ok(PermissionGuardMiddleware {
                service: Rc::new(service),
                module_key,
                action,
            })
        })
    }
}

pub struct PermissionGuardMiddleware<S> {
    service: Rc<S>,
    module_key: String,
    action: PermissionAction,
}

impl<S, B> Service<ServiceRequest> for PermissionGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = Rc::clone(&self.service);
        let module_key = self.module_key.clone();
        let action = self.action.clone();

        Box::pin(async move {
            let session = req.get_session();
            let uri = req.uri().to_string();

            match extract_permission_session(&session) {
                Ok(record) => {
                    let granted =
                        has_permission(&record.permissions, &module_key, action.as_str());

                    if granted {
                        info!(
                            "✅ Access granted for {} ({}:{}, role: {:?})",
                            uri, module_key, action.as_str(), record.role_name
                        );

                        // Insert the permission record into request extensions for use by handlers
                        req.extensions_mut().insert(record);
                        svc.call(req).await
                    } else {
                        warn!(
                            "🚫 Access denied for {} - missing {}:{} (role: {:?}, fetch_failed: {})",
                            uri, module_key, action.as_str(), record.role_name, record.fetch_failed
                        );
                        Err(actix_web::error::ErrorForbidden(format!(
                            "Access denied. Required permission: {}:{}",
                            module_key,
                            action.as_str()
                        )))
                    }
                }
                Err(auth_error) => {
                    warn!("🔐 No permission session for request: {} - {:?}", uri, auth_error);
                    Err(actix_web::error::ErrorUnauthorized("Authentication required"))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::session::{store_permission_session, PermissionSession};
    use actix_session::storage::CookieSessionStore;
    use actix_session::SessionMiddleware;
    use actix_web::cookie::Key;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};
    use serde_json::json;

    async fn seed_session(session: actix_session::Session, body: web::Json<serde_json::Value>) -> HttpResponse {
        let record = PermissionSession::ingest(&body);
        store_permission_session(&session, &record).unwrap();
        HttpResponse::Ok().finish()
    }

    fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
            .cookie_secure(false)
            .build()
    }

    #[actix_web::test]
    async fn test_guard_rejects_missing_session() {
        let app = test::init_service(
            App::new().wrap(session_middleware()).service(
                web::scope("/assets")
                    .wrap(PermissionGuard::view("Asset Registry"))
                    .route("", web::get().to(HttpResponse::Ok)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/assets").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn test_guard_allows_and_denies_by_hash() {
        let app = test::init_service(
            App::new()
                .wrap(session_middleware())
                .route("/seed", web::post().to(seed_session))
                .service(
                    web::scope("/assets")
                        .wrap(PermissionGuard::view("Asset Registry"))
                        .route("", web::get().to(HttpResponse::Ok)),
                )
                .service(
                    web::scope("/audits")
                        .wrap(PermissionGuard::view("Audits"))
                        .route("", web::get().to(HttpResponse::Ok)),
                ),
        )
        .await;

        let seed = test::TestRequest::post()
            .uri("/seed")
            .set_json(json!({
                "permissions_hash": { "asset_registry": { "show": "true" } }
            }))
            .to_request();
        let resp = test::call_service(&app, seed).await;
        let cookie = resp.response().cookies().next().unwrap().into_owned();

        let allowed = test::TestRequest::get()
            .uri("/assets")
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, allowed).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let denied = test::TestRequest::get()
            .uri("/audits")
            .cookie(cookie)
            .to_request();
        let err = test::try_call_service(&app, denied).await.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::FORBIDDEN
        );
    }
}
