// navx/src/utils/session.rs
use actix_session::Session;
use actix_web::Error;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use serde_json::Value;
use tracing::warn;

use crate::models::permission_model::{PermissionsHash, UserRoleResponse};

/// Session key the permission record is stored under.
pub const PERMISSION_SESSION_KEY: &str = "navx_permissions";

/// Per-session permission record: written once after the host fetches the
/// user-role payload, read on every navigation/guard check, discarded at
/// logout. Never persisted anywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionSession {
    pub role_name: Option<String>,
    pub permissions: PermissionsHash,
    /// Set when the role payload had neither accepted shape. The hash is
    /// empty in that case, so every check denies until a manual refresh.
    pub fetch_failed: bool,
    pub fetched_at: DateTime<Utc>,
}

impl PermissionSession {
    pub fn empty() -> Self {
        Self {
            role_name: None,
            permissions: PermissionsHash::new(),
            fetch_failed: false,
            fetched_at: Utc::now(),
        }
    }

    fn failed() -> Self {
        Self {
            fetch_failed: true,
            ..Self::empty()
        }
    }

    /// Ingest a user-role response body, whatever shape it arrived in.
    /// Never errors: an unrecognizable body becomes the explicit
    /// failed-fetch state with an empty (deny-all) hash.
    pub fn ingest(body: &Value) -> Self {
        let response = match UserRoleResponse::from_body(body) {
            Ok(response) => response,
            Err(err) => {
                warn!("User-role payload is not an object: {}", err);
                return Self::failed();
            }
        };

        match response.resolve() {
            Ok((role_name, permissions)) => Self {
                role_name,
                permissions,
                fetch_failed: false,
                fetched_at: Utc::now(),
            },
            Err(err) => {
                warn!("User-role payload rejected: {}", err);
                Self::failed()
            }
        }
    }

    pub fn module_count(&self) -> usize {
        self.permissions.len()
    }
}

pub fn store_permission_session(
    session: &Session,
    permissions: &PermissionSession,
) -> Result<(), Error> {
    session
        .insert(PERMISSION_SESSION_KEY, permissions)
        .map_err(|err| {
            warn!("Failed to store permission session: {}", err);
            actix_web::error::ErrorInternalServerError("Session storage failed")
        })
}

pub fn extract_permission_session(session: &Session) -> Result<PermissionSession, Error> {
    session
        .get::<PermissionSession>(PERMISSION_SESSION_KEY)
        .map_err(|_| actix_web::error::ErrorUnauthorized("Invalid session"))?
        .ok_or_else(|| actix_web::error::ErrorUnauthorized("No permission data in session"))
}

pub fn clear_permission_session(session: &Session) {
    session.remove(PERMISSION_SESSION_KEY);
}
