// navx/src/models/permission_model.rs
use serde::{Serialize, Deserialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// Actions granted for one module, e.g. `{"show": "true", "create": false}`.
pub type ActionMap = HashMap<String, PermissionValue>;

/// Server-supplied permission hash: module key -> action name -> value.
/// Module keys are case-sensitive snake_case; duplicates at the JSON layer
/// resolve last-write-wins.
pub type PermissionsHash = HashMap<String, ActionMap>;

/// A single permission value as the backend encodes it.
///
/// The source boundary is inconsistent: values arrive as native booleans or
/// as the strings `"true"` / `"false"`. The ambiguity is resolved exactly
/// once, in [`PermissionValue::is_granted`]; the rest of the crate only ever
/// sees the boolean answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionValue {
    Bool(bool),
    Text(String),
}

impl PermissionValue {
    pub fn is_granted(&self) -> bool {
        match self {
            PermissionValue::Bool(value) => *value,
            // Any string other than "true" (including "false") denies.
            PermissionValue::Text(value) => value == "true",
        }
    }
}

/// Normalize a raw `permissions_hash` field into a [`PermissionsHash`].
///
/// The backend sends either an already-shaped JSON object or a JSON-encoded
/// string. Anything unparsable becomes an EMPTY hash: a user with no
/// readable permissions sees no menu, which is the safe failure mode.
pub fn parse_permissions_hash(raw: &Value) -> PermissionsHash {
    match raw {
        Value::Object(_) => match serde_json::from_value(raw.clone()) {
            Ok(hash) => hash,
            Err(err) => {
                warn!("Permissions hash object has unexpected value types: {}", err);
                PermissionsHash::new()
            }
        },
        Value::String(encoded) => parse_permissions_json(encoded),
        Value::Null => PermissionsHash::new(),
        other => {
            warn!("Permissions hash is neither object nor string: {:?}", other);
            PermissionsHash::new()
        }
    }
}

/// Parse a JSON-encoded permissions hash string. Malformed JSON is logged
/// and yields an empty hash rather than an error.
pub fn parse_permissions_json(raw: &str) -> PermissionsHash {
    if raw.trim().is_empty() {
        return PermissionsHash::new();
    }

    match serde_json::from_str(raw) {
        Ok(hash) => hash,
        Err(err) => {
            warn!("Failed to parse permissions hash string: {}", err);
            PermissionsHash::new()
        }
    }
}

#[derive(Debug, Error)]
pub enum PermissionIngestError {
    #[error("response carries neither `user_role` nor `permissions_hash`")]
    UnexpectedShape,
    #[error("response body is not a JSON object: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The `user_role` object of the role endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRole {
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub permissions_hash: Value,
}

/// Body of the user-role endpoint. The backend answers in one of two
/// shapes: `{ "user_role": { "role_name", "permissions_hash" } }` or a bare
/// `{ "permissions_hash" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleResponse {
    #[serde(default)]
    pub user_role: Option<UserRole>,
    #[serde(default)]
    pub permissions_hash: Option<Value>,
}

impl UserRoleResponse {
    pub fn from_body(body: &Value) -> Result<Self, PermissionIngestError> {
        Ok(serde_json::from_value(body.clone())?)
    }

    /// Pull the role name and normalized permissions out of whichever shape
    /// the backend used. Neither key present is an explicit error; the
    /// session layer records it as a failed fetch.
    pub fn resolve(&self) -> Result<(Option<String>, PermissionsHash), PermissionIngestError> {
        if let Some(user_role) = &self.user_role {
            return Ok((
                user_role.role_name.clone(),
                parse_permissions_hash(&user_role.permissions_hash),
            ));
        }

        if let Some(hash) = &self.permissions_hash {
            return Ok((None, parse_permissions_hash(hash)));
        }

        Err(PermissionIngestError::UnexpectedShape)
    }
}
