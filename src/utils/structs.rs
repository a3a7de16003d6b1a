// navx/src/utils/structs.rs
use serde::{Serialize, Deserialize};

use crate::utils::session::PermissionSession;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
        }
    }
}

/// Snapshot of the session's permission state for status endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct PermissionStatus {
    pub role_name: Option<String>,
    pub module_count: usize,
    pub fetch_failed: bool,
    pub fetched_at: i64,
}

impl From<&PermissionSession> for PermissionStatus {
    fn from(record: &PermissionSession) -> Self {
        Self {
            role_name: record.role_name.clone(),
            module_count: record.module_count(),
            fetch_failed: record.fetch_failed,
            fetched_at: record.fetched_at.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_envelopes() {
        let ok = ApiResponse::success(vec![1, 2, 3]);
        assert!(ok.success);
        assert_eq!(ok.data.unwrap().len(), 3);

        let err = ApiResponse::<()>::error("denied".to_string());
        assert!(!err.success);
        assert_eq!(err.message.as_deref(), Some("denied"));
    }

    #[test]
    fn test_status_snapshot() {
        let record = PermissionSession::empty();
        let status = PermissionStatus::from(&record);
        assert_eq!(status.module_count, 0);
        assert!(!status.fetch_failed);
        assert!(status.role_name.is_none());
    }
}
