// navx/src/error.rs

use actix_web::{HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Display)]
pub enum NavxError {
    #[display(fmt = "Not Found")]
    NotFound,
    #[display(fmt = "Bad Request: {}", _0)]
    BadRequest(String),
    #[display(fmt = "Authentication required")]
    Unauthorized,
    #[display(fmt = "Forbidden: {}", _0)]
    Forbidden(String),
    #[display(fmt = "User-role response has an unexpected shape")]
    UnexpectedResponseShape,
    #[display(fmt = "Internal Server Error")]
    InternalError,
}

impl std::error::Error for NavxError {}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for NavxError {
    fn error_response(&self) -> HttpResponse {
        let status = match self {
            NavxError::NotFound => actix_web::http::StatusCode::NOT_FOUND,
            NavxError::BadRequest(_) => actix_web::http::StatusCode::BAD_REQUEST,
            NavxError::Unauthorized => actix_web::http::StatusCode::UNAUTHORIZED,
            NavxError::Forbidden(_) => actix_web::http::StatusCode::FORBIDDEN,
            NavxError::UnexpectedResponseShape => actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
            NavxError::InternalError => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
