use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// HTTP-boundary error rendered as the `{success:false, message}` envelope.
///
/// Routes whose legacy contract deviates from the envelope (the plain-text
/// update failure, the delete `error` key, the totalsales `succes` typo)
/// build those responses inline in the handler instead of going through this
/// type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("order not found!")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => AppError::NotFound,
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().json(json!({
                "success": false,
                "message": self.to_string()
            })),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": msg
            })),
            AppError::Internal(msg) => HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": msg
            })),
        }
    }
}
