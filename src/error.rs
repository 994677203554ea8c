//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::InvalidInput { field, reason } => {
                AppError::Validation { field, reason }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation { field, reason } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                PricingErrorResponse {
                    error_type: "invalid_input".to_string(),
                    message: reason.clone(),
                    field: Some(field.to_string()),
                },
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PricingErrorResponse {
                        error_type: "internal".to_string(),
                        message: "Internal error".to_string(),
                        field: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
