//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// Body rejections that are not about the payload's content, e.g. an
    /// oversized body. Keeps the rejection's own status.
    #[error("{}", .0.body_text())]
    Body(JsonRejection),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                AppError::Validation("validation errors".into())
            }
            other => AppError::Body(other),
        }
    }
}

impl AppError {
    pub fn restaurant_not_found() -> Self {
        AppError::NotFound("Restaurant not found".into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Body(rejection) => rejection.status(),
        }
    }
}

/// `{"error": "..."}`, used for lookups that miss.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"errors": ["..."]}`, used for validation and store failures.
#[derive(Serialize)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::NotFound(error) => (status, Json(ErrorBody { error })).into_response(),
            AppError::Validation(message) => {
                (status, Json(ErrorsBody { errors: vec![message] })).into_response()
            }
            AppError::Body(rejection) => (
                status,
                Json(ErrorsBody {
                    errors: vec![rejection.body_text()],
                }),
            )
                .into_response(),
            AppError::Db(ref e) => {
                tracing::warn!(error = %e, "store operation failed");
                (
                    status,
                    Json(ErrorsBody {
                        errors: vec![self.to_string()],
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(AppError::restaurant_not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Validation("Invalid price".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Db(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_is_bare() {
        assert_eq!(AppError::restaurant_not_found().to_string(), "Restaurant not found");
    }

    #[test]
    fn db_error_text_is_prefixed() {
        let msg = AppError::Db(sqlx::Error::PoolClosed).to_string();
        assert!(msg.starts_with("database: "), "{msg}");
    }
}
