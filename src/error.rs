// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};

use crate::dtos::response::MessageResponse;
use crate::store::StoreError;

pub const SERVER_ERROR: &str = "Server error";

#[derive(Debug)]
pub enum AppError {
    /// A storage call failed. `message` is what the caller sees; the
    /// underlying error is logged by the handler and never returned.
    DatabaseError { source: StoreError, message: &'static str },
    /// A 500 that did not come from the store.
    Internal(String),
    NotFound(String),
    ValidationError(String),
}

impl AppError {
    pub fn db(err: StoreError) -> Self {
        AppError::DatabaseError { source: err, message: SERVER_ERROR }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    /// Replaces the caller-facing message of a storage failure.
    pub fn with_message(self, message: &'static str) -> Self {
        match self {
            AppError::DatabaseError { source, .. } => AppError::DatabaseError { source, message },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DatabaseError { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::DatabaseError { message, .. } => message.to_string(),
            AppError::Internal(msg) => msg,
            AppError::NotFound(msg) => msg,
            AppError::ValidationError(msg) => msg,
        };

        (status, Json(MessageResponse::failure(message))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::db(err)
    }
}
