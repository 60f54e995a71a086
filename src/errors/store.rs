use axum::http::StatusCode;
use thiserror::Error;

use super::{AppError, impl_into_response};

/// A single storage call against the database failed.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("error {operation}: {message}")]
    OperationFailed { operation: String, message: String },
}

impl AppError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            StoreError::OperationFailed { operation, .. } => {
                format!("Storage operation failed while {}", operation)
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StoreError::OperationFailed { .. } => "STORAGE_OPERATION_FAILED",
        }
    }

    fn suggested_action(&self) -> Option<String> {
        Some("Retry the request; if it keeps failing, check the database connection".to_string())
    }
}

impl_into_response!(StoreError);

impl StoreError {
    pub fn operation_failed<S: Into<String>>(operation: S, error: &anyhow::Error) -> Self {
        Self::OperationFailed {
            operation: operation.into(),
            message: format!("{:#}", error),
        }
    }
}
