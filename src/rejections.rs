use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Handler-level rejection. Every variant renders as the JSON error envelope
/// `{"success": false, "error": <status>, "message": <text>}`.
#[derive(Debug)]
pub enum AppError {
    Input(&'static str),
    NotFound,
    Unprocessable(&'static str),
    Internal(&'static str),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::Input(_) => "Bad request.",
            AppError::NotFound => "This page does not exist.",
            AppError::Unprocessable(_) => "Unable to process request.",
            AppError::Internal(_) => "Server error.",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Input(context)
            | AppError::Unprocessable(context)
            | AppError::Internal(context) => {
                tracing::debug!("request rejected with {}: {context}", status.as_u16());
            }
            AppError::NotFound => {}
        }
        (status, error_body(status, self.message())).into_response()
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub async fn method_not_allowed() -> Response {
    let status = StatusCode::METHOD_NOT_ALLOWED;
    (
        status,
        error_body(status, "The method is not allowed for the requested URL."),
    )
        .into_response()
}

fn error_body(status: StatusCode, message: &str) -> Json<serde_json::Value> {
    Json(json!({
        "success": false,
        "error": status.as_u16(),
        "message": message,
    }))
}

/// Shorthand for mapping db-layer failures onto rejections at call sites.
pub trait ResultExt<T> {
    fn reject(self, context: &'static str) -> Result<T, AppError>;
    fn reject_input(self, context: &'static str) -> Result<T, AppError>;
    fn reject_unprocessable(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            AppError::Internal(context)
        })
    }

    fn reject_input(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{context}: {e}");
            AppError::Input(context)
        })
    }

    fn reject_unprocessable(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{context}: {e}");
            AppError::Unprocessable(context)
        })
    }
}
