use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use redpen_core::error::CoreError;
use serde::Serialize;

/// Error type returned by every handler.
///
/// Domain failures arrive as [`CoreError`]; the two extra variants cover
/// problems that only exist at the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Status and machine code for a domain error.
fn classify(core: &CoreError) -> (StatusCode, &'static str) {
    match core {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        CoreError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        CoreError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
        CoreError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        CoreError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        CoreError::InvalidState(_) => (StatusCode::CONFLICT, "INVALID_STATE"),
        CoreError::InvalidOperation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_OPERATION"),
        CoreError::IncompleteDecision { .. } => (StatusCode::CONFLICT, "INCOMPLETE_DECISION"),
        CoreError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

/// Client-facing message for a domain error. Internal details never leave
/// the process.
fn public_message(core: &CoreError) -> String {
    match core {
        CoreError::NotFound { entity, id } => format!("{entity} with id {id} not found"),
        CoreError::Validation(msg)
        | CoreError::Conflict(msg)
        | CoreError::Unauthorized(msg)
        | CoreError::Forbidden(msg)
        | CoreError::InvalidState(msg)
        | CoreError::InvalidOperation(msg) => msg.clone(),
        CoreError::IncompleteDecision { .. } => core.to_string(),
        CoreError::Internal(detail) => {
            tracing::error!(error = %detail, "Internal core error");
            INTERNAL_MESSAGE.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => {
                let (status, code) = classify(core);
                (
                    status,
                    ErrorBody {
                        error: public_message(core),
                        code,
                    },
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: msg.clone(),
                    code: "BAD_REQUEST",
                },
            ),
            AppError::InternalError(detail) => {
                tracing::error!(error = %detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: INTERNAL_MESSAGE.to_string(),
                        code: "INTERNAL_ERROR",
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
