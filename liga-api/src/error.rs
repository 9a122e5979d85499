/// Error handling for the API server
///
/// One error type for every handler: `Result<T, ApiError>` converts
/// automatically into an HTTP response. Status mapping follows the
/// league API's contract — validation failures and uniqueness conflicts
/// are both 400, natural-key misses are 404 everywhere, credential
/// failures 401, role failures 403, anything internal 500 with the
/// detail logged rather than leaked.
///
/// User-facing messages are Spanish; the machine-readable `error` code
/// stays English.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use liga_shared::auth::{jwt::JwtError, password::PasswordError};
use serde::{Deserialize, Serialize};

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or bad credentials (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but wrong role (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Natural-key lookup miss (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique constraint violated (400 per the API contract)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Schema validation failure (400)
    #[error("Validation failed: {} errors", .0.len())]
    Validation(Vec<ValidationErrorDetail>),

    /// Unexpected/database failure (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Validation error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,

    /// Human-readable message (Spanish)
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationErrorDetail>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg, None),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, "conflict", msg, None),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "La solicitud contiene campos inválidos".to_string(),
                Some(errors),
            ),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Error interno del servidor".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Registro no encontrado".to_string()),
            sqlx::Error::Database(db_err) => {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("email") {
                        return ApiError::Conflict(
                            "El usuario ya se encuentra registrado".to_string(),
                        );
                    }
                    return ApiError::Conflict(format!(
                        "Registro duplicado (restricción {})",
                        constraint
                    ));
                }

                ApiError::Internal(format!("Database error: {}", db_err))
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert schema validation errors to API errors
impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let details: Vec<ValidationErrorDetail> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationErrorDetail {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Campo inválido".to_string()),
                })
            })
            .collect();

        ApiError::Validation(details)
    }
}

/// Convert JWT errors to API errors
impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired | JwtError::Validation(_) => {
                ApiError::Unauthorized("Token inválido.".to_string())
            }
            JwtError::Create(msg) => ApiError::Internal(format!("Token creation failed: {}", msg)),
        }
    }
}

/// Convert password errors to API errors
impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::Internal(format!("Password operation failed: {}", err))
    }
}
