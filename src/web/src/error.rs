use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use workout_core::WorkoutError;

/// Custom error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<WorkoutError> for ApiError {
    fn from(err: WorkoutError) -> Self {
        let message = match err {
            WorkoutError::MissingField(_) => "Missing required fields",
            WorkoutError::InvalidType(_) => "Invalid data types",
        };

        ApiError::BadRequest(message.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::InternalError(format!("IO error: {}", err))
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_errors_are_bad_requests() {
        let missing = ApiError::from(WorkoutError::MissingField("duration")).into_response();
        let invalid = ApiError::from(WorkoutError::InvalidType("calories")).into_response();

        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_io_error_is_internal() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");

        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
