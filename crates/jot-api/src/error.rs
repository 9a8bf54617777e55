//! HTTP error mapping.

use axum::{http::StatusCode, response::IntoResponse, Json};

/// API-level error, carrying the HTTP status to surface.
#[derive(Debug)]
pub enum ApiError {
    Database(jot_core::Error),
    Unauthorized(String),
    NotFound(String),
    BadRequest(String),
    Conflict(String),
}

impl From<jot_core::Error> for ApiError {
    fn from(err: jot_core::Error) -> Self {
        match &err {
            jot_core::Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            jot_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            // Unarchiving a non-archived note is a client error, matching
            // the 400 contract of PUT /archive/:id/unarchive.
            jot_core::Error::InvalidState(msg) => ApiError::BadRequest(msg.clone()),
            jot_core::Error::Conflict(msg) => ApiError::Conflict(msg.clone()),
            jot_core::Error::Database(sqlx_err) => {
                // Duplicate-key races that escape the repositories (lazy
                // tag creation under concurrency) still surface as 409.
                let msg = sqlx_err.to_string();
                if msg.contains("duplicate key") || msg.contains("unique constraint") {
                    return ApiError::Conflict(msg);
                }
                ApiError::Database(err)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jot_core::Error;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = Error::NotFound("Note 1 not found".to_string()).into();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let err: ApiError = Error::InvalidInput("text is required".to_string()).into();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_state_maps_to_400() {
        let err: ApiError = Error::InvalidState("not archived".to_string()).into();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let err: ApiError = Error::Conflict("tag exists".to_string()).into();
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        assert_eq!(
            status_of(ApiError::Unauthorized("who are you".to_string())),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let err: ApiError = Error::Database(sqlx::Error::PoolClosed).into();
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
