//! Authenticated identity extraction.
//!
//! Authentication itself is an external collaborator: an upstream auth
//! layer validates credentials and forwards the caller's user id in the
//! `X-User-Id` header. This extractor only reads that header; there is no
//! ambient session state, and every handler receives the identity as an
//! explicit argument.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::ApiError;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the authenticated user.
///
/// Rejects requests without a non-empty `X-User-Id` header with 401.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Identity {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

        Ok(Identity {
            user_id: user_id.to_string(),
        })
    }
}
