//! Request body extraction.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::IntoResponse,
};
use serde::Serialize;

use crate::ApiError;

/// JSON body extractor whose rejections follow the API error contract.
///
/// axum's own extractor answers malformed bodies and missing fields with
/// 422; here every validation failure is a 400 with an `{"error": ...}`
/// body, so the rejection is remapped before it reaches the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}
