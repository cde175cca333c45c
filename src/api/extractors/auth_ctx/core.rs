use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::AuthResult;

/// Extractor handing the gate's `AuthResult` to a handler.
///
/// The gate middleware must have inserted the result into request
/// extensions. A missing extension means the gate is not mounted on this
/// route, which is a wiring bug, not an authentication failure (optional-auth
/// routes must still see `Unauthenticated`), so it surfaces as a 500.
pub struct Auth(pub AuthResult);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthResult>()
            .cloned()
            .map(Auth)
            .ok_or_else(|| {
                tracing::error!("AuthResult missing from request extensions; gate not mounted?");
                AppError::internal()
            })
    }
}
