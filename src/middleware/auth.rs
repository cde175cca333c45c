//! Authentication gate: classify the request's credential once, before any
//! handler logic, and attach the outcome to the request.
//!
//! The defining asymmetry: a request with *no* credential proceeds as
//! `Unauthenticated` (routes decide for themselves whether that matters),
//! while a request with a *broken* credential is terminated here with a 401.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::{AuthResult, Identity, RejectReason};
use crate::error::AppError;
use crate::services::auth::credential::{self, Credential};
use crate::services::auth::jwt::{TokenError, TokenService};
use crate::state::AppState;

/// Apply the gate to every route of `router`.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8's from_fn cannot take a State extractor, so state is passed
    // explicitly via from_fn_with_state.
    router.layer(middleware::from_fn_with_state(state, gate))
}

async fn gate(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    match classify(req.headers(), &state.auth) {
        AuthResult::Rejected(reason) => {
            tracing::warn!(?reason, "rejected credential");
            Err(AppError::Unauthorized(reason.message()))
        }
        result => {
            // middleware → extractor hand-off
            req.extensions_mut().insert(result);
            Ok(next.run(req).await)
        }
    }
}

/// Credential extraction + token verification, folded into the tri-state
/// result. Verification is strictly synchronous: by the time this returns,
/// the decision is final.
pub fn classify(headers: &HeaderMap, tokens: &TokenService) -> AuthResult {
    match credential::from_headers(headers) {
        Credential::Absent => AuthResult::Unauthenticated,
        Credential::Malformed => AuthResult::Rejected(RejectReason::Malformed),
        Credential::Bearer(token) => match tokens.verify(&token) {
            Ok(claims) => AuthResult::Authenticated(Identity::new(claims.email)),
            Err(TokenError::Expired) => AuthResult::Rejected(RejectReason::Expired),
            Err(TokenError::Invalid) => AuthResult::Rejected(RejectReason::InvalidSignature),
        },
    }
}
