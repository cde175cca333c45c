/*
 * Responsibility
 * - registration, login, and profile handlers
 * - profile visibility and the owner-only write rule go through the
 *   visibility resolver; handlers never compare identities themselves
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    api::dto::users::{
        CredentialsRequest, MessageResponse, ProfileResponse, ProfileUpdateRequest, TokenResponse,
    },
    api::extractors::{Auth, Identity},
    error::AppError,
    repos::error::RepoError,
    repos::user_repo,
    services::auth::password,
    services::visibility,
    state::AppState,
};

const USER_EXISTS: &str = "User already exists";

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let (email, pw) = req.credentials().map_err(AppError::bad_request)?;

    // Friendly pre-check; the primary key still catches a concurrent insert.
    if user_repo::find(&state.db, email).await?.is_some() {
        return Err(AppError::Internal(USER_EXISTS));
    }

    let hash = password::hash(pw)?;
    user_repo::insert(&state.db, email, &hash)
        .await
        .map_err(|e| match e {
            RepoError::Conflict => AppError::Internal(USER_EXISTS),
            other => other.into(),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created",
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let (email, pw) = req.credentials().map_err(AppError::bad_request)?;

    // Same response for unknown email and wrong password.
    let matched = user_repo::find(&state.db, email)
        .await?
        .map(|user| password::verify(&user.password_hash, pw))
        .unwrap_or(false);

    if !matched {
        return Err(AppError::Unauthorized("Incorrect email or password"));
    }

    let issued = state.auth.issue(email)?;

    Ok(Json(TokenResponse {
        token: issued.token,
        token_type: "Bearer",
        expires_in: issued.expires_in,
    }))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Auth(auth): Auth,
    Path(email): Path<String>,
) -> Result<Json<Value>, AppError> {
    let row = user_repo::find(&state.db, &email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let owner = Identity::new(row.email.clone());
    let record =
        serde_json::to_value(ProfileResponse::from(row)).map_err(|_| AppError::internal())?;
    let view = visibility::project(visibility::PROFILE_FIELDS, &auth, Some(&owner), record);

    Ok(Json(view))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Auth(auth): Auth,
    Path(email): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let owner = Identity::new(email.clone());
    visibility::authorize_write(&auth, Some(&owner))?;

    let req = ProfileUpdateRequest::parse(&body).map_err(AppError::bad_request)?;

    let row = user_repo::update_profile(
        &state.db,
        &email,
        &req.first_name,
        &req.last_name,
        req.dob,
        &req.address,
    )
    .await?
    .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let record =
        serde_json::to_value(ProfileResponse::from(row)).map_err(|_| AppError::internal())?;
    let view = visibility::project(visibility::PROFILE_FIELDS, &auth, Some(&owner), record);

    Ok(Json(view))
}
