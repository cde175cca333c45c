/*
 * Responsibility
 * - comment handlers: listing is open, creation requires an identity and
 *   goes through the uniqueness guard
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    api::dto::comments::{AddCommentRequest, CommentResponse},
    api::extractors::Auth,
    error::AppError,
    repos::comment_repo,
    services::{comments, visibility},
    state::AppState,
};

pub async fn list_comments(
    State(state): State<AppState>,
    Path(volcano_id): Path<i32>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let rows = comment_repo::list_by_volcano(&state.db, volcano_id).await?;

    if rows.is_empty() {
        return Err(AppError::NotFound(format!(
            "No comments found for volcano with ID: {volcano_id}."
        )));
    }

    Ok(Json(rows.into_iter().map(CommentResponse::from).collect()))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Auth(auth): Auth,
    Path(volcano_id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    // Any authenticated identity may comment; no resource owner here.
    let identity = visibility::authorize_write(&auth, None)?;

    let req = AddCommentRequest::parse(&body).map_err(AppError::bad_request)?;

    let row =
        comments::add_comment(&state.db, volcano_id, &identity, &req.comment, req.rating).await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}
