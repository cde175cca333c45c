/*
 * Responsibility
 * - volcano reference-data handlers
 * - detail visibility is decided by the field table, never inline
 */
use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;

use crate::{
    api::dto::volcanoes::VolcanoesQuery,
    api::extractors::Auth,
    error::AppError,
    repos::volcano_repo::{self, VolcanoSummaryRow},
    services::visibility,
    state::AppState,
};

pub async fn countries(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let names = volcano_repo::countries(&state.db).await?;
    Ok(Json(names))
}

pub async fn list_volcanoes(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<VolcanoSummaryRow>>, AppError> {
    let query = VolcanoesQuery::from_params(&params).map_err(AppError::BadRequest)?;

    let rows =
        volcano_repo::list_by_country(&state.db, &query.country, query.populated_within).await?;

    Ok(Json(rows))
}

pub async fn get_volcano(
    State(state): State<AppState>,
    Auth(auth): Auth,
    Path(volcano_id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let row = volcano_repo::get(&state.db, volcano_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Volcano with ID: {volcano_id} not found.")))?;

    let record = serde_json::to_value(&row).map_err(|_| AppError::internal())?;
    let view = visibility::project(visibility::VOLCANO_FIELDS, &auth, None, record);

    Ok(Json(view))
}
