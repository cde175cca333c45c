/*
 * Responsibility
 * - the URL table
 * - every route here sits behind the authentication gate (applied in app.rs);
 *   whether a credential is required is decided per handler, not per route
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::handlers::{
    comments::{add_comment, list_comments},
    users::{get_profile, login, register, update_profile},
    volcanoes::{countries, get_volcano, list_volcanoes},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(countries))
        .route("/volcanoes", get(list_volcanoes))
        .route("/volcano/{volcano_id}", get(get_volcano))
        .route("/volcano/{volcano_id}/comments", get(list_comments))
        .route("/volcano/{volcano_id}/addcomment", post(add_comment))
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route(
            "/users/{email}/profile",
            get(get_profile).put(update_profile),
        )
}
