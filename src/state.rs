use std::sync::Arc;

use sqlx::PgPool;

use crate::services::auth::jwt::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth: Arc<TokenService>,
}

impl AppState {
    pub fn new(db: PgPool, auth: Arc<TokenService>) -> Self {
        Self { db, auth }
    }
}
