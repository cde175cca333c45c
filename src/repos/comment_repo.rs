/*
 * Responsibility
 * - SQLx operations for the comments table
 * - the (volcano_id, user_email) primary key backs the one-comment-per-user
 *   invariant; insert maps its violation to RepoError::Conflict
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub volcano_id: i32,
    pub user_email: String,
    pub comment: String,
    pub rating: i32,
}

pub async fn list_by_volcano(db: &PgPool, volcano_id: i32) -> Result<Vec<CommentRow>, RepoError> {
    let rows = sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT volcano_id, user_email, comment, rating
        FROM comments
        WHERE volcano_id = $1
        ORDER BY user_email ASC
        "#,
    )
    .bind(volcano_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn find(
    db: &PgPool,
    volcano_id: i32,
    user_email: &str,
) -> Result<Option<CommentRow>, RepoError> {
    let row = sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT volcano_id, user_email, comment, rating
        FROM comments
        WHERE volcano_id = $1 AND user_email = $2
        "#,
    )
    .bind(volcano_id)
    .bind(user_email)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn insert(
    db: &PgPool,
    volcano_id: i32,
    user_email: &str,
    comment: &str,
    rating: i32,
) -> Result<CommentRow, RepoError> {
    let row = sqlx::query_as::<_, CommentRow>(
        r#"
        INSERT INTO comments (volcano_id, user_email, comment, rating)
        VALUES ($1, $2, $3, $4)
        RETURNING volcano_id, user_email, comment, rating
        "#,
    )
    .bind(volcano_id)
    .bind(user_email)
    .bind(comment)
    .bind(rating)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}
