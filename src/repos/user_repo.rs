/*
 * Responsibility
 * - SQLx operations for the users table
 * - the password hash stays inside this row type; response shaping happens
 *   at the API layer and never includes it
 */
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<NaiveDate>,
    pub address: Option<String>,
}

pub async fn find(db: &PgPool, email: &str) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT email, password_hash, first_name, last_name, dob, address
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn insert(db: &PgPool, email: &str, password_hash: &str) -> Result<(), RepoError> {
    sqlx::query(
        r#"
        INSERT INTO users (email, password_hash)
        VALUES ($1, $2)
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .execute(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(())
}

pub async fn update_profile(
    db: &PgPool,
    email: &str,
    first_name: &str,
    last_name: &str,
    dob: NaiveDate,
    address: &str,
) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET first_name = $2, last_name = $3, dob = $4, address = $5
        WHERE email = $1
        RETURNING email, password_hash, first_name, last_name, dob, address
        "#,
    )
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .bind(dob)
    .bind(address)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
