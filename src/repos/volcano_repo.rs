/*
 * Responsibility
 * - SQLx reads over the volcanoes table (reference data, never written here)
 */
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, FromRow, Serialize)]
pub struct VolcanoRow {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub region: String,
    pub subregion: String,
    pub last_eruption: String,
    pub summit: i32,
    pub elevation: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub population_5km: i32,
    pub population_10km: i32,
    pub population_30km: i32,
    pub population_100km: i32,
}

#[derive(Debug, FromRow, Serialize)]
pub struct VolcanoSummaryRow {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub region: String,
    pub subregion: String,
}

/// Radius variants of the populatedWithin filter. Closed set: the column
/// name interpolated into SQL can only come from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulatedWithin {
    Km5,
    Km10,
    Km30,
    Km100,
}

impl PopulatedWithin {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "5km" => Some(Self::Km5),
            "10km" => Some(Self::Km10),
            "30km" => Some(Self::Km30),
            "100km" => Some(Self::Km100),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Km5 => "population_5km",
            Self::Km10 => "population_10km",
            Self::Km30 => "population_30km",
            Self::Km100 => "population_100km",
        }
    }
}

pub async fn countries(db: &PgPool) -> Result<Vec<String>, RepoError> {
    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT country
        FROM volcanoes
        ORDER BY country ASC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(names)
}

pub async fn list_by_country(
    db: &PgPool,
    country: &str,
    populated_within: Option<PopulatedWithin>,
) -> Result<Vec<VolcanoSummaryRow>, RepoError> {
    let rows = match populated_within {
        None => {
            sqlx::query_as::<_, VolcanoSummaryRow>(
                r#"
                SELECT id, name, country, region, subregion
                FROM volcanoes
                WHERE country = $1
                ORDER BY id ASC
                "#,
            )
            .bind(country)
            .fetch_all(db)
            .await?
        }
        Some(radius) => {
            let sql = format!(
                r#"
                SELECT id, name, country, region, subregion
                FROM volcanoes
                WHERE country = $1 AND {} > 1
                ORDER BY id ASC
                "#,
                radius.column()
            );
            sqlx::query_as::<_, VolcanoSummaryRow>(&sql)
                .bind(country)
                .fetch_all(db)
                .await?
        }
    };

    Ok(rows)
}

pub async fn get(db: &PgPool, volcano_id: i32) -> Result<Option<VolcanoRow>, RepoError> {
    let row = sqlx::query_as::<_, VolcanoRow>(
        r#"
        SELECT id, name, country, region, subregion,
               last_eruption, summit, elevation, latitude, longitude,
               population_5km, population_10km, population_30km, population_100km
        FROM volcanoes
        WHERE id = $1
        "#,
    )
    .bind(volcano_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
