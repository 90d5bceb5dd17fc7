//! Idempotent games writer.

use crate::error::{Result, StoreError};
use crate::records::GameRecord;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::info;

/// A persisted game row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GameRow {
    pub date: NaiveDate,
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Games persistence, keyed by `(date, home_team_id, away_team_id)`.
pub struct GamesStore {
    pool: PgPool,
}

impl GamesStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert game records in one batched statement. Empty input is a
    /// no-op returning an empty list.
    pub async fn upsert(&self, records: &[GameRecord]) -> Result<Vec<GameRow>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO games \
             (date, home_team_id, away_team_id, home_score, away_score, status, updated_at) ",
        );

        builder.push_values(records, |mut row, record| {
            row.push_bind(record.date)
                .push_bind(record.home_team_id.as_str())
                .push_bind(record.away_team_id.as_str())
                .push_bind(record.home_score)
                .push_bind(record.away_score)
                .push_bind(record.status.as_str())
                .push("now()");
        });

        builder.push(
            " ON CONFLICT (date, home_team_id, away_team_id) DO UPDATE SET \
             home_score = EXCLUDED.home_score, \
             away_score = EXCLUDED.away_score, \
             status = EXCLUDED.status, \
             updated_at = EXCLUDED.updated_at \
             RETURNING date, home_team_id, away_team_id, home_score, away_score, \
             status, created_at, updated_at",
        );

        let rows = builder
            .build_query_as::<GameRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from)?;

        info!(count = rows.len(), "upserted game rows");
        Ok(rows)
    }
}
