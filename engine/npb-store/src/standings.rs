//! Idempotent standings writer and the preseason keepalive.

use crate::error::{Result, StoreError};
use crate::records::StandingRecord;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::info;

/// A persisted standings row, as returned by the store after an upsert.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StandingRow {
    pub team_id: String,
    pub season: i32,
    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
    pub games_back: f64,
    pub pct: Option<f64>,
    pub home_record: Option<String>,
    pub away_record: Option<String>,
    pub last_10: Option<String>,
    pub league: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Standings persistence, keyed by the `(team_id, season)` natural key.
pub struct StandingsStore {
    pool: PgPool,
}

impl StandingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert a validated record set in one batched statement.
    ///
    /// The single statement is atomic on the store side: either every
    /// row lands or none does. Calling this twice with identical input
    /// leaves the same keys with a refreshed `updated_at`. Empty input
    /// is a no-op.
    pub async fn upsert(&self, records: &[StandingRecord]) -> Result<Vec<StandingRow>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO standings \
             (team_id, season, wins, losses, ties, games_back, pct, \
              home_record, away_record, last_10, league, updated_at) ",
        );

        builder.push_values(records, |mut row, record| {
            row.push_bind(record.team_id.as_str())
                .push_bind(record.season)
                .push_bind(record.wins)
                .push_bind(record.losses)
                .push_bind(record.ties)
                .push_bind(record.games_back)
                .push_bind(record.win_pct)
                .push_bind(record.home_record.as_deref())
                .push_bind(record.away_record.as_deref())
                .push_bind(record.last_10.as_deref())
                .push_bind(record.league.as_str())
                .push("now()");
        });

        builder.push(
            " ON CONFLICT (team_id, season) DO UPDATE SET \
             wins = EXCLUDED.wins, \
             losses = EXCLUDED.losses, \
             ties = EXCLUDED.ties, \
             games_back = EXCLUDED.games_back, \
             pct = EXCLUDED.pct, \
             home_record = EXCLUDED.home_record, \
             away_record = EXCLUDED.away_record, \
             last_10 = EXCLUDED.last_10, \
             league = EXCLUDED.league, \
             updated_at = EXCLUDED.updated_at \
             RETURNING team_id, season, wins, losses, ties, games_back, pct, \
             home_record, away_record, last_10, league, created_at, updated_at",
        );

        let rows = builder
            .build_query_as::<StandingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from)?;

        info!(count = rows.len(), "upserted standings rows");
        Ok(rows)
    }

    /// Preseason keepalive: refresh `updated_at` on every existing row
    /// for the season without touching any statistic. Returns the number
    /// of rows touched; zero is legitimate for a brand-new season.
    pub async fn touch_season(&self, season: i32) -> Result<u64> {
        let result = sqlx::query("UPDATE standings SET updated_at = now() WHERE season = $1")
            .bind(season)
            .execute(&self.pool)
            .await?;

        let touched = result.rows_affected();
        info!(season, touched, "preseason keepalive touched standings rows");
        Ok(touched)
    }
}
