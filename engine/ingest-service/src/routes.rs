//! HTTP routes for the ingest service.

use crate::runner::{run_daily_cycle, IngestContext};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::error;
use warp::http::StatusCode;
use warp::Filter;

/// Query parameters for the daily trigger.
#[derive(Debug, Deserialize)]
pub struct CronDailyParams {
    pub date: Option<NaiveDate>,
    pub season: Option<i32>,
}

/// Success response body.
#[derive(Debug, Serialize)]
pub struct CronDailyResponse {
    pub success: bool,
    pub date: NaiveDate,
    pub season: i32,
    pub preseason: bool,
    pub counts: CronCounts,
}

#[derive(Debug, Serialize)]
pub struct CronCounts {
    pub games: usize,
    pub standings: usize,
}

/// Failure response body. No partial-success state exists: a run either
/// fully succeeds or reports a single human-readable error.
#[derive(Debug, Serialize)]
pub struct CronErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Create the service routes: the daily cron trigger and a health check.
pub fn create_routes(
    ctx: Arc<IngestContext>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let ctx_filter = warp::any().map(move || ctx.clone());

    let cron_daily = warp::path("cron")
        .and(warp::path("daily"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<CronDailyParams>())
        .and(ctx_filter)
        .and_then(handle_cron_daily);

    let health = warp::path("health").and(warp::path::end()).and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({"status": "ok"}))
    });

    cron_daily.or(health)
}

async fn handle_cron_daily(
    params: CronDailyParams,
    ctx: Arc<IngestContext>,
) -> Result<impl warp::Reply, Infallible> {
    let today = Local::now().date_naive();
    let date = params.date.unwrap_or(today);
    let season = params.season.unwrap_or_else(|| today.year());

    match run_daily_cycle(&ctx, date, season).await {
        Ok(report) => {
            let body = CronDailyResponse {
                success: true,
                date: report.date,
                season: report.season,
                preseason: report.preseason,
                counts: CronCounts {
                    games: report.games_count,
                    standings: report.standings_count,
                },
            };
            Ok(warp::reply::with_status(warp::reply::json(&body), StatusCode::OK))
        }
        Err(err) => {
            error!(%err, "daily ingestion cycle failed");
            let body = CronErrorResponse { success: false, error: err.to_string() };
            Ok(warp::reply::with_status(
                warp::reply::json(&body),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
