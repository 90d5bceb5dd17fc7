//! NPB Ingest Service
//!
//! The invocation boundary of the ingestion engine: a warp HTTP service
//! exposing the scheduled trigger (`GET /cron/daily`) and a health
//! check, plus the shared run-cycle orchestration used by both the
//! service and the one-shot `run-ingest` binary.

pub mod config;
pub mod routes;
pub mod runner;

pub use config::ServiceConfig;
pub use routes::create_routes;
pub use runner::{ensure_seeded_teams, run_daily_cycle, CycleReport, IngestContext};
