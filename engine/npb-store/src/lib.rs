//! Postgres persistence layer
//!
//! Owns the durable copies of standings, games and teams. Writes go
//! through idempotent natural-key upserts (one batched statement per
//! record kind) so repeated ingestion runs converge to the same stored
//! state; the pipeline never reads persisted rows back for
//! reconciliation logic.

pub mod error;
pub mod games;
pub mod records;
pub mod standings;
pub mod teams;

pub use error::StoreError;
pub use games::{GameRow, GamesStore};
pub use records::{GameRecord, GameStatus, StandingRecord};
pub use standings::{StandingRow, StandingsStore};
pub use teams::TeamsStore;
