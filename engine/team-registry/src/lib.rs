//! Canonical NPB team roster and name reconciliation
//!
//! This crate owns the fixed 12-team roster (two leagues of six) and the
//! deterministic mapping from upstream free-text team names to canonical
//! team ids. The registry is immutable reference data: built once per run
//! and passed by shared reference into every pipeline stage.

pub mod registry;
pub mod roster;
pub mod types;

pub use registry::TeamRegistry;
pub use roster::seed_teams;
pub use types::{League, ResolveError, Team, TeamId};
