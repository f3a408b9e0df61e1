//! # afl_core - Statistical AFL Match Simulation Engine
//!
//! Simulates the outcome of an Australian-rules match between two 21-player
//! lineups: a final score, a per-player box score, and post-match award
//! votes. Everything derives from roster metadata plus seeded
//! pseudo-randomness; no play-by-play is modeled.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same result)
//! - Per-position statistical models kept as data, not control flow
//! - Library-level computation; all I/O belongs to the caller

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod run;
pub mod store;

// Re-export main API functions
pub use api::{simulate_match_json, SimulateRequest, SimulateResponse};
pub use engine::{simulate_with, MatchInput, MatchSimulator, SimulationOutput, TeamSheet};
pub use error::{Result, SimError};
pub use models::{
    BrownlowFormat, Line, LineupSlot, MatchId, MatchLineups, MatchResult, MatchStatus, MatchWinner,
    Player, PlayerId, PlayerMatchStat, Position, PositionGroup, SlotRef, TeamId, TeamLineup, Vote,
    VoteCategory,
};
pub use run::run_match;
pub use store::{LineupProvider, MemoryStore, ResultStore, RosterProvider};
