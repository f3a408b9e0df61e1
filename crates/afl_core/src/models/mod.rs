//! Data model for the simulation engine: players, lineups, box scores,
//! match results, and award votes. All entities are scoped to one match and
//! owned by the simulation result for that match.

mod lineup;
mod match_result;
mod player;
mod stats;
mod vote;

pub use lineup::{LineupSlot, MatchLineups, PositionGroup, SlotRef, TeamLineup, LINEUP_SIZE};
pub use match_result::{MatchResult, MatchStatus, MatchWinner};
pub use player::{Line, Player, Position, DEFAULT_TEAM_OVERALL, MAX_RATING, MIN_RATING};
pub use stats::PlayerMatchStat;
pub use vote::{BrownlowFormat, Vote, VoteCategory};

use uuid::Uuid;

pub type PlayerId = Uuid;
pub type TeamId = Uuid;
pub type MatchId = Uuid;
