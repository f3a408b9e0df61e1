use crate::models::{PlayerId, SlotRef, TeamId};
use thiserror::Error;

/// Errors surfaced by the simulation engine.
///
/// All lineup validation errors are detected before any randomness is drawn,
/// so a rejected simulation has no observable side effect.
#[derive(Error, Debug)]
pub enum SimError {
    /// One or more lineup slots have no player assigned. Recoverable: the
    /// caller re-prompts for lineup completion.
    #[error("incomplete lineup, empty slots: {}", format_slots(.missing))]
    IncompleteLineup { missing: Vec<SlotRef> },

    /// A player occupies more than one slot across the whole match.
    #[error("player {player} is assigned to more than one lineup slot")]
    DuplicateAssignment { player: PlayerId },

    /// The roster underlying a lineup has fewer than 21 distinct players.
    #[error("team {team} roster has {available} players, 21 required")]
    InsufficientRoster { team: TeamId, available: usize },

    /// A lineup slot references a player id missing from the team roster.
    #[error("lineup references player {player} not on team {team} roster")]
    UnknownPlayer { player: PlayerId, team: TeamId },

    /// Brownlow format string was not one of the two enumerated values.
    /// Caller bug, not retried.
    #[error("invalid brownlow format {0:?}, expected \"3-2-1\" or \"5-4-3-2-1\"")]
    InvalidFormat(String),

    /// Malformed request at the JSON boundary.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Opaque failure from a storage collaborator. The engine performs no
    /// partial commits and does not retry internally.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

fn format_slots(slots: &[SlotRef]) -> String {
    slots
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, SimError>;
