use super::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the overall rating scale.
pub const MIN_RATING: u8 = 60;
/// Upper bound of the overall rating scale.
pub const MAX_RATING: u8 = 99;
/// Fallback team overall rating when none is recorded.
pub const DEFAULT_TEAM_OVERALL: u8 = 75;

/// The six on-field position tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Kdef,
    Def,
    Mid,
    Ruc,
    Fwd,
    Kfwd,
}

/// Grouping of two position tags considered adjacent in role. Playing out of
/// position inside the same line costs less than crossing lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Line {
    Defense,
    Midfield,
    Forward,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Kdef,
        Position::Def,
        Position::Mid,
        Position::Ruc,
        Position::Fwd,
        Position::Kfwd,
    ];

    pub fn line(&self) -> Line {
        match self {
            Position::Kdef | Position::Def => Line::Defense,
            Position::Mid | Position::Ruc => Line::Midfield,
            Position::Fwd | Position::Kfwd => Line::Forward,
        }
    }

    pub fn is_ruck(&self) -> bool {
        matches!(self, Position::Ruc)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Kdef => "KDEF",
            Position::Def => "DEF",
            Position::Mid => "MID",
            Position::Ruc => "RUC",
            Position::Fwd => "FWD",
            Position::Kfwd => "KFWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roster entry consumed by the simulation. Created and edited by the
/// roster-management collaborator; immutable during simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Primary position; fielding a player elsewhere costs rating points.
    pub position: Position,
    /// Overall rating, 60..=99.
    pub overall: u8,
}
