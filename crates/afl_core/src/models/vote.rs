use super::{MatchId, PlayerId, TeamId};
use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two independent post-match award-vote pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteCategory {
    Coaches,
    Brownlow,
}

/// Brownlow allocation format, chosen by the caller per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrownlowFormat {
    #[serde(rename = "3-2-1")]
    Traditional,
    #[serde(rename = "5-4-3-2-1")]
    Extended,
}

impl BrownlowFormat {
    /// Votes by rank, best first.
    pub fn allocation(&self) -> &'static [u32] {
        match self {
            BrownlowFormat::Traditional => &[3, 2, 1],
            BrownlowFormat::Extended => &[5, 4, 3, 2, 1],
        }
    }

    /// Fixed pool size: 6 for 3-2-1, 15 for 5-4-3-2-1.
    pub fn pool(&self) -> u32 {
        self.allocation().iter().sum()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrownlowFormat::Traditional => "3-2-1",
            BrownlowFormat::Extended => "5-4-3-2-1",
        }
    }
}

impl FromStr for BrownlowFormat {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3-2-1" => Ok(BrownlowFormat::Traditional),
            "5-4-3-2-1" => Ok(BrownlowFormat::Extended),
            other => Err(SimError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for BrownlowFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One vote record. Vote rows for a match are fully replaced on
/// regeneration, never appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub category: VoteCategory,
    pub votes: u32,
    /// Present on brownlow votes only; tags which allocation produced the row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<BrownlowFormat>,
}
