use super::{MatchId, TeamId};
use serde::{Deserialize, Serialize};

/// Match lifecycle. Transitions `Setup` -> `Completed` only once the full
/// result set has been committed by the persistence collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Setup,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchWinner {
    Home,
    Away,
    Draw,
}

/// Final match outcome. Scores are total points (goals * 6 + behinds, after
/// team strength and variance modifiers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_id: MatchId,
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub status: MatchStatus,
}

impl MatchResult {
    /// Strictly higher score wins; equal scores are a draw. No tie-break
    /// stat is consulted for the match result itself.
    pub fn winner(&self) -> MatchWinner {
        if self.home_score > self.away_score {
            MatchWinner::Home
        } else if self.away_score > self.home_score {
            MatchWinner::Away
        } else {
            MatchWinner::Draw
        }
    }
}
