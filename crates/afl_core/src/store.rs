//! Collaborator interfaces.
//!
//! The engine performs no I/O itself. Rosters, lineups, and team overalls
//! come from providers; the combined result set goes out through
//! [`ResultStore::commit`] as a single atomic unit. An in-memory
//! implementation backs tests and demo orchestration.

use crate::engine::SimulationOutput;
use crate::error::{Result, SimError};
use crate::models::{
    MatchId, MatchLineups, MatchResult, Player, PlayerMatchStat, TeamId, Vote, VoteCategory,
};
use std::collections::HashMap;

/// Read-only roster access.
pub trait RosterProvider {
    fn roster(&self, team: TeamId) -> Result<Vec<Player>>;

    /// Team overall rating in 60..=99. `None` is a non-fatal data gap; the
    /// engine falls back to 75.
    fn team_overall(&self, team: TeamId) -> Result<Option<u8>>;
}

/// Read-only lineup access for a match.
pub trait LineupProvider {
    fn lineup(&self, match_id: MatchId) -> Result<MatchLineups>;
}

/// Persistence sink for simulation output.
///
/// `commit` must be all-or-nothing from the caller's perspective: stats and
/// votes for the match are fully replaced, never appended, and the stored
/// match status only reads `completed` once the whole result set is durable.
pub trait ResultStore {
    fn commit(&mut self, output: &SimulationOutput) -> Result<()>;

    fn match_result(&self, match_id: MatchId) -> Result<Option<MatchResult>>;
    fn player_stats(&self, match_id: MatchId) -> Result<Vec<PlayerMatchStat>>;
    fn votes(&self, match_id: MatchId, category: VoteCategory) -> Result<Vec<Vote>>;
}

/// In-memory implementation of all three collaborator interfaces.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rosters: HashMap<TeamId, Vec<Player>>,
    overalls: HashMap<TeamId, u8>,
    lineups: HashMap<MatchId, MatchLineups>,
    results: HashMap<MatchId, MatchResult>,
    stats: HashMap<MatchId, Vec<PlayerMatchStat>>,
    votes: HashMap<(MatchId, VoteCategory), Vec<Vote>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_roster(&mut self, team: TeamId, roster: Vec<Player>) {
        self.rosters.insert(team, roster);
    }

    pub fn set_team_overall(&mut self, team: TeamId, overall: u8) {
        self.overalls.insert(team, overall);
    }

    pub fn insert_lineups(&mut self, match_id: MatchId, lineups: MatchLineups) {
        self.lineups.insert(match_id, lineups);
    }
}

impl RosterProvider for MemoryStore {
    fn roster(&self, team: TeamId) -> Result<Vec<Player>> {
        self.rosters
            .get(&team)
            .cloned()
            .ok_or_else(|| SimError::Persistence(format!("no roster stored for team {team}")))
    }

    fn team_overall(&self, team: TeamId) -> Result<Option<u8>> {
        Ok(self.overalls.get(&team).copied())
    }
}

impl LineupProvider for MemoryStore {
    fn lineup(&self, match_id: MatchId) -> Result<MatchLineups> {
        self.lineups
            .get(&match_id)
            .cloned()
            .ok_or_else(|| SimError::Persistence(format!("no lineups stored for match {match_id}")))
    }
}

impl ResultStore for MemoryStore {
    fn commit(&mut self, output: &SimulationOutput) -> Result<()> {
        let match_id = output.result.match_id;
        // Replacement semantics: existing rows for the match are dropped,
        // then the new set is written, so regeneration never accumulates.
        self.stats.insert(match_id, output.player_stats.clone());
        self.votes
            .insert((match_id, VoteCategory::Coaches), output.coaches_votes.clone());
        self.votes
            .insert((match_id, VoteCategory::Brownlow), output.brownlow_votes.clone());
        self.results.insert(match_id, output.result.clone());
        tracing::debug!(%match_id, "result set committed");
        Ok(())
    }

    fn match_result(&self, match_id: MatchId) -> Result<Option<MatchResult>> {
        Ok(self.results.get(&match_id).cloned())
    }

    fn player_stats(&self, match_id: MatchId) -> Result<Vec<PlayerMatchStat>> {
        Ok(self.stats.get(&match_id).cloned().unwrap_or_default())
    }

    fn votes(&self, match_id: MatchId, category: VoteCategory) -> Result<Vec<Vote>> {
        Ok(self.votes.get(&(match_id, category)).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BrownlowFormat, MatchStatus, Position};
    use uuid::Uuid;

    fn output(match_id: MatchId) -> SimulationOutput {
        let team = Uuid::new_v4();
        let player = Uuid::new_v4();
        SimulationOutput {
            result: MatchResult {
                match_id,
                home_team: team,
                away_team: Uuid::new_v4(),
                home_score: 72,
                away_score: 68,
                status: MatchStatus::Completed,
            },
            player_stats: vec![PlayerMatchStat {
                match_id,
                player_id: player,
                team_id: team,
                position: Position::Mid,
                disposals: 25,
                goals: 1,
                behinds: 1,
                tackles: 5,
                marks: 4,
                intercepts: 0,
                hitouts: 0,
                fantasy_score: 0,
                impact_score: 30.0,
            }],
            coaches_votes: vec![Vote {
                match_id,
                player_id: player,
                team_id: team,
                category: VoteCategory::Coaches,
                votes: 8,
                format: None,
            }],
            brownlow_votes: vec![Vote {
                match_id,
                player_id: player,
                team_id: team,
                category: VoteCategory::Brownlow,
                votes: 3,
                format: Some(BrownlowFormat::Traditional),
            }],
        }
    }

    #[test]
    fn missing_roster_is_a_persistence_error() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.roster(Uuid::new_v4()),
            Err(SimError::Persistence(_))
        ));
    }

    #[test]
    fn missing_overall_defaults_upstream_not_here() {
        let store = MemoryStore::new();
        assert_eq!(store.team_overall(Uuid::new_v4()).unwrap(), None);
    }

    #[test]
    fn recommit_replaces_rather_than_appends() {
        let match_id = Uuid::new_v4();
        let mut store = MemoryStore::new();

        let first = output(match_id);
        store.commit(&first).unwrap();
        let second = output(match_id); // fresh ids, same match
        store.commit(&second).unwrap();

        let coaches = store.votes(match_id, VoteCategory::Coaches).unwrap();
        assert_eq!(coaches, second.coaches_votes);
        assert_eq!(store.player_stats(match_id).unwrap(), second.player_stats);
        assert_eq!(
            store.match_result(match_id).unwrap().as_ref(),
            Some(&second.result)
        );
    }

    #[test]
    fn identical_recommit_is_idempotent() {
        let match_id = Uuid::new_v4();
        let mut store = MemoryStore::new();
        let out = output(match_id);

        store.commit(&out).unwrap();
        let first_votes = store.votes(match_id, VoteCategory::Brownlow).unwrap();
        store.commit(&out).unwrap();
        let second_votes = store.votes(match_id, VoteCategory::Brownlow).unwrap();

        assert_eq!(first_votes, second_votes);
        assert_eq!(second_votes.len(), 1); // no duplicate rows
    }
}
