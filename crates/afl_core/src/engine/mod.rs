//! Match simulation engine.
//!
//! Conceptually a pure function of `(lineups, rosters, team overalls,
//! seed)`: validates the lineups, generates a box score per filled slot,
//! resolves ruck contests across both teams, aggregates team scores, and
//! allocates both award-vote pools. The engine holds no state between
//! matches and performs no I/O.

pub mod performance;
pub mod ruck;
pub mod scoring;
pub mod tables;
pub mod validate;
pub mod votes;

use crate::error::{Result, SimError};
use crate::models::{
    BrownlowFormat, MatchId, MatchResult, MatchStatus, Player, PlayerId, PlayerMatchStat,
    Position, TeamId, TeamLineup, Vote, DEFAULT_TEAM_OVERALL, LINEUP_SIZE,
};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One team's input to the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSheet {
    pub team: TeamId,
    pub roster: Vec<Player>,
    pub lineup: TeamLineup,
    /// Team overall rating 60..=99; defaults to 75 when absent.
    pub overall: Option<u8>,
}

/// Full input for one match simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInput {
    pub match_id: MatchId,
    pub home: TeamSheet,
    pub away: TeamSheet,
    pub brownlow_format: BrownlowFormat,
}

/// The combined result set for one match, committed by the caller as a
/// single atomic unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub result: MatchResult,
    pub player_stats: Vec<PlayerMatchStat>,
    pub coaches_votes: Vec<Vote>,
    pub brownlow_votes: Vec<Vote>,
}

/// Seeded simulator. Same seed and input always produce the same output.
pub struct MatchSimulator {
    rng: ChaCha8Rng,
}

impl MatchSimulator {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn simulate(&mut self, input: &MatchInput) -> Result<SimulationOutput> {
        simulate_with(&mut self.rng, input)
    }
}

/// A ruck-assigned player's slot in the generated stats, with the effective
/// rating it was generated at.
struct RuckEntry {
    stat_index: usize,
    effective: i32,
}

/// Simulate with an explicit randomness source. Production code seeds a
/// `ChaCha8Rng` through [`MatchSimulator`]; tests may supply their own.
pub fn simulate_with(rng: &mut impl Rng, input: &MatchInput) -> Result<SimulationOutput> {
    validate::validate(
        &input.home.lineup,
        &input.home.roster,
        &input.away.lineup,
        &input.away.roster,
    )?;
    tracing::debug!(match_id = %input.match_id, "lineups validated");

    // Home slots first, then away: this generation order defines the stable
    // tie-break for award votes.
    let mut player_stats = Vec::with_capacity(LINEUP_SIZE * 2);
    let home_rucks = generate_team(rng, input.match_id, &input.home, &mut player_stats)?;
    let away_rucks = generate_team(rng, input.match_id, &input.away, &mut player_stats)?;

    resolve_ruck_contests(rng, &mut player_stats, &home_rucks, &away_rucks);

    let home_score = team_score(rng, &player_stats, &input.home);
    let away_score = team_score(rng, &player_stats, &input.away);

    let coaches_votes = votes::coaches_votes(input.match_id, &player_stats);
    let brownlow_votes = votes::brownlow_votes(input.match_id, &player_stats, input.brownlow_format);

    let result = MatchResult {
        match_id: input.match_id,
        home_team: input.home.team,
        away_team: input.away.team,
        home_score,
        away_score,
        status: MatchStatus::Completed,
    };
    tracing::debug!(
        match_id = %input.match_id,
        home_score,
        away_score,
        "simulation complete"
    );

    Ok(SimulationOutput { result, player_stats, coaches_votes, brownlow_votes })
}

/// Generate box scores for every filled slot of one team, in slot order.
/// Returns the ruck-assigned entries for contest resolution.
fn generate_team(
    rng: &mut impl Rng,
    match_id: MatchId,
    sheet: &TeamSheet,
    out: &mut Vec<PlayerMatchStat>,
) -> Result<Vec<RuckEntry>> {
    let by_id: HashMap<PlayerId, &Player> = sheet.roster.iter().map(|p| (p.id, p)).collect();
    let mut rucks = Vec::new();

    for slot in &sheet.lineup.slots {
        let Some(player_id) = slot.player else {
            continue;
        };
        let player = by_id
            .get(&player_id)
            .ok_or(SimError::UnknownPlayer { player: player_id, team: sheet.team })?;

        // Interchange resolves to the player's own primary position, so no
        // out-of-position penalty applies on the bench.
        let assigned = slot.group.position().unwrap_or(player.position);
        if assigned == Position::Ruc {
            rucks.push(RuckEntry {
                stat_index: out.len(),
                effective: performance::effective_rating(player, assigned),
            });
        }
        out.push(performance::generate(match_id, sheet.team, player, assigned, rng));
    }
    Ok(rucks)
}

/// Resolve every ruck-assigned player against the opposing side's nominated
/// ruck (its first ruck-assigned player in slot order). Home contests draw
/// before away contests.
fn resolve_ruck_contests(
    rng: &mut impl Rng,
    player_stats: &mut [PlayerMatchStat],
    home_rucks: &[RuckEntry],
    away_rucks: &[RuckEntry],
) {
    let home_nominated = home_rucks.first().map(|r| r.effective);
    let away_nominated = away_rucks.first().map(|r| r.effective);

    for entry in home_rucks {
        let hitouts = ruck::resolve(entry.effective, away_nominated, rng);
        let stat = &mut player_stats[entry.stat_index];
        stat.hitouts = hitouts;
        stat.recompute_derived();
    }
    for entry in away_rucks {
        let hitouts = ruck::resolve(entry.effective, home_nominated, rng);
        let stat = &mut player_stats[entry.stat_index];
        stat.hitouts = hitouts;
        stat.recompute_derived();
    }
}

fn team_score(rng: &mut impl Rng, player_stats: &[PlayerMatchStat], sheet: &TeamSheet) -> u32 {
    let team_stats: Vec<&PlayerMatchStat> = player_stats
        .iter()
        .filter(|s| s.team_id == sheet.team)
        .collect();
    let raw = scoring::raw_points(&team_stats);
    let overall = sheet.overall.unwrap_or(DEFAULT_TEAM_OVERALL);
    scoring::final_score(raw, overall, scoring::draw_variance(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VoteCategory;
    use uuid::Uuid;

    /// Roster shaped to the lineup quotas: slots are filled in group order,
    /// so positions line up with the groups and the bench is mixed.
    fn shaped_roster() -> Vec<Player> {
        let shape = [
            (Position::Kdef, 3),
            (Position::Def, 3),
            (Position::Mid, 5),
            (Position::Ruc, 1),
            (Position::Fwd, 3),
            (Position::Kfwd, 3),
            // interchange
            (Position::Mid, 1),
            (Position::Def, 1),
            (Position::Fwd, 1),
        ];
        let mut roster = Vec::new();
        for (position, count) in shape {
            for _ in 0..count {
                let overall = 65 + (roster.len() % 30) as u8;
                roster.push(Player {
                    id: Uuid::new_v4(),
                    name: format!("{position} {}", roster.len()),
                    position,
                    overall,
                });
            }
        }
        roster
    }

    fn sheet(roster: Vec<Player>, overall: Option<u8>) -> TeamSheet {
        let team = Uuid::new_v4();
        let mut lineup = TeamLineup::empty(team);
        for (slot, player) in lineup.slots.iter_mut().zip(roster.iter()) {
            slot.player = Some(player.id);
        }
        TeamSheet { team, roster, lineup, overall }
    }

    fn input() -> MatchInput {
        MatchInput {
            match_id: Uuid::new_v4(),
            home: sheet(shaped_roster(), Some(82)),
            away: sheet(shaped_roster(), None),
            brownlow_format: BrownlowFormat::Traditional,
        }
    }

    #[test]
    fn same_seed_same_result() {
        let input = input();
        let a = MatchSimulator::from_seed(123).simulate(&input).unwrap();
        let b = MatchSimulator::from_seed(123).simulate(&input).unwrap();
        assert_eq!(a, b);
        let c = MatchSimulator::from_seed(124).simulate(&input).unwrap();
        assert_ne!(a.player_stats, c.player_stats);
    }

    #[test]
    fn hitouts_only_for_ruck_assigned_players() {
        let input = input();
        let output = MatchSimulator::from_seed(9).simulate(&input).unwrap();
        assert_eq!(output.player_stats.len(), LINEUP_SIZE * 2);
        for stat in &output.player_stats {
            if stat.position == Position::Ruc {
                // both teams field a ruck: contested range applies
                assert!((6..=52).contains(&stat.hitouts));
            } else {
                assert_eq!(stat.hitouts, 0);
            }
        }
    }

    #[test]
    fn bench_ruck_joins_the_contest() {
        // A second ruck on the interchange is ruck-assigned through his
        // primary position and gets his own independent hitout draw.
        let mut roster = shaped_roster();
        roster[20] = Player {
            id: roster[20].id,
            name: "Backup Ruck".into(),
            position: Position::Ruc,
            overall: 68,
        };
        let mut input = input();
        input.home = sheet(roster, Some(80));

        let output = MatchSimulator::from_seed(41).simulate(&input).unwrap();
        let home_rucks: Vec<_> = output
            .player_stats
            .iter()
            .filter(|s| s.position == Position::Ruc && s.team_id == input.home.team)
            .collect();
        assert_eq!(home_rucks.len(), 2);
        for ruck in home_rucks {
            assert!((6..=52).contains(&ruck.hitouts));
        }
    }

    #[test]
    fn vote_pools_ride_on_the_same_stats() {
        let input = input();
        let output = MatchSimulator::from_seed(77).simulate(&input).unwrap();

        assert_eq!(output.coaches_votes.len(), 10); // 42 players / 3, clamped
        assert_eq!(output.coaches_votes.iter().map(|v| v.votes).sum::<u32>(), 30);
        assert!(output.coaches_votes.iter().all(|v| v.category == VoteCategory::Coaches));

        assert_eq!(output.brownlow_votes.len(), 3);
        assert_eq!(output.brownlow_votes.iter().map(|v| v.votes).sum::<u32>(), 6);

        // both pools rank the same set: identical top recipient
        assert_eq!(
            output.coaches_votes[0].player_id,
            output.brownlow_votes[0].player_id
        );
    }

    #[test]
    fn extended_brownlow_format_flows_through() {
        let mut input = input();
        input.brownlow_format = BrownlowFormat::Extended;
        let output = MatchSimulator::from_seed(5).simulate(&input).unwrap();
        assert_eq!(output.brownlow_votes.len(), 5);
        assert_eq!(output.brownlow_votes.iter().map(|v| v.votes).sum::<u32>(), 15);
        assert!(output
            .brownlow_votes
            .iter()
            .all(|v| v.format == Some(BrownlowFormat::Extended)));
    }

    #[test]
    fn result_is_completed_with_both_teams_scored() {
        let input = input();
        let output = MatchSimulator::from_seed(2).simulate(&input).unwrap();
        assert_eq!(output.result.status, MatchStatus::Completed);
        assert_eq!(output.result.match_id, input.match_id);
        assert_eq!(output.result.home_team, input.home.team);
        assert_eq!(output.result.away_team, input.away.team);
    }

    #[test]
    fn validation_failure_reports_before_any_generation() {
        let mut input = input();
        input.home.lineup.slots[3].player = None;
        let err = MatchSimulator::from_seed(1).simulate(&input).unwrap_err();
        assert!(matches!(err, SimError::IncompleteLineup { .. }));
    }

    #[test]
    fn interchange_players_play_their_primary_position() {
        let input = input();
        let output = MatchSimulator::from_seed(19).simulate(&input).unwrap();
        // bench order in shaped_roster: Mid, Def, Fwd
        let bench: Vec<_> = output.player_stats[18..21].iter().collect();
        assert_eq!(bench[0].position, Position::Mid);
        assert_eq!(bench[1].position, Position::Def);
        assert_eq!(bench[2].position, Position::Fwd);
    }
}
