//! Award vote allocation.
//!
//! Both pools rank the same box-score set by impact score, descending, with
//! ties broken by generation order (first computed wins). Coaches votes
//! spread a fixed 30-vote pool over 5..=10 recipients; Brownlow votes follow
//! the caller-chosen format.

use crate::models::{BrownlowFormat, MatchId, PlayerMatchStat, Vote, VoteCategory};

/// Coaches allocation by rank, best first. Sums to the 30-vote pool across
/// the full ten recipients; every prefix sums to less. Ranks past the
/// vector earn one vote.
pub const COACHES_ALLOCATION: [u32; 10] = [8, 6, 5, 3, 2, 2, 1, 1, 1, 1];

/// Fixed coaches vote pool per match.
pub const COACHES_POOL: u32 = 30;

/// Rank players by impact score, descending. The sort is stable, so equal
/// scores keep their original generation order.
pub fn rank_by_impact(stats: &[PlayerMatchStat]) -> Vec<&PlayerMatchStat> {
    let mut ranked: Vec<&PlayerMatchStat> = stats.iter().collect();
    ranked.sort_by(|a, b| b.impact_score.total_cmp(&a.impact_score));
    ranked
}

/// Recipient count for coaches votes: a third of the field, clamped to
/// 5..=10 (and never more than the field itself).
fn coaches_recipient_count(total_players: usize) -> usize {
    (total_players / 3).clamp(5, 10).min(total_players)
}

/// Allocate the coaches pool over the top performers.
pub fn coaches_votes(match_id: MatchId, stats: &[PlayerMatchStat]) -> Vec<Vote> {
    let recipients = coaches_recipient_count(stats.len());
    rank_by_impact(stats)
        .into_iter()
        .take(recipients)
        .enumerate()
        .map(|(rank, stat)| Vote {
            match_id,
            player_id: stat.player_id,
            team_id: stat.team_id,
            category: VoteCategory::Coaches,
            votes: COACHES_ALLOCATION.get(rank).copied().unwrap_or(1),
            format: None,
        })
        .collect()
}

/// Allocate Brownlow votes for the chosen format: top 3 for 3-2-1, top 5
/// for 5-4-3-2-1.
pub fn brownlow_votes(
    match_id: MatchId,
    stats: &[PlayerMatchStat],
    format: BrownlowFormat,
) -> Vec<Vote> {
    let allocation = format.allocation();
    rank_by_impact(stats)
        .into_iter()
        .take(allocation.len())
        .enumerate()
        .map(|(rank, stat)| Vote {
            match_id,
            player_id: stat.player_id,
            team_id: stat.team_id,
            category: VoteCategory::Brownlow,
            votes: allocation[rank],
            format: Some(format),
        })
        .collect()
}
