//! Lineup validation.
//!
//! Every check runs before any randomness is drawn, so a rejected
//! simulation has no observable side effect. On success the lineups pass
//! through unchanged.

use crate::error::{Result, SimError};
use crate::models::{Player, PlayerId, SlotRef, TeamLineup, LINEUP_SIZE};
use std::collections::HashSet;

/// Validate both lineups against their rosters: roster depth, completeness,
/// roster membership, and cross-team uniqueness, in that order.
pub fn validate(
    home: &TeamLineup,
    home_roster: &[Player],
    away: &TeamLineup,
    away_roster: &[Player],
) -> Result<()> {
    check_roster_depth(home, home_roster)?;
    check_roster_depth(away, away_roster)?;

    let mut missing = home.empty_slots();
    missing.extend(away.empty_slots());
    if !missing.is_empty() {
        return Err(SimError::IncompleteLineup { missing });
    }

    check_membership(home, home_roster)?;
    check_membership(away, away_roster)?;

    // a player appears in at most one slot across the whole match
    let mut seen: HashSet<PlayerId> = HashSet::with_capacity(LINEUP_SIZE * 2);
    for (_, player) in home.filled().chain(away.filled()) {
        if !seen.insert(player) {
            return Err(SimError::DuplicateAssignment { player });
        }
    }

    Ok(())
}

fn check_roster_depth(lineup: &TeamLineup, roster: &[Player]) -> Result<()> {
    let distinct: HashSet<PlayerId> = roster.iter().map(|p| p.id).collect();
    if distinct.len() < LINEUP_SIZE {
        return Err(SimError::InsufficientRoster {
            team: lineup.team,
            available: distinct.len(),
        });
    }
    Ok(())
}

fn check_membership(lineup: &TeamLineup, roster: &[Player]) -> Result<()> {
    let ids: HashSet<PlayerId> = roster.iter().map(|p| p.id).collect();
    for (_, player) in lineup.filled() {
        if !ids.contains(&player) {
            return Err(SimError::UnknownPlayer { player, team: lineup.team });
        }
    }
    Ok(())
}
