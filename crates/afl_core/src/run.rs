//! Thin orchestration over the engine and its collaborators: fetch inputs,
//! simulate, commit atomically. The match only reads `completed` once the
//! commit has succeeded; a validation or persistence failure leaves no
//! partial result behind.

use crate::engine::{MatchInput, MatchSimulator, SimulationOutput, TeamSheet};
use crate::error::Result;
use crate::models::{BrownlowFormat, MatchId, TeamLineup};
use crate::store::{LineupProvider, ResultStore, RosterProvider};

/// Run one full match: load rosters and lineups, simulate with the given
/// seed, and commit the combined result set.
pub fn run_match<P, S>(
    provider: &P,
    store: &mut S,
    match_id: MatchId,
    seed: u64,
    brownlow_format: BrownlowFormat,
) -> Result<SimulationOutput>
where
    P: RosterProvider + LineupProvider,
    S: ResultStore,
{
    let lineups = provider.lineup(match_id)?;
    let input = MatchInput {
        match_id,
        home: team_sheet(provider, lineups.home)?,
        away: team_sheet(provider, lineups.away)?,
        brownlow_format,
    };

    let output = MatchSimulator::from_seed(seed).simulate(&input)?;
    store.commit(&output)?;
    Ok(output)
}

fn team_sheet<P: RosterProvider>(provider: &P, lineup: TeamLineup) -> Result<TeamSheet> {
    let team = lineup.team;
    Ok(TeamSheet {
        team,
        roster: provider.roster(team)?,
        overall: provider.team_overall(team)?,
        lineup,
    })
}
