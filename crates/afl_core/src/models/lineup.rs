use super::{PlayerId, Position, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total slots per team: 18 starting plus 3 interchange.
pub const LINEUP_SIZE: usize = 21;

/// Position groups a lineup is built from. The six on-field groups map to a
/// fixed position; interchange players run on at their own primary position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionGroup {
    Kdef,
    Def,
    Mid,
    Ruc,
    Fwd,
    Kfwd,
    Interchange,
}

impl PositionGroup {
    pub const ALL: [PositionGroup; 7] = [
        PositionGroup::Kdef,
        PositionGroup::Def,
        PositionGroup::Mid,
        PositionGroup::Ruc,
        PositionGroup::Fwd,
        PositionGroup::Kfwd,
        PositionGroup::Interchange,
    ];

    /// Required slot count for this group. Sums to [`LINEUP_SIZE`].
    pub fn slot_count(&self) -> u8 {
        match self {
            PositionGroup::Mid => 5,
            PositionGroup::Ruc => 1,
            PositionGroup::Kdef
            | PositionGroup::Def
            | PositionGroup::Fwd
            | PositionGroup::Kfwd
            | PositionGroup::Interchange => 3,
        }
    }

    /// On-field position played from this group. `None` for interchange,
    /// which resolves to the player's own primary position.
    pub fn position(&self) -> Option<Position> {
        match self {
            PositionGroup::Kdef => Some(Position::Kdef),
            PositionGroup::Def => Some(Position::Def),
            PositionGroup::Mid => Some(Position::Mid),
            PositionGroup::Ruc => Some(Position::Ruc),
            PositionGroup::Fwd => Some(Position::Fwd),
            PositionGroup::Kfwd => Some(Position::Kfwd),
            PositionGroup::Interchange => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionGroup::Kdef => "KDEF",
            PositionGroup::Def => "DEF",
            PositionGroup::Mid => "MID",
            PositionGroup::Ruc => "RUC",
            PositionGroup::Fwd => "FWD",
            PositionGroup::Kfwd => "KFWD",
            PositionGroup::Interchange => "INT",
        }
    }
}

/// Names one slot inside a team lineup, e.g. `MID-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRef {
    pub team: TeamId,
    pub group: PositionGroup,
    pub index: u8,
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.group.as_str(), self.index)
    }
}

/// One slot: either empty or holding a player id from the team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSlot {
    pub group: PositionGroup,
    pub index: u8,
    pub player: Option<PlayerId>,
}

/// A team's 21-slot lineup, in fixed group order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamLineup {
    pub team: TeamId,
    pub slots: Vec<LineupSlot>,
}

impl TeamLineup {
    /// Empty 21-slot frame for a team.
    pub fn empty(team: TeamId) -> Self {
        let mut slots = Vec::with_capacity(LINEUP_SIZE);
        for group in PositionGroup::ALL {
            for index in 0..group.slot_count() {
                slots.push(LineupSlot { group, index, player: None });
            }
        }
        Self { team, slots }
    }

    /// Assign a player to a slot. Returns false when the slot does not exist.
    pub fn assign(&mut self, group: PositionGroup, index: u8, player: PlayerId) -> bool {
        match self
            .slots
            .iter_mut()
            .find(|s| s.group == group && s.index == index)
        {
            Some(slot) => {
                slot.player = Some(player);
                true
            }
            None => false,
        }
    }

    /// References to every unfilled slot.
    pub fn empty_slots(&self) -> Vec<SlotRef> {
        self.slots
            .iter()
            .filter(|s| s.player.is_none())
            .map(|s| SlotRef { team: self.team, group: s.group, index: s.index })
            .collect()
    }

    /// Iterate over filled slots with their assigned player ids.
    pub fn filled(&self) -> impl Iterator<Item = (&LineupSlot, PlayerId)> {
        self.slots.iter().filter_map(|s| s.player.map(|p| (s, p)))
    }
}

/// Both teams' lineups for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchLineups {
    pub home: TeamLineup,
    pub away: TeamLineup,
}
