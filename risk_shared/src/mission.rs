use std::fmt;

use crate::{
    map::{ContinentId, World},
    player::PlayerId,
};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, enum_map::Enum)]
pub enum MissionKind {
    ConquerTerritories,
    ConquerContinents,
    EliminatePlayer,
}

impl MissionKind {
    pub const ALL: [MissionKind; 3] = [
        MissionKind::ConquerTerritories,
        MissionKind::ConquerContinents,
        MissionKind::EliminatePlayer,
    ];
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Objective {
    ConquerTerritories { threshold: usize },
    ConquerContinents([ContinentId; 2]),
    EliminatePlayer(PlayerId),
}

impl Objective {
    pub fn kind(&self) -> MissionKind {
        match self {
            Objective::ConquerTerritories { .. } => MissionKind::ConquerTerritories,
            Objective::ConquerContinents(_) => MissionKind::ConquerContinents,
            Objective::EliminatePlayer(_) => MissionKind::EliminatePlayer,
        }
    }
}

/// A private win condition, fixed when the match starts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mission {
    pub owner: PlayerId,
    pub objective: Objective,
}

impl Mission {
    pub fn new(owner: PlayerId, objective: Objective) -> Self {
        Self { owner, objective }
    }

    pub fn is_fulfilled(&self, world: &World) -> bool {
        match self.objective {
            Objective::ConquerTerritories { threshold } => {
                world.territory_count_of(self.owner) >= threshold
            }
            Objective::ConquerContinents(continents) => continents
                .iter()
                .all(|&c| world.owns_continent(self.owner, c)),
            Objective::EliminatePlayer(target) => world.territory_count_of(target) == 0,
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.objective {
            Objective::ConquerTerritories { threshold } => {
                write!(f, "Conquer {threshold} territories")
            }
            Objective::ConquerContinents([a, b]) => {
                write!(f, "Conquer continents {} and {}", a.0, b.0)
            }
            Objective::EliminatePlayer(target) => write!(f, "Eliminate player {}", target.0),
        }
    }
}
