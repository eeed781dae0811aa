use crate::{
    map::{ContinentId, TerritoryId, World},
    mission::Mission,
    player::{Player, PlayerId, PlayerPhase},
    Card,
};

/// One state change of a match, in the order it was committed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Record {
    /// The joining player, with their seat color assigned.
    PlayerJoined(Player),
    WorldChanged(Box<World>),
    StartGame(Box<StartGame>),
    StartTurn(StartTurn),
    AllocatedArmy(AllocatedArmy),
    ReleasedCard(ReleasedCard),
    ReleasedSeries(ReleasedSeries),
    Attack(AttackOutcome),
    MovedArmies(MovedArmies),
    PhaseChanged(PhaseChanged),
    Winner(PlayerId),
    Killed,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartGame {
    /// Owner of every territory, indexed by [`TerritoryId`].
    pub occupiers: Vec<PlayerId>,
    pub missions: Vec<Mission>,
    /// Draw pile, top card last.
    pub deck: Vec<Card>,
    pub first_player: PlayerId,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartTurn {
    pub player: PlayerId,
    pub continents_held: Vec<ContinentId>,
    pub territories_held: u32,
    pub continent_bonus: u32,
    pub territory_bonus: u32,
}

impl StartTurn {
    pub fn reinforcements(&self) -> u32 {
        self.territory_bonus + self.continent_bonus
    }
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocatedArmy {
    pub player: PlayerId,
    pub territory: TerritoryId,
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleasedCard {
    pub player: PlayerId,
    pub card: Card,
    /// Armies placed directly on the card's territory.
    pub territory_bonus: u32,
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleasedSeries {
    pub player: PlayerId,
    pub cards: [Card; 3],
    /// Zero-based position of this series among all series turned in during the match.
    pub series_index: u32,
    pub set_bonus: u32,
}

/// Everything that happened during one attack declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub attacker: PlayerId,
    pub defender: PlayerId,
    pub attacking_territory: TerritoryId,
    pub defending_territory: TerritoryId,
    pub attacking_troops: u32,
    /// Highest roll first.
    pub attacking_rolls: Vec<u8>,
    /// Highest roll first.
    pub defending_rolls: Vec<u8>,
    pub attacking_lost: u32,
    pub defending_lost: u32,
    pub territory_conquered: bool,
    pub defender_eliminated: bool,
    /// Card earned by this attack, if it was the first conquest of the turn.
    pub card_drawn: Option<Card>,
}

impl AttackOutcome {
    /// Armies that follow the attack into a conquered territory.
    pub fn troops_advanced(&self) -> u32 {
        if self.territory_conquered {
            self.attacking_troops - self.attacking_lost
        } else {
            0
        }
    }
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovedArmies {
    pub player: PlayerId,
    pub source_territory: TerritoryId,
    pub target_territory: TerritoryId,
    pub troop_count: u32,
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseChanged {
    pub player: PlayerId,
    pub phase: PlayerPhase,
}
