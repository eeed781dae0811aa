pub mod action;
pub mod mutate;
pub mod record;

use rand_xoshiro::Xoshiro256StarStar;
use risk_shared::{
    map::{Territory, TerritoryId, World},
    mission::Mission,
    player::{Player, PlayerId},
    record::Record,
};

use crate::{cards::CardStacks, config::RulesConfig, error::EngineError, turn::Turn};

/// Everything a match knows. Only [`EngineState::commit`] changes it.
#[derive(Clone, Debug)]
pub struct EngineState {
    config: RulesConfig,
    rng: Xoshiro256StarStar,
    world: Option<World>,
    players: Vec<Player>,
    cards: CardStacks,
    missions: Vec<Mission>,
    turns: Vec<Turn>,
    running: bool,
    finished: bool,
    killed: bool,
    winner: Option<PlayerId>,
    recording: Vec<Record>,
}

impl EngineState {
    pub fn new(config: RulesConfig, rng: Xoshiro256StarStar) -> Self {
        Self {
            config,
            rng,
            world: None,
            players: Vec::new(),
            cards: CardStacks::default(),
            missions: Vec::new(),
            turns: Vec::new(),
            running: false,
            finished: false,
            killed: false,
            winner: None,
            recording: Vec::new(),
        }
    }

    /// A fresh, empty match on the same world and rules.
    pub fn successor(&self) -> Self {
        let mut world = self.world.clone();
        if let Some(world) = world.as_mut() {
            world.clear_occupation();
        }

        Self {
            world,
            ..Self::new(self.config.clone(), self.rng.clone())
        }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn cards(&self) -> &CardStacks {
        &self.cards
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn current_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_killed(&self) -> bool {
        self.killed
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn recording(&self) -> &[Record] {
        &self.recording
    }

    /// The player whose turn it is, as long as the match is in play.
    pub fn active_player(&self) -> Result<PlayerId, EngineError> {
        if self.finished {
            return Err(EngineError::MatchFinished);
        }

        self.current_turn()
            .filter(|_| self.running)
            .map(Turn::player)
            .ok_or(EngineError::MatchNotStarted)
    }

    pub fn territory(&self, id: TerritoryId) -> Result<&Territory, EngineError> {
        self.world
            .as_ref()
            .ok_or(EngineError::WorldNotDefined)?
            .territory(id)
            .ok_or(EngineError::UnknownTerritory(id))
    }

    pub(crate) fn world_mut(&mut self) -> Option<&mut World> {
        self.world.as_mut()
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }
}
