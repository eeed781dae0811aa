use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use risk_shared::{
    map::{TerritoryId, World},
    mission::Mission,
    player::{Player, PlayerColor, PlayerId, PlayerPhase},
    record::{AttackOutcome, PhaseChanged, Record},
    Card,
};

use crate::{
    cards::CardStacks,
    combat,
    config::RulesConfig,
    error::EngineError,
    listener::{ListenerId, Listeners},
    state::{action, record, EngineState},
    turn::Turn,
};

/// Runs one match: the roster, the world, the turn sequence and the win check.
///
/// Every successful mutating call commits one or more [`Record`]s and hands each to the
/// registered listeners before returning.
#[derive(Debug)]
pub struct GameEngine {
    state: EngineState,
    listeners: Listeners,
    notified: usize,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default(), rand::thread_rng().next_u64())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(RulesConfig::default(), seed)
    }

    pub fn with_config(config: RulesConfig, seed: u64) -> Self {
        Self {
            state: EngineState::new(config, Xoshiro256StarStar::seed_from_u64(seed)),
            listeners: Listeners::default(),
            notified: 0,
        }
    }

    pub fn add_listener(
        &mut self,
        listener: impl FnMut(&Record) + Send + Sync + 'static,
    ) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut EngineState {
        &mut self.state
    }

    pub fn config(&self) -> &RulesConfig {
        self.state.config()
    }

    pub fn recording(&self) -> &[Record] {
        self.state.recording()
    }

    pub fn world(&self) -> Option<&World> {
        self.state.world()
    }

    pub fn players(&self) -> &[Player] {
        self.state.players()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    pub fn missions(&self) -> &[Mission] {
        self.state.missions()
    }

    pub fn mission_of(&self, player: PlayerId) -> Option<&Mission> {
        self.state.missions().iter().find(|m| m.owner == player)
    }

    pub fn cards(&self) -> &CardStacks {
        self.state.cards()
    }

    pub fn turns(&self) -> &[Turn] {
        self.state.turns()
    }

    pub fn current_turn(&self) -> Option<&Turn> {
        self.state.current_turn()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running() && !self.state.is_finished()
    }

    /// The owner of `territory`, if it has one.
    pub fn player_of(&self, territory: TerritoryId) -> Option<&Player> {
        self.world()
            .and_then(|w| w.owner(territory))
            .and_then(|id| self.player(id))
    }

    /// Last known winner. Only meaningful after [`GameEngine::is_finished`] returned `true`.
    pub fn winner(&self) -> Option<&Player> {
        self.state.winner().and_then(|id| self.player(id))
    }

    /// Seats a player and gives them the first free color. A second player with a username
    /// already at the table is ignored and `Ok(None)` is returned.
    pub fn add_player(&mut self, mut player: Player) -> Result<Option<PlayerColor>, EngineError> {
        if self.state.is_running() || self.state.is_finished() {
            return Err(EngineError::MatchAlreadyStarted);
        }

        if self
            .players()
            .iter()
            .any(|p| p.username == player.username || p.id == player.id)
        {
            log::debug!("{} is already seated", player.username);
            return Ok(None);
        }

        let color = self
            .config()
            .palette()
            .iter()
            .copied()
            .find(|&c| self.players().iter().all(|p| p.color != Some(c)))
            .ok_or(EngineError::NoSlotAvailable)?;

        log::info!("{} joined as {color:?}", player.username);

        player.color = Some(color);
        player.phase = PlayerPhase::GameInit;
        player.cards.clear();
        self.commit(Record::PlayerJoined(player));
        Ok(Some(color))
    }

    pub fn set_world(&mut self, world: World) -> Result<(), EngineError> {
        if self.state.is_running() || self.state.is_finished() {
            return Err(EngineError::MatchAlreadyStarted);
        }

        log::info!("world set to {}", world.name());
        self.commit(Record::WorldChanged(Box::new(world)));
        Ok(())
    }

    /// Deals territories, missions and cards, then opens the first turn.
    pub fn start(&mut self) -> Result<(), EngineError> {
        let start_game = record::start_game(&mut self.state)?;
        let first_player = start_game.first_player;

        log::info!(
            "match started with {} players, {} opens",
            self.players().len(),
            first_player.0
        );

        self.state.commit(Record::StartGame(Box::new(start_game)));
        self.begin_turn(first_player);
        self.notify();
        Ok(())
    }

    /// Ends the current turn and opens one for the next player still holding territory.
    pub fn advance_turn(&mut self) -> Result<&Turn, EngineError> {
        self.state.active_player()?;

        let next = record::next_player(&self.state).ok_or(EngineError::MatchFinished)?;
        self.begin_turn(next);
        self.notify();

        self.current_turn().ok_or(EngineError::MatchNotStarted)
    }

    pub(crate) fn begin_turn(&mut self, player: PlayerId) {
        let start_turn = record::start_turn(&self.state, player);
        log::info!(
            "turn {} for player {}: {} reinforcements",
            self.turns().len() + 1,
            player.0,
            start_turn.reinforcements()
        );

        self.state.commit(Record::StartTurn(start_turn));
    }

    /// Checks every win condition afresh. On the first call that finds a winner, a
    /// [`Record::Winner`] is committed and every player goes idle.
    pub fn is_finished(&mut self) -> bool {
        if self.state.is_killed() {
            return true;
        }

        let Some(winner) = record::winner(&self.state) else {
            return false;
        };

        if self.state.winner() != Some(winner) {
            log::info!("player {} wins", winner.0);
            self.commit(Record::Winner(winner));
        }

        true
    }

    /// Ends the match without a winner. With `create_new_one` an empty match on the same world
    /// takes its place.
    pub fn kill(&mut self, create_new_one: bool) {
        log::info!("match killed");
        self.commit(Record::Killed);

        if create_new_one {
            self.state = self.state.successor();
            self.notified = 0;
        }
    }

    /// A player with no cards asking to release cards moves straight on to allocation.
    pub fn set_player_state(
        &mut self,
        player: PlayerId,
        phase: PlayerPhase,
    ) -> Result<PlayerPhase, EngineError> {
        if self.state.is_finished() {
            return Err(EngineError::MatchFinished);
        }

        let current = self.player(player).ok_or(EngineError::UnknownPlayer(player))?;
        let phase = if phase == PlayerPhase::ReleaseCards && current.cards.is_empty() {
            PlayerPhase::AllocateArmies
        } else {
            phase
        };

        self.commit(Record::PhaseChanged(PhaseChanged { player, phase }));
        Ok(phase)
    }

    pub fn allocatable_army_count(&self) -> u32 {
        self.current_turn().map_or(0, Turn::troops_remaining)
    }

    pub fn max_attack_count(&self, territory: TerritoryId) -> u32 {
        self.world()
            .and_then(|w| w.territory(territory))
            .map_or(0, |t| combat::max_attack_count(t.troops))
    }

    pub fn allocate_army(&mut self, territory: TerritoryId) -> Result<(), EngineError> {
        let r = action::allocate_army(&self.state, territory)?;
        log::debug!("player {} allocated an army to {:?}", r.player.0, territory);

        self.commit(Record::AllocatedArmy(r));
        Ok(())
    }

    /// Returns the armies placed, or `None` if the card could not be released.
    pub fn release_card(&mut self, card: Card) -> Result<Option<u32>, EngineError> {
        let Some(r) = action::release_card(&self.state, card)? else {
            log::debug!("ignored release of {card:?}");
            return Ok(None);
        };

        log::debug!("player {} released {:?}", r.player.0, r.card);
        self.commit(Record::ReleasedCard(r));
        Ok(Some(r.territory_bonus))
    }

    /// Turns in one series from `cards`. Returns the bonus added to the reinforcement pool, or
    /// `None` if the cards hold no series or are not all in the player's hand.
    pub fn release_cards(&mut self, cards: &[Card]) -> Result<Option<u32>, EngineError> {
        let Some(r) = action::release_series(&self.state, cards)? else {
            log::debug!("ignored release of {} cards", cards.len());
            return Ok(None);
        };

        log::debug!(
            "player {} turned in series #{} for {}",
            r.player.0,
            r.series_index + 1,
            r.set_bonus
        );
        self.commit(Record::ReleasedSeries(r));
        Ok(Some(r.set_bonus))
    }

    pub fn attack(
        &mut self,
        attacking_territory: TerritoryId,
        defending_territory: TerritoryId,
        attacking_troops: u32,
    ) -> Result<AttackOutcome, EngineError> {
        let outcome = action::attack(
            &mut self.state,
            attacking_territory,
            defending_territory,
            attacking_troops,
        )?;

        log::debug!(
            "{:?} attacked {:?}: {:?} against {:?}",
            attacking_territory,
            defending_territory,
            outcome.attacking_rolls,
            outcome.defending_rolls
        );

        self.commit(Record::Attack(outcome));

        // The turn logs the committed copy, which knows which card was drawn.
        let outcome = self
            .current_turn()
            .and_then(|turn| turn.attacks().last())
            .cloned()
            .ok_or(EngineError::MatchNotStarted)?;

        self.is_finished();
        Ok(outcome)
    }

    pub fn move_armies(
        &mut self,
        source_territory: TerritoryId,
        target_territory: TerritoryId,
        troop_count: u32,
    ) -> Result<(), EngineError> {
        let r = action::move_armies(&self.state, source_territory, target_territory, troop_count)?;
        log::debug!(
            "player {} moved {} armies from {:?} to {:?}",
            r.player.0,
            troop_count,
            source_territory,
            target_territory
        );

        self.commit(Record::MovedArmies(r));
        Ok(())
    }

    fn commit(&mut self, record: Record) {
        self.state.commit(record);
        self.notify();
    }

    pub(crate) fn notify(&mut self) {
        for record in &self.state.recording()[self.notified..] {
            self.listeners.notify(record);
        }

        self.notified = self.state.recording().len();
    }
}
