//! Fixtures for setting up a match in an exact position.

use risk_shared::{
    map::{TerritoryId, World, WorldBuilder},
    mission::Mission,
    player::{Player, PlayerId},
    record::{Record, StartGame},
    Card,
};

use crate::{config::RulesConfig, game_engine::GameEngine};

/// Builds a started match with chosen owners, armies, hands and missions instead of dealing
/// them at random. The first player added opens unless another is marked as owner.
pub struct MatchBuilder {
    world: World,
    config: RulesConfig,
    seed: u64,
    players: Vec<Player>,
    holdings: Vec<(TerritoryId, PlayerId, u32)>,
    hands: Vec<(PlayerId, Vec<Card>)>,
    missions: Vec<Mission>,
    deck: Vec<Card>,
}

impl MatchBuilder {
    pub fn new(world: World) -> Self {
        Self {
            world,
            config: RulesConfig::default(),
            seed: 0,
            players: Vec::new(),
            holdings: Vec::new(),
            hands: Vec::new(),
            missions: Vec::new(),
            deck: Vec::new(),
        }
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn player(mut self, id: u32, username: &str) -> Self {
        self.players.push(Player::new(PlayerId(id), username, false));
        self
    }

    pub fn owner(mut self, id: u32, username: &str) -> Self {
        self.players.push(Player::new(PlayerId(id), username, true));
        self
    }

    pub fn occupy(mut self, territory: u16, player: u32, troops: u32) -> Self {
        self.holdings
            .push((TerritoryId(territory), PlayerId(player), troops));
        self
    }

    pub fn hand(mut self, player: u32, cards: Vec<Card>) -> Self {
        self.hands.push((PlayerId(player), cards));
        self
    }

    pub fn mission(mut self, mission: Mission) -> Self {
        self.missions.push(mission);
        self
    }

    pub fn deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = deck;
        self
    }

    /// Territories left out of [`MatchBuilder::occupy`] go to the first player with one army.
    pub fn build(self) -> GameEngine {
        let mut engine = GameEngine::with_config(self.config, self.seed);
        engine
            .set_world(self.world)
            .expect("fresh engine accepts a world");

        for player in self.players {
            engine
                .add_player(player)
                .expect("fixture players fit the palette");
        }

        let first_player = engine
            .players()
            .iter()
            .find(|p| p.is_owner)
            .or(engine.players().first())
            .map(|p| p.id)
            .expect("fixture needs a player");

        let territory_count = engine.world().map_or(0, |w| w.territories().len());
        let mut occupiers = vec![first_player; territory_count];
        for &(territory, player, _) in &self.holdings {
            occupiers[territory.index()] = player;
        }

        let state = engine.state_mut();
        state.commit(Record::StartGame(Box::new(StartGame {
            occupiers,
            missions: self.missions,
            deck: self.deck,
            first_player,
        })));

        if let Some(world) = state.world_mut() {
            for (territory, _, troops) in self.holdings {
                world[territory].troops = troops;
            }
        }

        for (player, cards) in self.hands {
            if let Some(player) = state.player_mut(player) {
                player.cards = cards;
            }
        }

        engine.begin_turn(first_player);
        engine.notify();
        engine
    }
}

/// `A - B - C` in one continent: A and C are not neighbors.
pub fn line_world() -> World {
    let mut builder = WorldBuilder::new("Line");
    let continent = builder.continent("Only");
    let a = builder.territory("A", continent).expect("continent exists");
    let b = builder.territory("B", continent).expect("continent exists");
    let c = builder.territory("C", continent).expect("continent exists");
    builder
        .edge(a, b)
        .and_then(|builder| builder.edge(b, c))
        .expect("territories exist");
    builder.build()
}

/// A hub bordering `spokes` territories, which border nothing else, plus one island
/// bordering nothing. The hub is territory 0, the island is the last territory.
pub fn star_world(spokes: u16) -> World {
    let mut builder = WorldBuilder::new("Star");
    let continent = builder.continent("Only");
    let hub = builder.territory("Hub", continent).expect("continent exists");
    for i in 0..spokes {
        let spoke = builder
            .territory(format!("Spoke {i}"), continent)
            .expect("continent exists");
        builder.edge(hub, spoke).expect("territories exist");
    }
    builder
        .territory("Island", continent)
        .expect("continent exists");
    builder.build()
}
