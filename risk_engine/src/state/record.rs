use rand::prelude::SliceRandom;
use risk_shared::{
    player::PlayerId,
    record::{StartGame, StartTurn},
};

use super::EngineState;
use crate::{cards::CardStacks, error::EngineError, mission::assign_missions, turn::Turn};

pub fn start_game(state: &mut EngineState) -> Result<StartGame, EngineError> {
    if state.running || state.finished {
        return Err(EngineError::MatchAlreadyStarted);
    }

    match state.players.len() {
        0 => return Err(EngineError::NoPlayerLoggedIn),
        1 => return Err(EngineError::NotEnoughPlayers),
        _ => {}
    }

    let world = state.world.as_ref().ok_or(EngineError::WorldNotDefined)?;
    let roster = state.players.iter().map(|p| p.id).collect::<Vec<_>>();

    let mut order = world.territories().iter().map(|t| t.id).collect::<Vec<_>>();
    order.shuffle(&mut state.rng);

    let mut occupiers = vec![roster[0]; order.len()];
    for (i, territory) in order.into_iter().enumerate() {
        occupiers[territory.index()] = roster[i % roster.len()];
    }

    let missions = assign_missions(&mut state.rng, world, &roster, &state.config);
    let deck = CardStacks::shuffled_deck(world, &mut state.rng);

    let first_player = state
        .players
        .iter()
        .find(|p| p.is_owner)
        .map_or(roster[0], |p| p.id);

    Ok(StartGame {
        occupiers,
        missions,
        deck,
        first_player,
    })
}

pub fn start_turn(state: &EngineState, player: PlayerId) -> StartTurn {
    let Some(world) = state.world.as_ref() else {
        return StartTurn {
            player,
            continents_held: Vec::new(),
            territories_held: 0,
            continent_bonus: 0,
            territory_bonus: 0,
        };
    };

    let territories_held = world.territory_count_of(player) as u32;
    let continents_held = world.continents_held(player);
    let continent_bonus = continents_held.len() as u32 * state.config.continent_bonus;

    StartTurn {
        player,
        continents_held,
        territories_held,
        continent_bonus,
        territory_bonus: state.config.territory_bonus(territories_held),
    }
}

/// The next player in seat order, wrapping, who still holds a territory.
pub fn next_player(state: &EngineState) -> Option<PlayerId> {
    let world = state.world.as_ref()?;
    let current = state.current_turn().map(Turn::player);
    let start = current
        .and_then(|id| state.players.iter().position(|p| p.id == id))
        .map_or(0, |i| i + 1);

    let count = state.players.len();
    (0..count)
        .map(|offset| state.players[(start + offset) % count].id)
        .find(|&id| world.territory_count_of(id) > 0)
}

/// Who has won, if anyone. Holding the whole world beats any mission; among fulfilled missions
/// the active player's comes first, then assignment order.
pub fn winner(state: &EngineState) -> Option<PlayerId> {
    if !state.running {
        return None;
    }

    let world = state.world.as_ref()?;
    let total = world.territories().len();
    if total > 0 {
        if let Some(player) = state
            .players
            .iter()
            .find(|p| world.territory_count_of(p.id) == total)
        {
            return Some(player.id);
        }
    }

    let current = state.current_turn().map(Turn::player);
    let fulfilled = state
        .missions
        .iter()
        .filter(|m| m.is_fulfilled(world))
        .collect::<Vec<_>>();

    fulfilled
        .iter()
        .find(|m| Some(m.owner) == current)
        .or(fulfilled.first())
        .map(|m| m.owner)
}
