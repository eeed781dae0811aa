//! Validation for the actions a player takes during their turn. Each function either rejects
//! the action or returns the record that carries it out. Nothing but the dice stream moves
//! forward here: `attack` validates everything before it rolls, and the world, roster and card
//! stacks are left for the commit.

use risk_shared::{
    map::TerritoryId,
    record::{AllocatedArmy, AttackOutcome, MovedArmies, ReleasedCard, ReleasedSeries},
    Card,
};

use super::EngineState;
use crate::{
    cards::find_series,
    combat,
    error::{ArmyOperation, EngineError},
};

pub fn allocate_army(
    state: &EngineState,
    territory: TerritoryId,
) -> Result<AllocatedArmy, EngineError> {
    let player = state.active_player()?;

    if state.territory(territory)?.occupier != Some(player) {
        return Err(EngineError::CountryOwner(player, territory));
    }

    let remaining = state.current_turn().map_or(0, |t| t.troops_remaining());
    if remaining == 0 {
        return Err(EngineError::NotEnoughArmies(ArmyOperation::Allocate));
    }

    Ok(AllocatedArmy { player, territory })
}

/// `None` when the card is not in the player's hand or its territory is no longer theirs.
pub fn release_card(state: &EngineState, card: Card) -> Result<Option<ReleasedCard>, EngineError> {
    let player = state.active_player()?;

    let Some(card) = state.player(player).and_then(|p| p.card(card)) else {
        return Ok(None);
    };

    if state.territory(card.territory())?.occupier != Some(player) {
        return Ok(None);
    }

    Ok(Some(ReleasedCard {
        player,
        card,
        territory_bonus: state.config.territory_card_bonus,
    }))
}

/// `None` unless the cards are distinct, every one is in the player's hand and they hold a
/// series.
pub fn release_series(
    state: &EngineState,
    cards: &[Card],
) -> Result<Option<ReleasedSeries>, EngineError> {
    let player = state.active_player()?;
    let Some(hand) = state.player(player) else {
        return Ok(None);
    };

    let Some(held) = cards
        .iter()
        .map(|&c| hand.card(c))
        .collect::<Option<Vec<_>>>()
    else {
        return Ok(None);
    };

    let repeated = held
        .iter()
        .enumerate()
        .any(|(i, card)| held[..i].iter().any(|other| other.same_card(*card)));
    if repeated {
        return Ok(None);
    }

    let Some(series) = find_series(&held) else {
        return Ok(None);
    };

    let series_index = state.cards.series_redeemed();
    Ok(Some(ReleasedSeries {
        player,
        cards: series,
        series_index,
        set_bonus: state.config.series_bonus(series_index),
    }))
}

pub fn attack(
    state: &mut EngineState,
    attacking_territory: TerritoryId,
    defending_territory: TerritoryId,
    attacking_troops: u32,
) -> Result<AttackOutcome, EngineError> {
    let attacker = state.active_player()?;
    let attacking = state.territory(attacking_territory)?;
    let defending = state.territory(defending_territory)?;

    if !state.world.as_ref().is_some_and(|w| {
        w.are_neighbors(attacking_territory, defending_territory)
    }) {
        return Err(EngineError::CountriesNotInRelation(
            attacking_territory,
            defending_territory,
        ));
    }

    if attacking.occupier != Some(attacker) {
        return Err(EngineError::CountryOwner(attacker, attacking_territory));
    }

    let defender = match defending.occupier {
        Some(p) if p == attacker => return Err(EngineError::IsOwnCountry(defending_territory)),
        Some(p) => p,
        None => return Err(EngineError::UnknownTerritory(defending_territory)),
    };

    if attacking_troops == 0 || attacking_troops > combat::max_attack_count(attacking.troops) {
        return Err(EngineError::NotEnoughArmies(ArmyOperation::Attack));
    }

    let defending_troops = defending.troops;
    let defender_holdings = state
        .world
        .as_ref()
        .map_or(0, |w| w.territory_count_of(defender));

    let battle = combat::resolve(&mut state.rng, attacking_troops, defending_troops);
    let territory_conquered = battle.defending_lost >= defending_troops;

    Ok(AttackOutcome {
        attacker,
        defender,
        attacking_territory,
        defending_territory,
        attacking_troops,
        attacking_rolls: battle.attacking_rolls,
        defending_rolls: battle.defending_rolls,
        attacking_lost: battle.attacking_lost,
        defending_lost: battle.defending_lost,
        territory_conquered,
        defender_eliminated: territory_conquered && defender_holdings == 1,
        card_drawn: None,
    })
}

pub fn move_armies(
    state: &EngineState,
    source_territory: TerritoryId,
    target_territory: TerritoryId,
    troop_count: u32,
) -> Result<MovedArmies, EngineError> {
    let player = state.active_player()?;
    let source = state.territory(source_territory)?;
    let target = state.territory(target_territory)?;

    if !state
        .world
        .as_ref()
        .is_some_and(|w| w.are_neighbors(source_territory, target_territory))
    {
        return Err(EngineError::CountriesNotInRelation(
            source_territory,
            target_territory,
        ));
    }

    for territory in [source, target] {
        if territory.occupier != Some(player) {
            return Err(EngineError::CountryOwner(player, territory.id));
        }
    }

    if troop_count == 0 || troop_count >= source.troops {
        return Err(EngineError::NotEnoughArmies(ArmyOperation::Move));
    }

    Ok(MovedArmies {
        player,
        source_territory,
        target_territory,
        troop_count,
    })
}
