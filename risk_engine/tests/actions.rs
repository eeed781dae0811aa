use risk_engine::{
    testing::{line_world, star_world, MatchBuilder},
    ArmyOperation, EngineError, GameEngine,
};
use risk_shared::{
    map::{classic, TerritoryId},
    player::PlayerId,
    record::AttackOutcome,
    Card, CardSymbol,
};

const A: TerritoryId = TerritoryId(0);
const B: TerritoryId = TerritoryId(1);
const C: TerritoryId = TerritoryId(2);

const HUB: TerritoryId = TerritoryId(0);

/// Player 1 holds A with 3 and B with 1, player 2 holds C with 2. Player 1 is on turn.
fn line_match() -> GameEngine {
    MatchBuilder::new(line_world())
        .player(1, "ada")
        .player(2, "bo")
        .occupy(0, 1, 3)
        .occupy(1, 1, 1)
        .occupy(2, 2, 2)
        .build()
}

fn conquer(engine: &mut GameEngine, from: TerritoryId, to: TerritoryId) -> AttackOutcome {
    for _ in 0..200 {
        let troops = engine.max_attack_count(from);
        let outcome = engine.attack(from, to, troops).unwrap();
        if outcome.territory_conquered {
            return outcome;
        }
    }

    panic!("{to:?} never fell");
}

fn troops(engine: &GameEngine, territory: TerritoryId) -> u32 {
    engine.world().unwrap()[territory].troops
}

#[test]
fn allocation_drains_the_pool() {
    let mut engine = line_match();
    assert_eq!(engine.allocatable_army_count(), 3);

    assert_eq!(
        engine.allocate_army(C),
        Err(EngineError::CountryOwner(PlayerId(1), C))
    );

    for _ in 0..3 {
        engine.allocate_army(A).unwrap();
    }
    assert_eq!(troops(&engine, A), 6);
    assert_eq!(engine.allocatable_army_count(), 0);

    assert_eq!(
        engine.allocate_army(A),
        Err(EngineError::NotEnoughArmies(ArmyOperation::Allocate))
    );
    assert_eq!(troops(&engine, A), 6);
}

#[test]
fn unknown_territories_are_rejected() {
    let mut engine = line_match();

    assert_eq!(
        engine.allocate_army(TerritoryId(40)),
        Err(EngineError::UnknownTerritory(TerritoryId(40)))
    );
    assert_eq!(
        engine.move_armies(A, TerritoryId(40), 1),
        Err(EngineError::UnknownTerritory(TerritoryId(40)))
    );
}

#[test]
fn attack_rejections_leave_the_match_untouched() {
    let mut engine = line_match();
    let recorded = engine.recording().len();

    assert_eq!(
        engine.attack(A, C, 1),
        Err(EngineError::CountriesNotInRelation(A, C))
    );
    assert_eq!(
        engine.attack(B, C, 1),
        Err(EngineError::NotEnoughArmies(ArmyOperation::Attack))
    );
    assert_eq!(engine.attack(A, B, 1), Err(EngineError::IsOwnCountry(B)));
    assert_eq!(
        engine.attack(C, B, 1),
        Err(EngineError::CountryOwner(PlayerId(1), C))
    );

    assert_eq!(engine.recording().len(), recorded);
    assert_eq!(engine.world().unwrap().total_troops(), 6);
}

#[test]
fn attack_size_is_bounded_by_the_garrison() {
    let mut engine = line_match();
    engine.allocate_army(B).unwrap();
    engine.allocate_army(B).unwrap();
    assert_eq!(engine.max_attack_count(B), 2);

    for troops in [0, 3] {
        assert_eq!(
            engine.attack(B, C, troops),
            Err(EngineError::NotEnoughArmies(ArmyOperation::Attack))
        );
    }
    assert!(engine.attack(B, C, 2).is_ok());
}

#[test]
fn battles_conserve_armies() {
    for seed in 0..20 {
        let mut engine = MatchBuilder::new(star_world(3))
            .seed(seed)
            .player(1, "ada")
            .player(2, "bo")
            .occupy(0, 1, 40)
            .occupy(1, 2, 5)
            .occupy(2, 2, 5)
            .occupy(3, 2, 5)
            .occupy(4, 2, 1)
            .build();

        let target = TerritoryId(1);
        loop {
            let attacking = engine.max_attack_count(HUB);
            if attacking == 0 {
                break;
            }

            let before = engine.world().unwrap().total_troops();
            let defending = troops(&engine, target);
            let outcome = engine.attack(HUB, target, attacking).unwrap();
            let after = engine.world().unwrap().total_troops();

            assert_eq!(
                before - after,
                u64::from(outcome.attacking_lost + outcome.defending_lost)
            );
            assert_eq!(outcome.attacking_rolls.len() as u32, attacking);
            let defending_dice = if attacking == 1 || defending <= 1 { 1 } else { 2 };
            assert_eq!(outcome.defending_rolls.len(), defending_dice);
            assert_eq!(
                (outcome.attacking_lost + outcome.defending_lost) as usize,
                (attacking as usize).min(defending_dice)
            );
            assert!(outcome
                .attacking_rolls
                .iter()
                .chain(&outcome.defending_rolls)
                .all(|r| (1..=6).contains(r)));
            assert!(troops(&engine, HUB) >= 1);

            if outcome.territory_conquered {
                let taken = &engine.world().unwrap()[target];
                assert_eq!(taken.occupier, Some(PlayerId(1)));
                assert_eq!(taken.troops, outcome.troops_advanced());
                assert_eq!(taken.moved_troops, outcome.troops_advanced());
                break;
            }
        }
    }
}

#[test]
fn one_card_per_turn() {
    let mut engine = MatchBuilder::new(star_world(3))
        .player(1, "ada")
        .player(2, "bo")
        .occupy(0, 1, 50)
        .occupy(1, 2, 1)
        .occupy(2, 2, 1)
        .occupy(3, 2, 1)
        .occupy(4, 2, 1)
        .deck(
            (1..=4)
                .map(|t| Card::new(TerritoryId(t), CardSymbol::for_index(t as usize)))
                .collect(),
        )
        .build();

    let first = conquer(&mut engine, HUB, TerritoryId(1));
    assert!(first.card_drawn.is_some());

    let second = conquer(&mut engine, HUB, TerritoryId(2));
    assert_eq!(second.card_drawn, None);

    assert_eq!(engine.player(PlayerId(1)).unwrap().cards.len(), 1);
    assert_eq!(engine.cards().deck().len(), 3);

    let turn = engine.current_turn().unwrap();
    assert_eq!(turn.conquests(), 2);
    assert!(turn.has_earned_card());

    engine.advance_turn().unwrap();
    let turn = engine.advance_turn().unwrap();
    assert_eq!(turn.player(), PlayerId(1));
    assert!(!turn.has_earned_card());

    let third = conquer(&mut engine, HUB, TerritoryId(3));
    assert!(third.card_drawn.is_some());
    assert_eq!(engine.player(PlayerId(1)).unwrap().cards.len(), 2);
}

#[test]
fn discard_pile_refills_the_deck() {
    let hand = vec![
        Card::new(TerritoryId(0), CardSymbol::Soldier),
        Card::new(TerritoryId(1), CardSymbol::Cannon),
        Card::new(TerritoryId(2), CardSymbol::Cavalry),
    ];
    let mut engine = MatchBuilder::new(star_world(1))
        .player(1, "ada")
        .player(2, "bo")
        .occupy(0, 1, 30)
        .occupy(1, 2, 1)
        .occupy(2, 2, 1)
        .hand(1, hand.clone())
        .build();

    assert_eq!(engine.release_cards(&hand), Ok(Some(3)));
    assert_eq!(engine.cards().discarded().len(), 3);
    assert!(engine.cards().deck().is_empty());

    let outcome = conquer(&mut engine, HUB, TerritoryId(1));
    assert!(outcome.card_drawn.is_some());
    assert_eq!(engine.cards().deck().len(), 2);
    assert!(engine.cards().discarded().is_empty());
    assert_eq!(engine.player(PlayerId(1)).unwrap().cards.len(), 1);
}

#[test]
fn moves_keep_armies_and_mark_them() {
    let mut engine = line_match();

    assert_eq!(engine.move_armies(A, B, 2), Ok(()));
    assert_eq!((troops(&engine, A), troops(&engine, B)), (1, 3));
    assert_eq!(engine.world().unwrap()[B].moved_troops, 2);
    assert_eq!(engine.world().unwrap().total_troops(), 6);

    assert_eq!(
        engine.move_armies(A, B, 1),
        Err(EngineError::NotEnoughArmies(ArmyOperation::Move))
    );
    assert_eq!(
        engine.move_armies(B, A, 0),
        Err(EngineError::NotEnoughArmies(ArmyOperation::Move))
    );
    assert_eq!(
        engine.move_armies(A, C, 1),
        Err(EngineError::CountriesNotInRelation(A, C))
    );
    assert_eq!(
        engine.move_armies(B, C, 1),
        Err(EngineError::CountryOwner(PlayerId(1), C))
    );
}

#[test]
fn moved_marks_clear_on_the_next_turn() {
    let mut engine = line_match();
    engine.move_armies(A, B, 2).unwrap();

    engine.advance_turn().unwrap();
    assert_eq!(engine.world().unwrap()[B].moved_troops, 2);

    engine.advance_turn().unwrap();
    assert_eq!(engine.world().unwrap()[B].moved_troops, 0);
}

#[test]
fn single_card_reinforces_its_territory() {
    let mut engine = MatchBuilder::new(line_world())
        .player(1, "ada")
        .player(2, "bo")
        .occupy(0, 1, 3)
        .occupy(1, 1, 1)
        .occupy(2, 2, 2)
        .hand(
            1,
            vec![
                Card::new(A, CardSymbol::Soldier),
                Card::new(C, CardSymbol::Cannon),
            ],
        )
        .build();

    assert_eq!(engine.release_card(Card::new(C, CardSymbol::Cannon)), Ok(None));
    assert_eq!(engine.release_card(Card::new(B, CardSymbol::Cannon)), Ok(None));

    assert_eq!(
        engine.release_card(Card::new(A, CardSymbol::Cavalry)),
        Ok(Some(2))
    );
    assert_eq!(troops(&engine, A), 5);
    assert_eq!(
        engine.player(PlayerId(1)).unwrap().cards,
        vec![Card::new(C, CardSymbol::Cannon)]
    );
    assert_eq!(
        engine.cards().discarded(),
        &[Card::new(A, CardSymbol::Soldier)]
    );
}

#[test]
fn incomplete_series_are_ignored() {
    let hand = vec![
        Card::new(TerritoryId(0), CardSymbol::Soldier),
        Card::new(TerritoryId(1), CardSymbol::Soldier),
        Card::new(TerritoryId(2), CardSymbol::Cannon),
    ];
    let mut engine = MatchBuilder::new(classic())
        .player(1, "ada")
        .player(2, "bo")
        .occupy(41, 2, 1)
        .hand(1, hand.clone())
        .build();
    let recorded = engine.recording().len();

    assert_eq!(engine.release_cards(&hand), Ok(None));
    assert_eq!(engine.release_cards(&hand[..2]), Ok(None));

    let borrowed = [
        hand[0],
        hand[1],
        Card::new(TerritoryId(3), CardSymbol::Soldier),
    ];
    assert_eq!(engine.release_cards(&borrowed), Ok(None));

    assert_eq!(engine.recording().len(), recorded);
    assert_eq!(engine.player(PlayerId(1)).unwrap().cards, hand);
}

#[test]
fn repeated_cards_are_not_a_series() {
    let a = Card::new(TerritoryId(0), CardSymbol::Soldier);
    let b = Card::new(TerritoryId(1), CardSymbol::Soldier);
    let c = Card::new(TerritoryId(2), CardSymbol::Soldier);

    let mut engine = MatchBuilder::new(classic())
        .player(1, "ada")
        .player(2, "bo")
        .occupy(41, 2, 1)
        .hand(1, vec![a, b])
        .hand(2, vec![c])
        .build();
    let pool = engine.allocatable_army_count();

    assert_eq!(engine.release_cards(&[a, a, b]), Ok(None));
    assert_eq!(engine.release_cards(&[a, a, a]), Ok(None));
    assert_eq!(
        engine.release_cards(&[a, Card::new(TerritoryId(0), CardSymbol::Cannon), b]),
        Ok(None)
    );

    engine.advance_turn().unwrap();
    assert_eq!(engine.release_cards(&[c, c, c]), Ok(None));

    assert_eq!(engine.player(PlayerId(1)).unwrap().cards, vec![a, b]);
    assert_eq!(engine.player(PlayerId(2)).unwrap().cards, vec![c]);
    assert!(engine.cards().discarded().is_empty());
    assert_eq!(engine.cards().series_redeemed(), 0);
    assert_eq!(engine.turns()[0].troops_remaining(), pool);
}

#[test]
fn rejected_attacks_roll_no_dice() {
    let mut rejected = line_match();
    let mut untouched = line_match();

    assert!(rejected.attack(A, C, 1).is_err());
    assert!(rejected.attack(B, C, 1).is_err());
    assert!(rejected.attack(A, B, 1).is_err());

    for engine in [&mut rejected, &mut untouched] {
        engine.allocate_army(B).unwrap();
        engine.allocate_army(B).unwrap();
    }

    let left = rejected.attack(B, C, 2).unwrap();
    let right = untouched.attack(B, C, 2).unwrap();
    assert_eq!(left.attacking_rolls, right.attacking_rolls);
    assert_eq!(left.defending_rolls, right.defending_rolls);
}

#[test]
fn series_bonus_escalates() {
    let hand = (0..15)
        .map(|t| Card::new(TerritoryId(t), CardSymbol::for_index(t as usize)))
        .collect::<Vec<_>>();
    let mut engine = MatchBuilder::new(classic())
        .player(1, "ada")
        .player(2, "bo")
        .occupy(41, 2, 1)
        .hand(1, hand)
        .build();
    let pool = engine.allocatable_army_count();

    let mut bonuses = Vec::new();
    loop {
        let hand = engine.player(PlayerId(1)).unwrap().cards.clone();
        match engine.release_cards(&hand).unwrap() {
            Some(bonus) => bonuses.push(bonus),
            None => break,
        }
    }

    assert_eq!(bonuses, vec![3, 5, 7, 10, 15]);
    assert_eq!(engine.allocatable_army_count(), pool + 40);
    assert_eq!(engine.cards().series_redeemed(), 5);
    assert_eq!(engine.cards().discarded().len(), 15);
    assert!(engine.player(PlayerId(1)).unwrap().cards.is_empty());
}

#[test]
fn series_count_is_shared_by_all_players() {
    let soldiers = |territories: [u16; 3]| {
        territories
            .map(|t| Card::new(TerritoryId(t), CardSymbol::Soldier))
            .to_vec()
    };
    let mut engine = MatchBuilder::new(classic())
        .player(1, "ada")
        .player(2, "bo")
        .occupy(41, 2, 1)
        .hand(1, soldiers([0, 1, 2]))
        .hand(2, soldiers([3, 4, 5]))
        .build();

    assert_eq!(engine.release_cards(&soldiers([0, 1, 2])), Ok(Some(3)));

    engine.advance_turn().unwrap();
    assert_eq!(engine.release_cards(&soldiers([3, 4, 5])), Ok(Some(5)));
}
