use risk_shared::{
    map::TerritoryId,
    player::{Player, PlayerId, PlayerPhase},
    record::{
        AllocatedArmy, AttackOutcome, MovedArmies, PhaseChanged, Record, ReleasedCard,
        ReleasedSeries, StartGame, StartTurn,
    },
    Card,
};

use super::EngineState;
use crate::{cards::CardStacks, turn::Turn};

impl EngineState {
    /// Applies a validated record and appends it to the recording.
    pub fn commit(&mut self, mut record: Record) {
        match &mut record {
            Record::PlayerJoined(player) => self.commit_record_player_joined(player),
            Record::WorldChanged(world) => self.world = Some((**world).clone()),
            Record::StartGame(r) => self.commit_record_start_game(r),
            Record::StartTurn(r) => self.commit_record_start_turn(r),
            Record::AllocatedArmy(r) => self.commit_record_allocated_army(*r),
            Record::ReleasedCard(r) => self.commit_record_released_card(*r),
            Record::ReleasedSeries(r) => self.commit_record_released_series(*r),
            Record::Attack(r) => self.commit_record_attack(r),
            Record::MovedArmies(r) => self.commit_record_moved_armies(*r),
            Record::PhaseChanged(r) => self.commit_record_phase_changed(*r),
            Record::Winner(player) => self.commit_record_winner(*player),
            Record::Killed => self.commit_record_killed(),
        }

        self.recording.push(record);
    }

    fn commit_record_player_joined(&mut self, player: &Player) {
        self.players.push(player.clone());
    }

    fn commit_record_start_game(&mut self, r: &StartGame) {
        if let Some(world) = self.world.as_mut() {
            for (i, &occupier) in r.occupiers.iter().enumerate() {
                let territory = &mut world[TerritoryId(i as u16)];
                territory.occupier = Some(occupier);
                territory.troops = self.config.starting_troops;
                territory.moved_troops = 0;
            }
        }

        for player in &mut self.players {
            player.phase = PlayerPhase::Idle;
            player.cards.clear();
        }

        self.missions = r.missions.clone();
        self.cards = CardStacks::new(r.deck.clone());
        self.turns.clear();
        self.running = true;
    }

    fn commit_record_start_turn(&mut self, r: &StartTurn) {
        if let Some(previous) = self.current_turn().map(Turn::player) {
            self.set_phase(previous, PlayerPhase::Idle);
        }

        self.set_phase(r.player, PlayerPhase::ReleaseCards);

        if let Some(world) = self.world.as_mut() {
            for territory in world.territories_mut_of(r.player) {
                territory.moved_troops = 0;
            }
        }

        self.turns.push(Turn::new(r.player, r.reinforcements()));
    }

    fn commit_record_allocated_army(&mut self, r: AllocatedArmy) {
        if let Some(world) = self.world.as_mut() {
            world[r.territory].add_troops(1, false);
        }

        if let Some(turn) = self.turns.last_mut() {
            turn.take_troop();
        }
    }

    fn commit_record_released_card(&mut self, r: ReleasedCard) {
        if let Some(player) = self.player_mut(r.player) {
            player.discard(&[r.card]);
        }

        self.cards.discard([r.card]);

        if let Some(world) = self.world.as_mut() {
            world[r.card.territory()].add_troops(r.territory_bonus, false);
        }
    }

    fn commit_record_released_series(&mut self, r: ReleasedSeries) {
        if let Some(player) = self.player_mut(r.player) {
            player.discard(&r.cards);
        }

        let series_index = self.cards.redeem_series(r.cards);
        debug_assert_eq!(series_index, r.series_index);

        if let Some(turn) = self.turns.last_mut() {
            turn.add_troops(r.set_bonus);
        }
    }

    fn commit_record_attack(&mut self, r: &mut AttackOutcome) {
        let Some(world) = self.world.as_mut() else {
            return;
        };

        world[r.attacking_territory].remove_troops(r.attacking_lost);
        world[r.defending_territory].remove_troops(r.defending_lost);

        if r.territory_conquered {
            let advancing = r.troops_advanced();
            world[r.defending_territory].occupier = Some(r.attacker);
            world[r.attacking_territory].remove_troops(advancing);
            world[r.defending_territory].add_troops(advancing, true);

            let earns_card = self.turns.last_mut().is_some_and(Turn::earn_card);
            if earns_card {
                r.card_drawn = self.cards.draw(&mut self.rng);
            }

            if r.defender_eliminated {
                let surrendered = self
                    .player_mut(r.defender)
                    .map(|p| std::mem::take(&mut p.cards))
                    .unwrap_or_default();
                self.give_cards(r.attacker, surrendered);
            }

            if let Some(card) = r.card_drawn {
                self.give_cards(r.attacker, vec![card]);
            }
        }

        if let Some(turn) = self.turns.last_mut() {
            turn.log_attack(r.clone());
        }
    }

    fn commit_record_moved_armies(&mut self, r: MovedArmies) {
        if let Some(world) = self.world.as_mut() {
            world[r.source_territory].remove_troops(r.troop_count);
            world[r.target_territory].add_troops(r.troop_count, true);
        }
    }

    fn commit_record_phase_changed(&mut self, r: PhaseChanged) {
        self.set_phase(r.player, r.phase);
    }

    fn commit_record_winner(&mut self, player: PlayerId) {
        self.winner = Some(player);
        self.finished = true;
        self.idle_everyone();
    }

    fn commit_record_killed(&mut self) {
        self.killed = true;
        self.finished = true;
        self.idle_everyone();
    }

    fn set_phase(&mut self, player: PlayerId, phase: PlayerPhase) {
        if let Some(player) = self.player_mut(player) {
            player.phase = phase;
        }
    }

    fn idle_everyone(&mut self) {
        for player in &mut self.players {
            player.phase = PlayerPhase::Idle;
        }
    }

    fn give_cards(&mut self, player: PlayerId, cards: Vec<Card>) {
        if let Some(player) = self.player_mut(player) {
            player.cards.extend(cards);
        }
    }
}
