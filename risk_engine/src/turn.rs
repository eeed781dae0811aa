use risk_shared::{player::PlayerId, record::AttackOutcome};

/// One player's turn: the reinforcement pool, the attacks made so far and whether a card
/// has been earned yet.
#[derive(Clone, Debug)]
pub struct Turn {
    player: PlayerId,
    troops_remaining: u32,
    attacks: Vec<AttackOutcome>,
    card_earned: bool,
}

impl Turn {
    pub fn new(player: PlayerId, reinforcements: u32) -> Self {
        Self {
            player,
            troops_remaining: reinforcements,
            attacks: Vec::new(),
            card_earned: false,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Armies still waiting to be allocated.
    pub fn troops_remaining(&self) -> u32 {
        self.troops_remaining
    }

    pub fn attacks(&self) -> &[AttackOutcome] {
        &self.attacks
    }

    pub fn conquests(&self) -> usize {
        self.attacks.iter().filter(|a| a.territory_conquered).count()
    }

    pub fn has_earned_card(&self) -> bool {
        self.card_earned
    }

    pub(crate) fn take_troop(&mut self) {
        self.troops_remaining = self.troops_remaining.saturating_sub(1);
    }

    pub(crate) fn add_troops(&mut self, count: u32) {
        self.troops_remaining += count;
    }

    /// Returns `true` only the first time it is called in a turn.
    pub(crate) fn earn_card(&mut self) -> bool {
        !std::mem::replace(&mut self.card_earned, true)
    }

    pub(crate) fn log_attack(&mut self, outcome: AttackOutcome) {
        self.attacks.push(outcome);
    }
}
