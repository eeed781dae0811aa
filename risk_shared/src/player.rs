use crate::Card;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, enumn::N, enum_map::Enum)]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 4] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
    ];
}

/// Where a player stands within the turn cycle.
///
/// `GameInit -> Idle -> ReleaseCards -> AllocateArmies -> Attack -> Move -> Idle`
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, enumn::N)]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
pub enum PlayerPhase {
    #[default]
    GameInit,
    Idle,
    ReleaseCards,
    AllocateArmies,
    Attack,
    Move,
}

impl PlayerPhase {
    /// Returns `true` if the phase is [`Idle`].
    ///
    /// [`Idle`]: PlayerPhase::Idle
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns `true` while the player is acting in their own turn.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::ReleaseCards | Self::AllocateArmies | Self::Attack | Self::Move
        )
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    /// The player who opened the match; they take the first turn.
    pub is_owner: bool,
    pub phase: PlayerPhase,
    pub color: Option<PlayerColor>,
    pub cards: Vec<Card>,
}

impl Player {
    pub fn new(id: PlayerId, username: impl Into<String>, is_owner: bool) -> Self {
        Self {
            id,
            username: username.into(),
            is_owner,
            phase: PlayerPhase::GameInit,
            color: None,
            cards: Vec::new(),
        }
    }

    /// Finds the hand's copy of `card`, matching by territory.
    pub fn card(&self, card: Card) -> Option<Card> {
        self.cards.iter().copied().find(|c| c.same_card(card))
    }

    pub fn holds(&self, card: Card) -> bool {
        self.card(card).is_some()
    }

    pub fn discard(&mut self, cards: &[Card]) {
        self.cards
            .retain(|held| !cards.iter().any(|c| c.same_card(*held)));
    }
}
