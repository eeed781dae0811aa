pub mod map;
pub mod mission;
pub mod player;
pub mod record;

use map::TerritoryId;

/// A territory card. Every territory contributes exactly one card to the stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    territory: TerritoryId,
    symbol: CardSymbol,
}

impl Card {
    pub fn new(territory: TerritoryId, symbol: CardSymbol) -> Self {
        Self { territory, symbol }
    }

    pub fn territory(self) -> TerritoryId {
        self.territory
    }

    pub fn symbol(self) -> CardSymbol {
        self.symbol
    }

    /// Two cards are the same logical card when they name the same territory, whatever copy of
    /// the value they came from.
    pub fn same_card(self, other: Card) -> bool {
        self.territory == other.territory
    }
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, enumn::N, enum_map::Enum)]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
pub enum CardSymbol {
    Soldier,
    Cannon,
    Cavalry,
}

impl CardSymbol {
    pub const ALL: [Self; 3] = [Self::Soldier, Self::Cannon, Self::Cavalry];

    /// Symbol printed on the card of the territory at `index`, cycling through [`Self::ALL`].
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}
