use enum_map::EnumMap;
use rand::{prelude::SliceRandom, Rng};
use risk_shared::{map::World, Card, CardSymbol};

/// Draw pile, discard pile and the match-wide count of series turned in.
#[derive(Clone, Debug, Default)]
pub struct CardStacks {
    deck: Vec<Card>,
    discarded: Vec<Card>,
    series_redeemed: u32,
}

impl CardStacks {
    /// One card per territory, symbols cycling in territory order, shuffled.
    pub fn shuffled_deck<R: Rng>(world: &World, rng: &mut R) -> Vec<Card> {
        let mut deck = world
            .territories()
            .iter()
            .enumerate()
            .map(|(i, t)| Card::new(t.id, CardSymbol::for_index(i)))
            .collect::<Vec<_>>();

        deck.shuffle(rng);
        deck
    }

    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            deck,
            discarded: Vec::new(),
            series_redeemed: 0,
        }
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    pub fn series_redeemed(&self) -> u32 {
        self.series_redeemed
    }

    /// Takes the top card, first shuffling the discard pile back in if the deck ran out.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.deck.is_empty() {
            self.reshuffle(rng);
        }

        self.deck.pop()
    }

    pub fn discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discarded.extend(cards);
    }

    /// Counts a series as turned in and returns its zero-based index.
    pub fn redeem_series(&mut self, cards: [Card; 3]) -> u32 {
        self.discard(cards);
        let index = self.series_redeemed;
        self.series_redeemed += 1;
        index
    }

    fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        log::trace!("shuffling {} discarded cards into the deck", self.discarded.len());

        self.deck.append(&mut self.discarded);
        self.deck.shuffle(rng);
    }
}

/// Finds one series among `cards`: one of each symbol, else three soldiers, three cannons or
/// three cavalry, in that order.
pub fn find_series(cards: &[Card]) -> Option<[Card; 3]> {
    let mut cards_by_symbol: EnumMap<CardSymbol, Vec<Card>> = EnumMap::default();
    for &card in cards {
        cards_by_symbol[card.symbol()].push(card);
    }

    if cards_by_symbol.values().all(|x| !x.is_empty()) {
        return Some(CardSymbol::ALL.map(|symbol| cards_by_symbol[symbol][0]));
    }

    CardSymbol::ALL.into_iter().find_map(|symbol| {
        let matching = &cards_by_symbol[symbol];
        (matching.len() >= 3).then(|| [matching[0], matching[1], matching[2]])
    })
}
