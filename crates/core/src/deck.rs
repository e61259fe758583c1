use crate::{Card, RandomSource, Rank, Suit, SEAT_COUNT};

pub const DECK_SIZE: usize = 53;

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Four suits of ace through king followed by the single joker.
    pub fn standard53() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                cards.push(Card::standard(suit, rank));
            }
        }
        cards.push(Card::joker());
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut dyn RandomSource) {
        rng.shuffle_cards(&mut self.cards);
    }

    /// Deals every card round-robin: card `k` goes to seat `k % SEAT_COUNT`.
    pub fn deal(self) -> [Vec<Card>; SEAT_COUNT] {
        let mut hands: [Vec<Card>; SEAT_COUNT] = Default::default();
        for (index, card) in self.cards.into_iter().enumerate() {
            hands[index % SEAT_COUNT].push(card);
        }
        hands
    }
}
