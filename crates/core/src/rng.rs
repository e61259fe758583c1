use crate::Card;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of randomness for shuffling and computer draws.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        for i in (1..cards.len()).rev() {
            let j = self.pick_index(i + 1);
            cards.swap(i, j);
        }
    }
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for RngState {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Replays a fixed list of picks; each pick is reduced modulo the requested range.
/// Once the script runs dry every pick is 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    picks: VecDeque<usize>,
    keep_order: bool,
}

impl ScriptedRng {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            keep_order: false,
        }
    }

    /// Shuffles are no-ops; only `pick_index` consumes the script.
    pub fn unshuffled(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            keep_order: true,
        }
    }

    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().map(|pick| pick % len).unwrap_or(0)
    }

    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        if self.keep_order {
            return;
        }
        for i in (1..cards.len()).rev() {
            let j = self.pick_index(i + 1);
            cards.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;

    #[test]
    fn scripted_picks_wrap_and_fall_back_to_zero() {
        let mut rng = ScriptedRng::new([7, 2]);
        assert_eq!(rng.pick_index(5), 2);
        assert_eq!(rng.pick_index(5), 2);
        assert_eq!(rng.pick_index(5), 0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn seeded_state_is_reproducible() {
        let mut a = Deck::standard53();
        let mut b = Deck::standard53();
        a.shuffle(&mut RngState::from_seed(42));
        b.shuffle(&mut RngState::from_seed(42));
        assert_eq!(a.cards, b.cards);
    }

    #[test]
    fn unshuffled_keeps_deck_order() {
        let mut deck = Deck::standard53();
        let before = deck.cards.clone();
        deck.shuffle(&mut ScriptedRng::unshuffled([]));
        assert_eq!(deck.cards, before);
    }
}
