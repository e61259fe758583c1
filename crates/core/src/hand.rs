use crate::Card;
use serde::{Deserialize, Serialize};

pub const SEAT_COUNT: usize = 4;

/// The seat a player draws from: the previous seat around the table.
pub fn upstream(seat: usize) -> usize {
    (seat + SEAT_COUNT - 1) % SEAT_COUNT
}

pub fn next_seat(seat: usize) -> usize {
    (seat + 1) % SEAT_COUNT
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PairMatch {
    pub first: usize,
    pub second: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn remove(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Greedy single pass: each unmatched card pairs with the first later unmatched
    /// card of equal rank. The joker never matches. Indices never overlap.
    pub fn find_pairs(&self) -> Vec<PairMatch> {
        let mut pairs = Vec::new();
        let mut matched = vec![false; self.cards.len()];
        for first in 0..self.cards.len() {
            if matched[first] {
                continue;
            }
            for second in first + 1..self.cards.len() {
                if matched[second] || !self.cards[first].pairs_with(&self.cards[second]) {
                    continue;
                }
                matched[first] = true;
                matched[second] = true;
                pairs.push(PairMatch { first, second });
                break;
            }
        }
        pairs
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub seat: usize,
    pub is_human: bool,
    pub hand: Hand,
}

impl Player {
    pub fn new(seat: usize, is_human: bool) -> Self {
        Self {
            seat,
            is_human,
            hand: Hand::default(),
        }
    }

    pub fn name(&self) -> String {
        seat_name(self.seat, self.is_human)
    }
}

pub fn seat_name(seat: usize, is_human: bool) -> String {
    if is_human {
        "You".to_string()
    } else {
        format!("AI-{seat}")
    }
}
