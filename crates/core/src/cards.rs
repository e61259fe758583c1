use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    Joker,
}

impl Suit {
    pub const STANDARD: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Joker => "★",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Joker,
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const STANDARD: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric rank: 1 (ace) through 13 (king), 0 for the joker.
    pub fn number(self) -> u8 {
        match self {
            Rank::Joker => 0,
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            0 => Some(Rank::Joker),
            1..=13 => Some(Rank::STANDARD[usize::from(number) - 1]),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Joker => "JOKER",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn standard(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn joker() -> Self {
        Self {
            suit: Suit::Joker,
            rank: Rank::Joker,
        }
    }

    pub fn is_joker(&self) -> bool {
        self.rank == Rank::Joker
    }

    /// Two cards pair when they share a rank and neither is the joker.
    pub fn pairs_with(&self, other: &Card) -> bool {
        !self.is_joker() && !other.is_joker() && self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str("JOKER");
        }
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_numbers_round_trip_through_labels() {
        assert_eq!(Rank::from_number(0), Some(Rank::Joker));
        assert_eq!(Rank::from_number(1), Some(Rank::Ace));
        assert_eq!(Rank::from_number(13), Some(Rank::King));
        assert_eq!(Rank::from_number(14), None);
        assert_eq!(Rank::Queen.number(), 12);
    }

    #[test]
    fn joker_never_pairs() {
        let joker = Card::joker();
        assert!(!joker.pairs_with(&joker));
        let five = Card::standard(Suit::Spades, Rank::Five);
        assert!(five.pairs_with(&Card::standard(Suit::Hearts, Rank::Five)));
        assert!(!five.pairs_with(&Card::standard(Suit::Hearts, Rank::Six)));
    }

    #[test]
    fn display_uses_short_labels() {
        assert_eq!(Card::standard(Suit::Hearts, Rank::Ten).to_string(), "10♥");
        assert_eq!(Card::joker().to_string(), "JOKER");
    }
}
