use serde::{Deserialize, Serialize};

/// Finish order. Append-only; a seat appears at most once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ranking {
    order: Vec<usize>,
}

impl Ranking {
    /// Appends the seat and returns its 1-based place, or `None` if already ranked.
    pub fn record(&mut self, seat: usize) -> Option<usize> {
        if self.contains(seat) {
            return None;
        }
        self.order.push(seat);
        Some(self.order.len())
    }

    pub fn contains(&self, seat: usize) -> bool {
        self.order.contains(&seat)
    }

    pub fn place_of(&self, seat: usize) -> Option<usize> {
        self.order
            .iter()
            .position(|ranked| *ranked == seat)
            .map(|index| index + 1)
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn last(&self) -> Option<usize> {
        self.order.last().copied()
    }
}
