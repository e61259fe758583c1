use crate::{Card, Rank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkipReason {
    HandEmpty,
    UpstreamEmpty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    CardsDealt {
        seat: usize,
        count: usize,
    },
    InitialPairsRemoved {
        seat: usize,
        pairs: usize,
    },
    TurnStarted {
        seat: usize,
        source: usize,
    },
    TurnSkipped {
        seat: usize,
        reason: SkipReason,
    },
    DrawPoolOpened {
        source: usize,
        cards: usize,
    },
    PoolCardPicked {
        seat: usize,
        index: usize,
    },
    CardDrawn {
        seat: usize,
        source: usize,
        card: Card,
    },
    PairDiscarded {
        seat: usize,
        rank: Rank,
    },
    PoolReturned {
        seat: usize,
        cards: usize,
    },
    PlayerFinished {
        seat: usize,
        place: usize,
    },
    GameEnded {
        loser: usize,
        ranking: Vec<usize>,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
