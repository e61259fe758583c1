use crate::{
    progress, Card, ConfigError, EventBus, PairMatch, Player, Point, RandomSource, Ranking,
    Scheduler, TableConfig, TableLayout,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

mod draw;
mod input;
mod pairs;
mod setup;
mod turn;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("no draw pool is waiting for a pick")]
    NotAwaitingPick,
    #[error("invalid draw pool index {0}")]
    InvalidPoolIndex(usize),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Playing,
    Ended,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnStep {
    TurnStart,
    AwaitingDraw,
    DrawAnimating,
    PairResolving,
    TurnEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOrigin {
    /// Spliced out of the source hand on arrival.
    Hand { source: usize, index: usize },
    /// The card picked from the open draw pool.
    Pool,
}

/// Continuation released by the scheduler when an animation or delay finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    ComputerDraw { seat: usize, source: usize },
    AppendToHand { seat: usize, origin: DrawOrigin },
    ResolvePairs { seat: usize },
    DiscardPair { seat: usize, pair: PairMatch },
    RestorePool,
    AdvanceTurn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoolEntry {
    pub card: Card,
    pub origin: Point,
    pub target: Point,
    pub hover: f32,
}

/// The upstream hand laid out for the human to pick from. Its cards belong to no hand
/// until they are delivered to the picker or restored upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPool {
    pub seat: usize,
    pub source: usize,
    pub entries: Vec<PoolEntry>,
    pub picked: Option<Card>,
    pub opened_ms: u64,
    pub selectable: bool,
    pub returning: bool,
}

impl DrawPool {
    fn base_position(&self, index: usize, now_ms: u64, spread_ms: u64) -> Option<Point> {
        let entry = self.entries.get(index)?;
        let t = progress(now_ms.saturating_sub(self.opened_ms), spread_ms);
        Some(entry.origin.lerp(entry.target, t))
    }

    pub fn position(&self, index: usize, now_ms: u64, spread_ms: u64) -> Option<Point> {
        let hover = self.entries.get(index)?.hover;
        self.base_position(index, now_ms, spread_ms)
            .map(|at| at.offset(0.0, hover))
    }

    pub fn in_flight(&self) -> usize {
        self.entries.len() + usize::from(self.picked.is_some())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCount {
    pub in_hands: usize,
    pub in_flight: usize,
    pub discarded: usize,
}

impl CardCount {
    pub fn total(&self) -> usize {
        self.in_hands + self.in_flight + self.discarded
    }
}

pub struct GameSession {
    pub config: TableConfig,
    pub layout: TableLayout,
    pub players: Vec<Player>,
    pub current_seat: usize,
    pub ranking: Ranking,
    pub phase: Phase,
    pub step: TurnStep,
    pub discard: Vec<Card>,
    pub message: String,
    pub events: EventBus,
    pool: Option<DrawPool>,
    scheduler: Scheduler<FollowUp>,
    pointer: Option<Point>,
    rng: Box<dyn RandomSource>,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("players", &self.players)
            .field("current_seat", &self.current_seat)
            .field("ranking", &self.ranking)
            .field("phase", &self.phase)
            .field("step", &self.step)
            .field("pool", &self.pool)
            .field("now_ms", &self.scheduler.now_ms())
            .finish_non_exhaustive()
    }
}

impl GameSession {
    pub fn draw_pool(&self) -> Option<&DrawPool> {
        self.pool.as_ref()
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    pub fn motion_count(&self) -> usize {
        self.scheduler.motion_count()
    }

    pub fn pending_follow_ups(&self) -> Vec<FollowUp> {
        self.scheduler.pending().copied().collect()
    }

    /// Time until the next scheduled continuation, if anything is in flight.
    pub fn time_to_next(&self) -> Option<u64> {
        self.scheduler.time_to_next()
    }

    pub fn human_seat(&self) -> Option<usize> {
        self.config.human_seat
    }

    pub fn player_name(&self, seat: usize) -> String {
        self.players
            .get(seat)
            .map(Player::name)
            .unwrap_or_else(|| format!("seat {seat}"))
    }

    pub fn is_awaiting_pick(&self) -> bool {
        self.phase == Phase::Playing
            && self.step == TurnStep::AwaitingDraw
            && self.pool.as_ref().is_some_and(|pool| pool.selectable)
    }

    /// Cards a seat still owns, counting its cards held in an open draw pool.
    pub fn holds_cards(&self, seat: usize) -> bool {
        let in_hand = self
            .players
            .get(seat)
            .is_some_and(|player| !player.hand.is_empty());
        let in_pool = self
            .pool
            .as_ref()
            .is_some_and(|pool| pool.source == seat && !pool.entries.is_empty());
        in_hand || in_pool
    }

    pub fn card_count(&self) -> CardCount {
        CardCount {
            in_hands: self.players.iter().map(|player| player.hand.len()).sum(),
            in_flight: self.pool.as_ref().map(DrawPool::in_flight).unwrap_or(0),
            discarded: self.discard.len(),
        }
    }

    /// Status text including the running finish note for the human seat.
    pub fn status_text(&self) -> String {
        if self.phase != Phase::Playing {
            return self.message.clone();
        }
        let Some(place) = self
            .config
            .human_seat
            .and_then(|seat| self.ranking.place_of(seat))
        else {
            return self.message.clone();
        };
        let note = format!("You have finished! Current place: {place}. Waiting for the others...");
        if self.message.is_empty() {
            note
        } else {
            format!("{}\n{note}", self.message)
        }
    }
}
