use crate::{AutoplayConfig, AutoplayError, PickPolicy};
use jokerdraw_core::{Event, GameSession, Phase, RngState, DECK_SIZE, SEAT_COUNT};
use tracing::debug;

const IDLE_TICK_MS: u64 = 16;
/// Keeps the pick stream apart from the table generator seeded with the same value.
const PICK_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
pub struct Simulator {
    pub session: GameSession,
    policy: PickPolicy,
    picker: RngState,
    tick_ms: u64,
    check_invariants: bool,
    tick: u32,
    seen_ranking: Vec<usize>,
}

impl Simulator {
    pub fn new(config: &AutoplayConfig) -> Result<Self, AutoplayError> {
        let session = GameSession::with_seed(config.table.clone(), config.seed)?;
        Ok(Self::from_session(session, config))
    }

    pub fn from_session(session: GameSession, config: &AutoplayConfig) -> Self {
        let seen_ranking = session.ranking.order().to_vec();
        Self {
            session,
            policy: config.policy,
            picker: RngState::from_seed(config.seed ^ PICK_SEED_SALT),
            tick_ms: config.tick_ms,
            check_invariants: config.check_invariants,
            tick: 0,
            seen_ranking,
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn is_finished(&self) -> bool {
        self.session.phase == Phase::Ended
    }

    /// Answers a pending pick, advances the clock by one tick and returns the events
    /// the tick produced.
    pub fn step(&mut self) -> Result<Vec<Event>, AutoplayError> {
        if self.session.is_awaiting_pick() {
            let len = self
                .session
                .draw_pool()
                .map(|pool| pool.entries.len())
                .unwrap_or(0);
            let index = self.policy.choose(len, &mut self.picker);
            debug!(index, len, policy = self.policy.label(), "autoplay pick");
            self.session.pick_pool_card(index)?;
        }
        let dt = if self.tick_ms == 0 {
            self.session
                .time_to_next()
                .unwrap_or(IDLE_TICK_MS)
                .max(1)
        } else {
            self.tick_ms
        };
        self.session.update(dt);
        self.tick += 1;
        if self.check_invariants {
            self.verify()?;
        }
        Ok(self.session.events.drain().collect())
    }

    /// Card conservation, a stable finishing order, and a single holder at the end.
    pub fn verify(&mut self) -> Result<(), AutoplayError> {
        let count = self.session.card_count();
        if count.total() != DECK_SIZE {
            return Err(self.violation(format!(
                "{} cards on the table ({count:?}), expected {DECK_SIZE}",
                count.total()
            )));
        }
        let ranking = self.session.ranking.order().to_vec();
        if !ranking.starts_with(&self.seen_ranking) {
            return Err(self.violation(format!(
                "ranking {ranking:?} rewrote earlier order {:?}",
                self.seen_ranking
            )));
        }
        let mut sorted = ranking.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != ranking.len() {
            return Err(self.violation(format!("ranking {ranking:?} repeats a seat")));
        }
        let holders: Vec<usize> = (0..SEAT_COUNT)
            .filter(|seat| self.session.holds_cards(*seat))
            .collect();
        let ended = self.is_finished();
        for seat in &ranking {
            let is_loser = ended && ranking.last() == Some(seat);
            if !is_loser && holders.contains(seat) {
                return Err(self.violation(format!("ranked seat {seat} still holds cards")));
            }
        }
        if ended && (holders.len() != 1 || ranking.last() != holders.first()) {
            return Err(self.violation(format!(
                "game ended with holders {holders:?} and ranking {ranking:?}"
            )));
        }
        self.seen_ranking = ranking;
        Ok(())
    }

    fn violation(&self, detail: String) -> AutoplayError {
        AutoplayError::InvariantViolated {
            tick: self.tick,
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokerdraw_core::{Card, Rank, ScriptedRng, Suit, TableConfig};

    fn config() -> AutoplayConfig {
        AutoplayConfig {
            policy: PickPolicy::First,
            ..AutoplayConfig::default()
        }
    }

    #[test]
    fn step_answers_the_pool_for_the_human() {
        let session = GameSession::from_hands(
            TableConfig::default(),
            Box::new(ScriptedRng::new([])),
            [
                vec![Card::standard(Suit::Spades, Rank::Two)],
                vec![Card::standard(Suit::Spades, Rank::Four)],
                vec![Card::standard(Suit::Spades, Rank::Six)],
                vec![Card::standard(Suit::Hearts, Rank::Two), Card::joker()],
            ],
        )
        .expect("session");
        let config = AutoplayConfig {
            check_invariants: false,
            ..config()
        };
        let mut sim = Simulator::from_session(session, &config);
        let events = sim.step().expect("step");
        assert!(events.contains(&Event::PoolCardPicked { seat: 0, index: 0 }));
        assert!(!sim.session.is_awaiting_pick());
    }

    #[test]
    fn verify_rejects_a_stray_card() {
        let mut session = GameSession::with_seed(TableConfig::watch(), 5).expect("session");
        session.discard.push(Card::joker());
        let mut sim = Simulator::from_session(session, &config());
        assert!(matches!(
            sim.verify(),
            Err(AutoplayError::InvariantViolated { tick: 0, .. })
        ));
    }
}
