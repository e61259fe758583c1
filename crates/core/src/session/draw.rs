use super::*;
use crate::{Event, Motion};
use tracing::{debug, warn};

impl GameSession {
    pub(super) fn start_draw(&mut self, seat: usize, source: usize) {
        self.step = TurnStep::AwaitingDraw;
        self.events.push(Event::TurnStarted { seat, source });
        debug!(seat, source, "turn started");
        if self.players[seat].is_human {
            self.open_pool(seat, source);
        } else {
            self.message = format!("{} is thinking...", self.player_name(seat));
            self.scheduler.delay(
                self.config.timing.think_ms,
                FollowUp::ComputerDraw { seat, source },
            );
        }
    }

    /// Moves the whole source hand into a draw pool; the cards slide from their hand
    /// slots to the staging row over `pool_spread_ms`.
    fn open_pool(&mut self, seat: usize, source: usize) {
        let cards = self.players[source].hand.take_all();
        let len = cards.len();
        let entries = cards
            .into_iter()
            .enumerate()
            .map(|(index, card)| PoolEntry {
                card,
                origin: self.layout.card_slot(source, index, len),
                target: self.layout.pool_slot(index, len),
                hover: 0.0,
            })
            .collect();
        self.pool = Some(DrawPool {
            seat,
            source,
            entries,
            picked: None,
            opened_ms: self.scheduler.now_ms(),
            selectable: true,
            returning: false,
        });
        self.events.push(Event::DrawPoolOpened { source, cards: len });
        self.message = format!("Pick a card from {}", self.player_name(source));
    }

    /// Takes pool card `index` for the human. The card flies to the human's hand and
    /// is appended when it lands.
    pub fn pick_pool_card(&mut self, index: usize) -> Result<(), SessionError> {
        if !self.is_awaiting_pick() {
            return Err(SessionError::NotAwaitingPick);
        }
        let now = self.scheduler.now_ms();
        let spread = self.config.timing.pool_spread_ms;
        let pool = self.pool.as_mut().ok_or(SessionError::NotAwaitingPick)?;
        let from = pool
            .position(index, now, spread)
            .ok_or(SessionError::InvalidPoolIndex(index))?;
        let entry = pool.entries.remove(index);
        pool.selectable = false;
        pool.picked = Some(entry.card);
        let seat = pool.seat;
        let to = self
            .layout
            .arrival_slot(seat, self.players[seat].hand.len());
        self.step = TurnStep::DrawAnimating;
        self.events.push(Event::PoolCardPicked { seat, index });
        debug!(seat, index, "pool card picked");
        self.scheduler.animate(
            vec![Motion {
                card: entry.card,
                face_up: true,
                from,
                to,
            }],
            self.config.timing.draw_ms,
            Some(FollowUp::AppendToHand {
                seat,
                origin: DrawOrigin::Pool,
            }),
        );
        Ok(())
    }

    pub(super) fn computer_draw(&mut self, seat: usize, source: usize) {
        let len = self.players[source].hand.len();
        if len == 0 {
            warn!(seat, source, "source hand emptied before the draw");
            self.end_turn(seat);
            return;
        }
        let index = self.rng.pick_index(len);
        let Some(card) = self.players[source].hand.get(index).copied() else {
            warn!(seat, source, index, len, "random source picked out of range");
            self.end_turn(seat);
            return;
        };
        let from = self.layout.card_slot(source, index, len);
        let to = self
            .layout
            .arrival_slot(seat, self.players[seat].hand.len());
        let face_up = self.players[seat].is_human || self.players[source].is_human;
        self.step = TurnStep::DrawAnimating;
        self.scheduler.animate(
            vec![Motion {
                card,
                face_up,
                from,
                to,
            }],
            self.config.timing.draw_ms,
            Some(FollowUp::AppendToHand {
                seat,
                origin: DrawOrigin::Hand { source, index },
            }),
        );
    }

    /// Ownership changes here, after the card has landed.
    pub(super) fn append_drawn_card(&mut self, seat: usize, origin: DrawOrigin) {
        let drawn = match origin {
            DrawOrigin::Hand { source, index } => self.players[source]
                .hand
                .remove(index)
                .map(|card| (source, card)),
            DrawOrigin::Pool => self
                .pool
                .as_mut()
                .and_then(|pool| pool.picked.take().map(|card| (pool.source, card))),
        };
        let Some((source, card)) = drawn else {
            warn!(seat, ?origin, "drawn card vanished before landing");
            self.finish_resolution(seat);
            return;
        };
        self.players[seat].hand.push(card);
        self.events.push(Event::CardDrawn { seat, source, card });
        self.message = if self.players[seat].is_human {
            format!("You drew {card} from {}", self.player_name(source))
        } else {
            format!(
                "{} drew a card from {}",
                self.player_name(seat),
                self.player_name(source)
            )
        };
        self.record_finishers();
        self.step = TurnStep::PairResolving;
        self.scheduler.delay(
            self.config.timing.settle_ms,
            FollowUp::ResolvePairs { seat },
        );
    }

    /// Sends the unpicked pool cards back to their owner, keeping their order.
    pub(super) fn return_pool(&mut self) {
        let now = self.scheduler.now_ms();
        let spread = self.config.timing.pool_spread_ms;
        let reveal = self.config.reveal_draw_pool;
        let Some(pool) = self.pool.as_mut() else {
            return;
        };
        if pool.entries.is_empty() {
            self.restore_pool();
            return;
        }
        let source = pool.source;
        let len = pool.entries.len();
        let mut motions = Vec::with_capacity(len);
        for (index, entry) in pool.entries.iter().enumerate() {
            let from = pool.position(index, now, spread).unwrap_or(entry.target);
            motions.push(Motion {
                card: entry.card,
                face_up: reveal,
                from,
                to: self.layout.card_slot(source, index, len),
            });
        }
        pool.returning = true;
        self.scheduler.animate(
            motions,
            self.config.timing.pool_return_ms,
            Some(FollowUp::RestorePool),
        );
    }

    pub(super) fn restore_pool(&mut self) {
        let Some(pool) = self.pool.take() else {
            warn!("restore requested without a draw pool");
            return;
        };
        let count = pool.entries.len();
        self.players[pool.source]
            .hand
            .extend(pool.entries.into_iter().map(|entry| entry.card));
        if let Some(card) = pool.picked {
            warn!(seat = pool.seat, %card, "picked card was never delivered");
            self.players[pool.seat].hand.push(card);
        }
        self.events.push(Event::PoolReturned {
            seat: pool.source,
            cards: count,
        });
        self.end_turn(pool.seat);
    }
}
