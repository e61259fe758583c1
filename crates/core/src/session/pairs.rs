use super::*;
use crate::{remove_pair, resolve_one_pair, Event, Motion};
use tracing::{debug, warn};

impl GameSession {
    /// Flies the next pair in the seat's hand to the table centre. The pair leaves the
    /// hand only once both cards have landed; then the hand is scanned again.
    pub(super) fn resolve_pairs(&mut self, seat: usize) {
        self.step = TurnStep::PairResolving;
        let Some(pair) = resolve_one_pair(&self.players[seat]) else {
            self.finish_resolution(seat);
            return;
        };
        let hand = &self.players[seat].hand;
        let len = hand.len();
        let (Some(first), Some(second)) = (hand.get(pair.first).copied(), hand.get(pair.second).copied())
        else {
            warn!(seat, ?pair, "pair indices out of range");
            self.finish_resolution(seat);
            return;
        };
        let (left, right) = self.layout.pair_targets();
        let motions = vec![
            Motion {
                card: first,
                face_up: true,
                from: self.layout.card_slot(seat, pair.first, len),
                to: left,
            },
            Motion {
                card: second,
                face_up: true,
                from: self.layout.card_slot(seat, pair.second, len),
                to: right,
            },
        ];
        debug!(seat, ?pair, "pair found");
        self.scheduler.animate(
            motions,
            self.config.timing.pair_ms,
            Some(FollowUp::DiscardPair { seat, pair }),
        );
    }

    pub(super) fn discard_pair(&mut self, seat: usize, pair: PairMatch) {
        let Some((first, second)) = remove_pair(&mut self.players[seat].hand, pair) else {
            warn!(seat, ?pair, "stale pair, rescanning");
            self.resolve_pairs(seat);
            return;
        };
        self.discard.push(first);
        self.discard.push(second);
        self.events.push(Event::PairDiscarded {
            seat,
            rank: first.rank,
        });
        self.message = format!(
            "{} discarded a pair of {}",
            self.player_name(seat),
            first.rank.label()
        );
        self.record_finishers();
        self.scheduler.delay(
            self.config.timing.pair_pause_ms,
            FollowUp::ResolvePairs { seat },
        );
    }

    /// No pairs left: hand back the rest of an open draw pool, or close the turn.
    pub(super) fn finish_resolution(&mut self, seat: usize) {
        let pool_pending = self
            .pool
            .as_ref()
            .is_some_and(|pool| pool.seat == seat && !pool.returning);
        if pool_pending {
            self.return_pool();
        } else {
            self.end_turn(seat);
        }
    }
}
