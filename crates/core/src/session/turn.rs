use super::*;
use crate::{next_seat, upstream, Event, SkipReason, SEAT_COUNT};
use tracing::{debug, info, warn};

impl GameSession {
    /// Advances virtual time and applies every continuation that came due.
    pub fn update(&mut self, dt_ms: u64) {
        self.update_hover();
        let released = self.scheduler.advance(dt_ms);
        for follow_up in released {
            if self.phase != Phase::Playing {
                break;
            }
            self.apply(follow_up);
        }
    }

    fn apply(&mut self, follow_up: FollowUp) {
        debug!(?follow_up, now_ms = self.scheduler.now_ms(), "follow-up");
        match follow_up {
            FollowUp::ComputerDraw { seat, source } => self.computer_draw(seat, source),
            FollowUp::AppendToHand { seat, origin } => self.append_drawn_card(seat, origin),
            FollowUp::ResolvePairs { seat } => self.resolve_pairs(seat),
            FollowUp::DiscardPair { seat, pair } => self.discard_pair(seat, pair),
            FollowUp::RestorePool => self.restore_pool(),
            FollowUp::AdvanceTurn => self.advance_turn(),
        }
    }

    pub(super) fn begin_turn(&mut self) {
        self.record_finishers();
        if self.check_end() {
            return;
        }
        for _ in 0..SEAT_COUNT {
            let seat = self.current_seat;
            self.step = TurnStep::TurnStart;
            if self.players[seat].hand.is_empty() {
                self.skip_turn(seat, SkipReason::HandEmpty);
                continue;
            }
            match self.draw_source(seat) {
                Some(source) => {
                    self.start_draw(seat, source);
                    return;
                }
                None => self.skip_turn(seat, SkipReason::UpstreamEmpty),
            }
        }
        warn!(ranking = ?self.ranking.order(), "no seat is able to draw");
    }

    fn skip_turn(&mut self, seat: usize, reason: SkipReason) {
        debug!(seat, ?reason, "turn skipped");
        self.events.push(Event::TurnSkipped { seat, reason });
        self.current_seat = next_seat(seat);
    }

    fn advance_turn(&mut self) {
        self.current_seat = next_seat(self.current_seat);
        self.begin_turn();
    }

    pub(super) fn end_turn(&mut self, seat: usize) {
        debug!(seat, "turn ended");
        self.step = TurnStep::TurnEnd;
        self.record_finishers();
        if self.check_end() {
            return;
        }
        self.scheduler
            .delay(self.config.timing.turn_gap_ms, FollowUp::AdvanceTurn);
    }

    /// The fixed upstream seat, unless it is out. When every seat still holding cards
    /// faces an empty upstream the fixed relation can never progress, so the drawer
    /// takes from the nearest preceding seat that still holds cards.
    pub fn draw_source(&self, seat: usize) -> Option<usize> {
        let fixed = upstream(seat);
        if self.holds_cards(fixed) {
            return Some(fixed);
        }
        if !self.is_stalemate() {
            return None;
        }
        let mut candidate = upstream(fixed);
        while candidate != seat {
            if self.holds_cards(candidate) {
                return Some(candidate);
            }
            candidate = upstream(candidate);
        }
        None
    }

    fn is_stalemate(&self) -> bool {
        (0..SEAT_COUNT)
            .filter(|seat| self.holds_cards(*seat))
            .all(|seat| !self.holds_cards(upstream(seat)))
    }

    /// Ranks every seat that has run out of cards, in seat order.
    pub(super) fn record_finishers(&mut self) {
        for seat in 0..self.players.len() {
            if self.holds_cards(seat) {
                continue;
            }
            if let Some(place) = self.ranking.record(seat) {
                info!(seat, place, "player finished");
                self.events.push(Event::PlayerFinished { seat, place });
            }
        }
    }

    /// Ends the game once a single seat holds cards. Returns true when the game is over.
    pub(super) fn check_end(&mut self) -> bool {
        if self.phase == Phase::Ended {
            return true;
        }
        let holders: Vec<usize> = (0..self.players.len())
            .filter(|seat| self.holds_cards(*seat))
            .collect();
        match holders.as_slice() {
            [loser] => {
                self.finish_game(*loser);
                true
            }
            [] => {
                warn!("no seat holds cards");
                self.phase = Phase::Ended;
                self.step = TurnStep::TurnEnd;
                true
            }
            _ => false,
        }
    }

    fn finish_game(&mut self, loser: usize) {
        self.ranking.record(loser);
        self.phase = Phase::Ended;
        self.step = TurnStep::TurnEnd;
        self.message = self.final_message(loser);
        info!(loser, ranking = ?self.ranking.order(), "game ended");
        self.events.push(Event::GameEnded {
            loser,
            ranking: self.ranking.order().to_vec(),
        });
    }

    fn final_message(&self, loser: usize) -> String {
        let Some(human) = self.config.human_seat else {
            return format!("Game over!\n{} is left holding the joker", self.player_name(loser));
        };
        if human == loser {
            return "Game over!\nYou came last...\nReturn to the title to play again".to_string();
        }
        match self.ranking.place_of(human) {
            Some(1) => "Congratulations, you won!\nYou finished first!\nReturn to the title to play again"
                .to_string(),
            Some(place) => format!(
                "Game over!\nYou finished in place {place}\n{} came last\nReturn to the title to play again",
                self.player_name(loser)
            ),
            None => format!("Game over!\n{} came last", self.player_name(loser)),
        }
    }
}
