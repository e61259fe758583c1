use super::*;
use crate::TableView;

const HOVER_EASE: f32 = 0.2;

impl GameSession {
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Some(Point::new(x, y));
    }

    /// Picks the pool card under the pointer. Returns false when the click did nothing,
    /// which includes every click outside `AwaitingDraw`.
    pub fn on_pointer_click(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Some(Point::new(x, y));
        match self.pool_card_at(x, y) {
            Some(index) => self.pick_pool_card(index).is_ok(),
            None => false,
        }
    }

    /// First pool card whose lifted rectangle contains the point.
    pub fn pool_card_at(&self, x: f32, y: f32) -> Option<usize> {
        if !self.is_awaiting_pick() {
            return None;
        }
        let pool = self.pool.as_ref()?;
        let now = self.scheduler.now_ms();
        let spread = self.config.timing.pool_spread_ms;
        (0..pool.entries.len()).find(|index| {
            pool.position(*index, now, spread)
                .is_some_and(|at| self.layout.hit(at, x, y))
        })
    }

    /// Eases every selectable pool card toward its hover height.
    pub(super) fn update_hover(&mut self) {
        let now = self.scheduler.now_ms();
        let spread = self.config.timing.pool_spread_ms;
        let lift = self.config.canvas.hover_lift;
        let pointer = self.pointer;
        let Some(pool) = self.pool.as_mut() else {
            return;
        };
        if !pool.selectable {
            return;
        }
        for index in 0..pool.entries.len() {
            let hovered = match (pointer, pool.base_position(index, now, spread)) {
                (Some(p), Some(at)) => self.layout.hit(at, p.x, p.y),
                _ => false,
            };
            let target = if hovered { -lift } else { 0.0 };
            let entry = &mut pool.entries[index];
            entry.hover += (target - entry.hover) * HOVER_EASE;
        }
    }

    /// Draws one frame: every hand, the open draw pool, then cards in flight.
    pub fn render(&self, view: &mut dyn TableView) {
        for player in &self.players {
            view.display_hand(
                &self.layout,
                player.seat,
                player.hand.cards(),
                player.is_human,
            );
        }
        if let Some(pool) = self.pool.as_ref().filter(|pool| !pool.returning) {
            let now = self.scheduler.now_ms();
            let spread = self.config.timing.pool_spread_ms;
            for (index, entry) in pool.entries.iter().enumerate() {
                let Some(at) = pool.position(index, now, spread) else {
                    continue;
                };
                if self.config.reveal_draw_pool {
                    view.display_card(&entry.card, at, true);
                } else {
                    view.display_card_back(at, 0.0);
                }
            }
        }
        for frame in self.scheduler.frames() {
            view.display_motion(&frame);
        }
        view.set_message(&self.status_text());
    }
}
