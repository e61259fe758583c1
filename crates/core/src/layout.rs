use crate::{Canvas, Point};

const HAND_STEP: f32 = 30.0;
const POOL_STEP: f32 = 80.0;
pub const POOL_MARGIN: f32 = 20.0;
const PAIR_SPREAD: f32 = 40.0;

/// Canvas geometry. Seat 0 sits at the bottom, 1 on the left, 2 at the top, 3 on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    canvas: Canvas,
}

impl TableLayout {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn card_size(&self) -> (f32, f32) {
        (self.canvas.card_width, self.canvas.card_height)
    }

    /// Rotation in degrees of face-down cards drawn at a seat.
    pub fn seat_rotation(&self, seat: usize) -> f32 {
        match seat {
            1 => 90.0,
            3 => -90.0,
            _ => 0.0,
        }
    }

    /// Top-left corner of card `index` in a hand of `len` cards.
    pub fn card_slot(&self, seat: usize, index: usize, len: usize) -> Point {
        let w = self.canvas.width;
        let h = self.canvas.height;
        let index = index as f32;
        let len = len as f32;
        match seat {
            0 => Point::new(w / 2.0 - len * HAND_STEP + index * HAND_STEP, h - 150.0),
            1 => Point::new(50.0, h / 2.0 - len * HAND_STEP / 2.0 + index * HAND_STEP),
            2 => Point::new(w / 2.0 - len * HAND_STEP / 2.0 + index * HAND_STEP, 50.0),
            _ => Point::new(
                w - 120.0,
                h / 2.0 - len * HAND_STEP / 2.0 + index * HAND_STEP,
            ),
        }
    }

    /// Where a card lands when appended to a hand that currently holds `len` cards.
    pub fn arrival_slot(&self, seat: usize, len: usize) -> Point {
        self.card_slot(seat, len, len + 1)
    }

    /// Staging row for the draw pool. Spacing shrinks so `len` cards fit the canvas.
    pub fn pool_slot(&self, index: usize, len: usize) -> Point {
        let w = self.canvas.width;
        let gaps = len.saturating_sub(1) as f32;
        let room = (w - self.canvas.card_width - POOL_MARGIN * 2.0).max(0.0);
        let step = if gaps > 0.0 {
            POOL_STEP.min(room / gaps)
        } else {
            POOL_STEP
        };
        let start = w / 2.0 - self.canvas.card_width / 2.0 - gaps * step / 2.0;
        Point::new(start + index as f32 * step, self.canvas.height - 250.0)
    }

    /// The two landing spots at the table centre for a discarded pair.
    pub fn pair_targets(&self) -> (Point, Point) {
        let centre_x = self.canvas.width / 2.0;
        let centre_y = self.canvas.height / 2.0;
        (
            Point::new(centre_x - PAIR_SPREAD - self.canvas.card_width / 2.0, centre_y),
            Point::new(centre_x + PAIR_SPREAD - self.canvas.card_width / 2.0, centre_y),
        )
    }

    pub fn hit(&self, top_left: Point, x: f32, y: f32) -> bool {
        x >= top_left.x
            && x <= top_left.x + self.canvas.card_width
            && y >= top_left.y
            && y <= top_left.y + self.canvas.card_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_row_fits_the_canvas() {
        let layout = TableLayout::new(Canvas::default());
        for len in 1..=14 {
            let first = layout.pool_slot(0, len);
            let last = layout.pool_slot(len - 1, len);
            assert!(first.x >= 0.0, "len {len}");
            assert!(last.x + 70.0 <= 800.0, "len {len}");
        }
    }

    #[test]
    fn pool_cards_do_not_overlap_for_small_pools() {
        let layout = TableLayout::new(Canvas::default());
        let a = layout.pool_slot(0, 3);
        let b = layout.pool_slot(1, 3);
        assert_eq!(b.x - a.x, 80.0);
    }

    #[test]
    fn narrow_canvas_never_lays_the_pool_out_backwards() {
        let canvas = Canvas {
            width: 10.0,
            card_width: 40.0,
            ..Canvas::default()
        };
        let layout = TableLayout::new(canvas);
        for index in 1..5 {
            assert!(layout.pool_slot(index, 5).x >= layout.pool_slot(index - 1, 5).x);
        }
    }

    #[test]
    fn arrival_slot_is_next_hand_position() {
        let layout = TableLayout::new(Canvas::default());
        assert_eq!(layout.arrival_slot(0, 4), layout.card_slot(0, 4, 5));
    }

    #[test]
    fn hit_test_covers_card_rectangle() {
        let layout = TableLayout::new(Canvas::default());
        let corner = Point::new(100.0, 100.0);
        assert!(layout.hit(corner, 100.0, 100.0));
        assert!(layout.hit(corner, 170.0, 200.0));
        assert!(!layout.hit(corner, 171.0, 150.0));
    }
}
