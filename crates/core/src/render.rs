use crate::{Card, MotionFrame, Point, TableLayout};

/// Drawing surface supplied by a front end. Only the primitives are required;
/// the per-seat and per-motion hooks lay cards out through them by default.
pub trait TableView {
    fn display_card(&mut self, card: &Card, at: Point, face_up: bool);

    fn display_card_back(&mut self, at: Point, rotation: f32);

    fn set_message(&mut self, text: &str);

    /// Called once per frame for every seat.
    fn display_hand(&mut self, layout: &TableLayout, seat: usize, cards: &[Card], face_up: bool) {
        let rotation = layout.seat_rotation(seat);
        for (index, card) in cards.iter().enumerate() {
            let at = layout.card_slot(seat, index, cards.len());
            if face_up {
                self.display_card(card, at, true);
            } else {
                self.display_card_back(at, rotation);
            }
        }
    }

    fn display_motion(&mut self, frame: &MotionFrame) {
        if frame.face_up {
            self.display_card(&frame.card, frame.at, true);
        } else {
            self.display_card_back(frame.at, frame.rotation.to_degrees());
        }
    }
}
