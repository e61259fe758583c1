use jokerdraw_core::{Canvas, Card, GameSession, Point, TableView};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

/// Maps a canvas point to the terminal cell that covers it.
pub fn project(area: Rect, canvas: &Canvas, at: Point) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let fx = at.x / canvas.width;
    let fy = at.y / canvas.height;
    if !(0.0..1.0).contains(&fx) || !(0.0..1.0).contains(&fy) {
        return None;
    }
    let column = area.x + (fx * f32::from(area.width)) as u16;
    let row = area.y + (fy * f32::from(area.height)) as u16;
    Some((column, row))
}

/// Canvas point at the centre of a terminal cell, if the cell lies inside `area`.
pub fn unproject(area: Rect, canvas: &Canvas, column: u16, row: u16) -> Option<Point> {
    if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
        return None;
    }
    let x = (f32::from(column - area.x) + 0.5) / f32::from(area.width) * canvas.width;
    let y = (f32::from(row - area.y) + 0.5) / f32::from(area.height) * canvas.height;
    Some(Point::new(x, y))
}

pub fn card_face(card: &Card) -> (String, Style) {
    let base = Style::default().bg(Color::White).add_modifier(Modifier::BOLD);
    if card.is_joker() {
        return ("JK".to_string(), base.fg(Color::Magenta));
    }
    let color = if card.suit.is_red() {
        Color::Red
    } else {
        Color::Black
    };
    let text = format!("{}{}", card.rank.label(), card.suit.symbol());
    (text, base.fg(color))
}

/// `TableView` over a ratatui buffer: every card becomes a short label at its
/// projected cell.
pub struct TerminalCanvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    canvas: Canvas,
    message: String,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, canvas: &Canvas) -> Self {
        Self {
            buf,
            area,
            canvas: canvas.clone(),
            message: String::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn put(&mut self, at: Point, text: &str, style: Style) {
        let Some((column, row)) = project(self.area, &self.canvas, at) else {
            return;
        };
        let room = usize::from(self.area.right().saturating_sub(column));
        self.buf.set_stringn(column, row, text, room, style);
    }
}

impl TableView for TerminalCanvas<'_> {
    fn display_card(&mut self, card: &Card, at: Point, face_up: bool) {
        if !face_up {
            self.display_card_back(at, 0.0);
            return;
        }
        let (text, style) = card_face(card);
        self.put(at, &text, style);
    }

    fn display_card_back(&mut self, at: Point, rotation: f32) {
        let text = if rotation.abs() > 45.0 { "▮" } else { "▒▒" };
        self.put(at, text, Style::default().fg(Color::Blue));
    }

    fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
    }
}

/// Draws the whole table into `area` and returns the status text the session reported.
/// `cursor` marks the pool card a keyboard pick would take.
pub fn render_table(
    session: &GameSession,
    cursor: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) -> String {
    let canvas = session.config.canvas.clone();
    let message = {
        let mut view = TerminalCanvas::new(buf, area, &canvas);
        session.render(&mut view);
        view.message().to_string()
    };
    let Some(cursor) = cursor.filter(|_| session.is_awaiting_pick()) else {
        return message;
    };
    let spread = session.config.timing.pool_spread_ms;
    let at = session
        .draw_pool()
        .and_then(|pool| pool.position(cursor, session.now_ms(), spread));
    if let Some((column, row)) = at.and_then(|at| project(area, &canvas, at)) {
        let width = 3.min(area.right().saturating_sub(column));
        buf.set_style(
            Rect::new(column, row, width, 1),
            Style::default().add_modifier(Modifier::REVERSED),
        );
    }
    message
}
