use crate::app::{App, Screen};
use crate::canvas::render_table;
use jokerdraw_core::{Phase, SEAT_COUNT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const RULES: [&str; 7] = [
    "Four players, one 53-card deck: 52 standard cards and a single joker.",
    "The whole deck is dealt round the table; each player throws away every pair of equal rank.",
    "On your turn you draw one card from the player before you (to your right).",
    "Your upstream's hand is spread face up; click a card or press 1-9 / arrows + Enter.",
    "Any new pair goes straight to the discard pile.",
    "Empty your hand to finish; places are given in the order players run out.",
    "The joker never pairs. Whoever is left holding it loses.",
];

struct TableRegions {
    header: Rect,
    table: Rect,
    status: Rect,
    events: Rect,
}

fn table_regions(area: Rect) -> TableRegions {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(8),
        ])
        .split(area);
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(root[1]);
    TableRegions {
        header: root[0],
        table: middle[0],
        status: middle[1],
        events: root[2],
    }
}

/// Cells the card table occupies inside its border, for mapping pointer input.
pub fn table_area(area: Rect) -> Rect {
    Block::default()
        .borders(Borders::ALL)
        .inner(table_regions(area).table)
}

pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Title => draw_title(frame, app),
        Screen::Rules => draw_rules(frame),
        Screen::Table => draw_table_screen(frame, app),
    }
}

fn draw_title(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, frame.area());
    let seed = match app.fixed_seed {
        Some(seed) => format!("seed {seed}"),
        None => "random seed".to_string(),
    };
    let mode = match app.config.human_seat {
        Some(seat) => format!("you play seat {seat}"),
        None => "watching four computer players".to_string(),
    };
    let lines = vec![
        Line::from(""),
        Line::from("JOKER DRAW".bold().fg(Color::Magenta)),
        Line::from("pair off your cards, dodge the joker"),
        Line::from(""),
        Line::from(format!("{mode}, {seed}")),
        Line::from(""),
        Line::from("Enter  start".bold()),
        Line::from("r      rules"),
        Line::from("q      quit"),
    ];
    let block = Block::default().borders(Borders::ALL).title("Joker Draw");
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_rules(frame: &mut Frame) {
    let area = centered_rect(80, 70, frame.area());
    let mut lines: Vec<Line<'_>> = RULES
        .iter()
        .enumerate()
        .map(|(index, rule)| Line::from(format!("{}. {rule}", index + 1)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from("Esc / Enter  back to title".bold()));
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Rules")
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_table_screen(frame: &mut Frame, app: &App) {
    let regions = table_regions(frame.area());
    draw_header(frame, regions.header, app);

    let block = Block::default().borders(Borders::ALL).title("Table");
    let inner = block.inner(regions.table);
    frame.render_widget(block, regions.table);
    let cursor = (app.pool_len() > 0).then_some(app.pool_cursor);
    let message = render_table(&app.session, cursor, inner, frame.buffer_mut());

    draw_status(frame, regions.status, app, &message);
    draw_events(frame, regions.events, app);
    if app.is_game_over() {
        draw_end_popup(frame, &message);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let turn = match session.phase {
        Phase::Ended => "game over".to_string(),
        _ => format!("turn: {}", session.player_name(session.current_seat)),
    };
    let speed = if app.fast_forward { "x4" } else { "x1" };
    let line = format!(
        "seed {} | {turn} | discarded {} | speed {speed} | ←/→ Enter or click to pick, f speed, Esc title",
        app.seed,
        session.discard.len()
    );
    let block = Block::default().borders(Borders::ALL).title("Joker Draw");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, message: &str) {
    let session = &app.session;
    let mut lines: Vec<Line<'_>> = message.lines().map(|line| Line::from(line.to_string())).collect();
    lines.push(Line::from(""));
    for seat in 0..SEAT_COUNT {
        let name = session.player_name(seat);
        let cards = session.players.get(seat).map(|p| p.hand.len()).unwrap_or(0);
        let place = session
            .ranking
            .place_of(seat)
            .map(|place| format!(" (place {place})"))
            .unwrap_or_default();
        let marker = if seat == session.current_seat && session.phase == Phase::Playing {
            ">"
        } else {
            " "
        };
        lines.push(Line::from(format!("{marker} {name:<6} {cards:>2} cards{place}")));
    }
    let block = Block::default().borders(Borders::ALL).title("Status");
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = app.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.clone()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Events");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_end_popup(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 40, frame.area());
    frame.render_widget(Clear, area);
    let mut lines: Vec<Line<'_>> = message
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from("Enter title | n new game | q quit".bold()));
    let block = Block::default()
        .title("Game Over")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
