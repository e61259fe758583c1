use crate::canvas::unproject;
use anyhow::{Context, Result};
use jokerdraw_autoplay::describe_event;
use jokerdraw_core::{GameSession, Phase, RngState, TableConfig};
use ratatui::layout::Rect;
use std::collections::VecDeque;
use tracing::{debug, info};

const MAX_EVENT_LOG: usize = 200;
const FAST_FORWARD: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Rules,
    Table,
}

pub struct App {
    pub screen: Screen,
    pub config: TableConfig,
    /// Fixed by `--seed`; otherwise every new game draws a fresh seed.
    pub fixed_seed: Option<u64>,
    pub seed: u64,
    pub session: GameSession,
    pub event_log: VecDeque<String>,
    pub pool_cursor: usize,
    pub fast_forward: bool,
    pub table_area: Rect,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(config: TableConfig, fixed_seed: Option<u64>) -> Result<Self> {
        let seed = fixed_seed.unwrap_or_else(|| RngState::from_entropy().seed());
        let session = GameSession::with_seed(config.clone(), seed).context("create game")?;
        Ok(Self {
            screen: Screen::Title,
            config,
            fixed_seed,
            seed,
            session,
            event_log: VecDeque::new(),
            pool_cursor: 0,
            fast_forward: false,
            table_area: Rect::default(),
            should_quit: false,
        })
    }

    /// Deals a new game and shows the table.
    pub fn start_game(&mut self) -> Result<()> {
        self.seed = self
            .fixed_seed
            .unwrap_or_else(|| RngState::from_entropy().seed());
        self.session =
            GameSession::with_seed(self.config.clone(), self.seed).context("create game")?;
        self.event_log.clear();
        self.pool_cursor = 0;
        self.screen = Screen::Table;
        info!(seed = self.seed, "new game");
        self.push_event_line(format!("new game, seed {}", self.seed));
        self.flush_events();
        Ok(())
    }

    /// Leaving the table throws the current game away.
    pub fn return_to_title(&mut self) {
        if self.screen == Screen::Table {
            self.session.reset();
            self.session.events.drain().for_each(drop);
        }
        self.screen = Screen::Title;
    }

    pub fn show_rules(&mut self) {
        self.screen = Screen::Rules;
    }

    /// Advances the table by `elapsed_ms` of wall time.
    pub fn on_tick(&mut self, elapsed_ms: u64) {
        if self.screen != Screen::Table {
            return;
        }
        let dt = if self.fast_forward {
            elapsed_ms * FAST_FORWARD
        } else {
            elapsed_ms
        };
        self.session.update(dt);
        self.clamp_cursor();
        self.flush_events();
    }

    pub fn is_game_over(&self) -> bool {
        self.screen == Screen::Table && self.session.phase == Phase::Ended
    }

    pub fn pool_len(&self) -> usize {
        self.session
            .draw_pool()
            .filter(|_| self.session.is_awaiting_pick())
            .map(|pool| pool.entries.len())
            .unwrap_or(0)
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.pool_len();
        if len == 0 {
            return;
        }
        self.pool_cursor = if forward {
            (self.pool_cursor + 1) % len
        } else {
            (self.pool_cursor + len - 1) % len
        };
    }

    pub fn pick(&mut self, index: usize) {
        match self.session.pick_pool_card(index) {
            Ok(()) => self.pool_cursor = 0,
            Err(err) => debug!(%err, index, "pick ignored"),
        }
        self.flush_events();
    }

    pub fn pick_at_cursor(&mut self) {
        self.pick(self.pool_cursor);
    }

    pub fn on_pointer_move(&mut self, column: u16, row: u16) {
        if let Some(at) = unproject(self.table_area, &self.config.canvas, column, row) {
            self.session.on_pointer_move(at.x, at.y);
        }
    }

    pub fn on_pointer_click(&mut self, column: u16, row: u16) {
        if self.screen != Screen::Table {
            return;
        }
        let Some(at) = unproject(self.table_area, &self.config.canvas, column, row) else {
            return;
        };
        if self.session.on_pointer_click(at.x, at.y) {
            self.pool_cursor = 0;
            self.flush_events();
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.pool_len();
        if self.pool_cursor >= len {
            self.pool_cursor = len.saturating_sub(1);
        }
    }

    fn flush_events(&mut self) {
        let human = self.session.human_seat();
        let drained: Vec<_> = self.session.events.drain().collect();
        for event in drained {
            self.push_event_line(describe_event(&event, human));
        }
    }

    fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}
