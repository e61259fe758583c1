use crate::{POOL_MARGIN, SEAT_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("seat {0} is out of range")]
    SeatOutOfRange(usize),
    #[error("canvas {width}x{height} cannot hold a {card_width}x{card_height} card")]
    CanvasTooSmall {
        width: f32,
        height: f32,
        card_width: f32,
        card_height: f32,
    },
    #[error("card size must be positive")]
    InvalidCardSize,
    #[error("canvas dimensions must be finite numbers")]
    NonFiniteCanvas,
}

/// Durations in milliseconds of virtual time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Timing {
    pub draw_ms: u64,
    pub pair_ms: u64,
    pub pool_spread_ms: u64,
    pub pool_return_ms: u64,
    pub think_ms: u64,
    pub settle_ms: u64,
    pub pair_pause_ms: u64,
    pub turn_gap_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            draw_ms: 1000,
            pair_ms: 800,
            pool_spread_ms: 1000,
            pool_return_ms: 1000,
            think_ms: 1000,
            settle_ms: 500,
            pair_pause_ms: 900,
            turn_gap_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    pub card_width: f32,
    pub card_height: f32,
    pub hover_lift: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            card_width: 70.0,
            card_height: 100.0,
            hover_lift: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    /// `None` seats four computer players.
    pub human_seat: Option<usize>,
    pub first_seat: usize,
    pub reveal_draw_pool: bool,
    pub timing: Timing,
    pub canvas: Canvas,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            human_seat: Some(0),
            first_seat: 0,
            reveal_draw_pool: true,
            timing: Timing::default(),
            canvas: Canvas::default(),
        }
    }
}

impl TableConfig {
    pub fn watch() -> Self {
        Self {
            human_seat: None,
            ..Self::default()
        }
    }

    pub fn is_human(&self, seat: usize) -> bool {
        self.human_seat == Some(seat)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(seat) = self.human_seat {
            if seat >= SEAT_COUNT {
                return Err(ConfigError::SeatOutOfRange(seat));
            }
        }
        if self.first_seat >= SEAT_COUNT {
            return Err(ConfigError::SeatOutOfRange(self.first_seat));
        }
        let canvas = &self.canvas;
        let dims = [canvas.width, canvas.height, canvas.card_width, canvas.card_height];
        if dims.iter().any(|dim| !dim.is_finite()) {
            return Err(ConfigError::NonFiniteCanvas);
        }
        if canvas.card_width <= 0.0 || canvas.card_height <= 0.0 {
            return Err(ConfigError::InvalidCardSize);
        }
        // The pool row needs at least one card of slack between its margins.
        let min_width = canvas.card_width * 2.0 + POOL_MARGIN * 2.0;
        if canvas.width < min_width || canvas.height < canvas.card_height * 2.0 {
            return Err(ConfigError::CanvasTooSmall {
                width: canvas.width,
                height: canvas.height,
                card_width: canvas.card_width,
                card_height: canvas.card_height,
            });
        }
        Ok(())
    }
}
