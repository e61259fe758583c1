use crate::{AutoplayResult, RunStatus};
use jokerdraw_core::{seat_name, SEAT_COUNT};
use serde::{Deserialize, Serialize};

/// Finishing places across many seeded games.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchReport {
    pub first_seed: u64,
    pub human_seat: Option<usize>,
    pub games: u32,
    pub unfinished: u32,
    /// `places[seat][place - 1]` counts how often `seat` finished in `place`.
    pub places: [[u32; SEAT_COUNT]; SEAT_COUNT],
    pub total_virtual_ms: u64,
    pub total_draws: u64,
}

impl BatchReport {
    pub fn new(first_seed: u64, human_seat: Option<usize>) -> Self {
        Self {
            first_seed,
            human_seat,
            games: 0,
            unfinished: 0,
            places: [[0; SEAT_COUNT]; SEAT_COUNT],
            total_virtual_ms: 0,
            total_draws: 0,
        }
    }

    pub fn record(&mut self, result: &AutoplayResult) {
        self.games += 1;
        self.total_virtual_ms += result.summary.virtual_ms;
        self.total_draws += u64::from(result.summary.draws);
        if result.status != RunStatus::Finished {
            self.unfinished += 1;
            return;
        }
        for (index, seat) in result.ranking.iter().enumerate() {
            if let Some(row) = self.places.get_mut(*seat) {
                if let Some(slot) = row.get_mut(index) {
                    *slot += 1;
                }
            }
        }
    }

    pub fn losses(&self, seat: usize) -> u32 {
        self.places
            .get(seat)
            .map(|row| row[SEAT_COUNT - 1])
            .unwrap_or(0)
    }

    pub fn mean_virtual_ms(&self) -> u64 {
        if self.games == 0 {
            0
        } else {
            self.total_virtual_ms / u64::from(self.games)
        }
    }

    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!(
                "games: {} (seeds {}..{}) unfinished: {}",
                self.games,
                self.first_seed,
                self.first_seed.wrapping_add(u64::from(self.games)),
                self.unfinished
            ),
            format!(
                "mean game length: {} ms virtual, {} draws per game",
                self.mean_virtual_ms(),
                if self.games == 0 {
                    0
                } else {
                    self.total_draws / u64::from(self.games)
                }
            ),
            String::new(),
            format!("{:<6} {:>6} {:>6} {:>6} {:>6}", "seat", "1st", "2nd", "3rd", "last"),
        ];
        for (seat, row) in self.places.iter().enumerate() {
            let name = seat_name(seat, self.human_seat == Some(seat));
            lines.push(format!(
                "{:<6} {:>6} {:>6} {:>6} {:>6}",
                name, row[0], row[1], row[2], row[3]
            ));
        }
        lines.join("\n")
    }
}
