use crate::{AutoplayError, PickPolicy};
use jokerdraw_core::{seat_name, Event, SkipReason};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunStatus {
    Finished,
    MaxTicks,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryStats {
    pub ticks: u32,
    pub virtual_ms: u64,
    pub turns: u32,
    pub draws: u32,
    pub pool_picks: u32,
    pub pairs_discarded: u32,
    pub skips: u32,
    pub wall_time_ms: u64,
}

impl SummaryStats {
    pub fn observe(&mut self, event: &Event) {
        match event {
            Event::TurnStarted { .. } => self.turns += 1,
            Event::CardDrawn { .. } => self.draws += 1,
            Event::PoolCardPicked { .. } => self.pool_picks += 1,
            Event::PairDiscarded { .. } => self.pairs_discarded += 1,
            Event::InitialPairsRemoved { pairs, .. } => self.pairs_discarded += *pairs as u32,
            Event::TurnSkipped { .. } => self.skips += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayResult {
    pub status: RunStatus,
    pub seed: u64,
    pub policy: PickPolicy,
    pub human_seat: Option<usize>,
    pub loser: Option<usize>,
    pub ranking: Vec<usize>,
    #[serde(default)]
    pub events: Vec<Event>,
    pub summary: SummaryStats,
}

impl AutoplayResult {
    pub fn to_text_report(&self) -> String {
        let name = |seat: usize| seat_name(seat, self.human_seat == Some(seat));
        let ranking = self
            .ranking
            .iter()
            .enumerate()
            .map(|(index, seat)| format!("{}. {}", index + 1, name(*seat)))
            .collect::<Vec<_>>()
            .join(", ");
        let mut lines = vec![
            format!("status: {}", run_status_label(self.status)),
            format!("seed: {} policy: {}", self.seed, self.policy.label()),
            format!("ranking: {}", if ranking.is_empty() { "(none)".to_string() } else { ranking }),
            format!(
                "loser: {}",
                self.loser.map(name).unwrap_or_else(|| "(undecided)".to_string())
            ),
            format!(
                "summary: ticks={} virtual_ms={} turns={} draws={} picks={} pairs={} skips={} wall_ms={}",
                self.summary.ticks,
                self.summary.virtual_ms,
                self.summary.turns,
                self.summary.draws,
                self.summary.pool_picks,
                self.summary.pairs_discarded,
                self.summary.skips,
                self.summary.wall_time_ms
            ),
            String::new(),
            "events:".to_string(),
        ];
        if self.events.is_empty() {
            lines.push("  (none)".to_string());
        }
        for (index, event) in self.events.iter().enumerate() {
            lines.push(format!(
                "  {:>5} | {}",
                index,
                describe_event(event, self.human_seat)
            ));
        }
        lines.join("\n")
    }
}

/// One line of table narration for an event.
pub fn describe_event(event: &Event, human_seat: Option<usize>) -> String {
    let name = |seat: usize| seat_name(seat, human_seat == Some(seat));
    match event {
        Event::CardsDealt { seat, count } => format!("dealt {count} cards to {}", name(*seat)),
        Event::InitialPairsRemoved { seat, pairs } => {
            format!("{} put down {pairs} opening pairs", name(*seat))
        }
        Event::TurnStarted { seat, source } => {
            format!("{} to draw from {}", name(*seat), name(*source))
        }
        Event::TurnSkipped { seat, reason } => match reason {
            SkipReason::HandEmpty => format!("{} skipped: no cards left", name(*seat)),
            SkipReason::UpstreamEmpty => {
                format!("{} skipped: nobody to draw from", name(*seat))
            }
        },
        Event::DrawPoolOpened { source, cards } => {
            format!("{} spread {cards} cards to pick from", name(*source))
        }
        Event::PoolCardPicked { seat, index } => {
            format!("{} picked card {}", name(*seat), index + 1)
        }
        Event::CardDrawn { seat, source, card } => {
            format!("{} drew {card} from {}", name(*seat), name(*source))
        }
        Event::PairDiscarded { seat, rank } => {
            format!("{} discarded a pair of {}", name(*seat), rank.label())
        }
        Event::PoolReturned { seat, cards } => {
            format!("{cards} cards went back to {}", name(*seat))
        }
        Event::PlayerFinished { seat, place } => {
            format!("{} finished in place {place}", name(*seat))
        }
        Event::GameEnded { loser, .. } => format!("game over, joker left with {}", name(*loser)),
    }
}

fn run_status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Finished => "Finished",
        RunStatus::MaxTicks => "MaxTicks",
    }
}

pub fn write_json(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(result)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_text_report())?;
    Ok(())
}

/// Writes `game-<seed>.json` and `game-<seed>.txt` into `dir`.
pub fn write_trace(dir: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    let stem = format!("game-{}", result.seed);
    write_json(&dir.join(format!("{stem}.json")), result)?;
    write_text(&dir.join(format!("{stem}.txt")), result)
}
