use crate::{
    AutoplayConfig, AutoplayError, AutoplayResult, BatchReport, RunStatus, Simulator,
    SummaryStats,
};
use std::time::Instant;
use tracing::{info, warn};

/// Plays one seeded game to the end, or until `max_ticks` runs out.
pub fn run_autoplay(config: &AutoplayConfig) -> Result<AutoplayResult, AutoplayError> {
    let started_at = Instant::now();
    let mut sim = Simulator::new(config)?;
    let mut summary = SummaryStats::default();
    let mut events: Vec<_> = sim.session.events.drain().collect();
    for event in &events {
        summary.observe(event);
    }
    if config.check_invariants {
        sim.verify()?;
    }

    let mut status = None;
    for _ in 0..config.max_ticks {
        if sim.is_finished() {
            status = Some(RunStatus::Finished);
            break;
        }
        for event in sim.step()? {
            summary.observe(&event);
            events.push(event);
        }
    }
    if status.is_none() && sim.is_finished() {
        status = Some(RunStatus::Finished);
    }
    let status = status.unwrap_or_else(|| {
        warn!(seed = config.seed, ticks = sim.tick(), "autoplay hit the tick limit");
        RunStatus::MaxTicks
    });

    summary.ticks = sim.tick();
    summary.virtual_ms = sim.session.now_ms();
    summary.wall_time_ms = started_at.elapsed().as_millis() as u64;
    let ranking = sim.session.ranking.order().to_vec();
    let loser = match status {
        RunStatus::Finished => ranking.last().copied(),
        RunStatus::MaxTicks => None,
    };
    info!(seed = config.seed, ?status, ?ranking, ticks = summary.ticks, "autoplay done");
    Ok(AutoplayResult {
        status,
        seed: config.seed,
        policy: config.policy,
        human_seat: config.table.human_seat,
        loser,
        ranking,
        events,
        summary,
    })
}

/// Plays `games` games on consecutive seeds starting at `config.seed`.
pub fn run_batch(config: &AutoplayConfig, games: u32) -> Result<BatchReport, AutoplayError> {
    run_batch_with(config, games, |_| Ok(()))
}

/// Like [`run_batch`], handing every finished game to `on_game` before it is tallied.
pub fn run_batch_with<F>(
    config: &AutoplayConfig,
    games: u32,
    mut on_game: F,
) -> Result<BatchReport, AutoplayError>
where
    F: FnMut(&AutoplayResult) -> Result<(), AutoplayError>,
{
    let mut report = BatchReport::new(config.seed, config.table.human_seat);
    for offset in 0..games {
        let game = AutoplayConfig {
            seed: config.seed.wrapping_add(u64::from(offset)),
            ..config.clone()
        };
        let result = run_autoplay(&game)?;
        on_game(&result)?;
        report.record(&result);
    }
    Ok(report)
}
