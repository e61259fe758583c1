mod actions;
mod app;
mod canvas;
mod input;
mod logging;
mod settings;
mod view;

use anyhow::{Context, Result};
use app::App;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use jokerdraw_autoplay::{run_batch_with, write_trace, AutoplayConfig, BatchReport, PickPolicy};
use jokerdraw_core::TableConfig;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use settings::{config_path_from_env, load_table_config, log_path_from_env};
use std::io::{self, stdout, IsTerminal};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const DEFAULT_TICK_MS: u64 = 33;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOptions {
    pub config_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub watch: bool,
    pub tick_ms: Option<u64>,
    pub simulate: Option<u32>,
    pub policy: Option<PickPolicy>,
    pub trace_dir: Option<PathBuf>,
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let mut config = match options.config_path.as_ref() {
        Some(path) => load_table_config(path)?,
        None => TableConfig::default(),
    };
    if options.watch {
        config.human_seat = None;
    }

    if let Some(games) = options.simulate {
        return simulate(&options, config, games);
    }

    logging::init(options.log_path.as_deref())?;
    let mut app = App::bootstrap(config, options.seed)?;

    ensure_interactive_terminal()?;

    enable_raw_mode().map_err(|err| {
        anyhow::anyhow!(
            "failed to enable raw mode; ensure the process owns an interactive terminal: {err}"
        )
    })?;
    let mut stdout = stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("enter alternate screen")?;
    stdout
        .execute(EnableMouseCapture)
        .context("enable mouse capture")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let tick_rate = Duration::from_millis(options.tick_ms.unwrap_or(DEFAULT_TICK_MS).max(1));
    let run_result = run_loop(&mut terminal, &mut app, tick_rate);
    restore_terminal(&mut terminal)?;
    run_result
}

pub fn run_with_args(args: &[String]) -> Result<()> {
    let options = parse_options(args)?;
    run(options)
}

/// Plays `games` headless games and prints the placement table.
fn simulate(options: &LaunchOptions, table: TableConfig, games: u32) -> Result<()> {
    logging::init_stderr()?;
    let report = simulate_games(options, table, games)?;
    println!("{}", report.to_text_report());
    Ok(())
}

fn simulate_games(
    options: &LaunchOptions,
    table: TableConfig,
    games: u32,
) -> Result<BatchReport> {
    let defaults = AutoplayConfig::default();
    let config = AutoplayConfig {
        seed: options.seed.unwrap_or(defaults.seed),
        tick_ms: options.tick_ms.unwrap_or(0),
        policy: options.policy.unwrap_or(defaults.policy),
        table,
        ..defaults
    };
    let trace_dir = options.trace_dir.as_deref();
    run_batch_with(&config, games, |result| match trace_dir {
        Some(dir) => write_trace(dir, result),
        None => Ok(()),
    })
    .context("simulate games")
}

fn parse_options(args: &[String]) -> Result<LaunchOptions> {
    let mut options = LaunchOptions {
        config_path: config_path_from_env(),
        log_path: log_path_from_env(),
        ..LaunchOptions::default()
    };
    let mut idx = 0usize;
    while idx < args.len() {
        let value = args.get(idx + 1);
        match args[idx].as_str() {
            "--config" | "-c" => {
                if let Some(value) = value {
                    options.config_path = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--log" => {
                if let Some(value) = value {
                    options.log_path = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = value {
                    let seed = value
                        .parse::<u64>()
                        .with_context(|| format!("invalid --seed {value}"))?;
                    options.seed = Some(seed);
                    idx += 1;
                }
            }
            "--tick-ms" => {
                if let Some(value) = value {
                    let tick = value
                        .parse::<u64>()
                        .with_context(|| format!("invalid --tick-ms {value}"))?;
                    options.tick_ms = Some(tick);
                    idx += 1;
                }
            }
            "--simulate" => {
                if let Some(value) = value {
                    let games = value
                        .parse::<u32>()
                        .with_context(|| format!("invalid --simulate {value}"))?;
                    options.simulate = Some(games);
                    idx += 1;
                }
            }
            "--policy" => {
                if let Some(value) = value {
                    let policy = PickPolicy::parse(value)
                        .with_context(|| format!("unknown --policy {value}"))?;
                    options.policy = Some(policy);
                    idx += 1;
                }
            }
            "--trace" => {
                if let Some(value) = value {
                    options.trace_dir = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--watch" | "-w" => options.watch = true,
            _ => {}
        }
        idx += 1;
    }
    Ok(options)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();
    while !app.should_quit {
        let completed = terminal.draw(|frame| view::draw(frame, app))?;
        app.table_area = view::table_area(completed.area);
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    actions::dispatch(app, input::map_key(key))?;
                }
                CEvent::Mouse(mouse) => {
                    if let Some(pointer) = input::map_mouse(mouse) {
                        actions::dispatch_pointer(app, pointer);
                    }
                }
                _ => {}
            }
        }
        if last_tick.elapsed() >= tick_rate {
            let elapsed = last_tick.elapsed().as_millis() as u64;
            last_tick = Instant::now();
            app.on_tick(elapsed);
        }
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn ensure_interactive_terminal() -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Ok(());
    }
    anyhow::bail!(
        "jokerdraw-cui requires an interactive TTY (run directly in a terminal, or use --simulate <games> for a headless run)"
    );
}
