//! Terminal Tetris runner (default binary).
//!
//! Options are checked before the terminal is touched, so a bad key string or
//! level is reported on a normal screen.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level as LogLevel};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use tetris_bsd::core::{play, report_scores, EndReason, GameConfig, GameState, ShuffleMode};
use tetris_bsd::input::{KeyMap, TerminalInput};
use tetris_bsd::scores::SessionScores;
use tetris_bsd::term::TerminalScreen;
use tetris_bsd::types::{Level, CLEAR_PAUSE_MS, DEFAULT_KEYS, DEFAULT_LEVEL};

#[derive(Debug, Parser)]
#[command(name = "tetris", about = "The game of Tetris")]
struct Cli {
    #[arg(
        short = 'k',
        value_name = "KEYS",
        default_value = DEFAULT_KEYS,
        help = "Seven keys for left, rotate, right, down, drop, pause and quit"
    )]
    keys: String,

    #[arg(short = 'l', value_name = "LEVEL", default_value_t = DEFAULT_LEVEL, help = "Starting level (1-9)")]
    level: u32,

    #[arg(short = 'p', help = "Show the next shape")]
    preview: bool,

    #[arg(long, help = "Seed for the shape randomizer (default: process id)")]
    seed: Option<u32>,

    #[arg(long, help = "Shuffle each bag uniformly instead of with seven random swaps")]
    uniform_shuffle: bool,

    #[arg(long, help = "Write logs to this file (nothing is logged otherwise)")]
    log_file: Option<PathBuf>,

    #[arg(long, default_value = "info", help = "Log level: error, warn, info, debug or trace")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let keymap = KeyMap::parse(&cli.keys).context("invalid -k key string")?;
    let level = Level::new(cli.level)?;
    init_logging(cli.log_file.as_deref(), cli.log_level)?;

    let config = GameConfig {
        level,
        preview: cli.preview,
        key_help: keymap.help_text(),
        seed: cli.seed.unwrap_or_else(std::process::id),
        shuffle: if cli.uniform_shuffle {
            ShuffleMode::FisherYates
        } else {
            ShuffleMode::Swaps
        },
        clear_pause: Duration::from_millis(CLEAR_PAUSE_MS),
    };

    let mut state = GameState::from_config(&config);
    let mut input = TerminalInput::new(keymap);
    // SIGINT and SIGTERM end the game through the loop, so the terminal is restored.
    let interrupted = input.interrupt_flag();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::Relaxed);
    })
    .context("cannot install the signal handler")?;
    let mut screen = TerminalScreen::new();
    let summary = play(&mut state, &config, &mut input, &mut screen)?;

    if summary.reason == EndReason::Interrupted {
        info!("interrupted, score not recorded");
        return Ok(());
    }

    println!("\n{summary}");
    let mut scores = SessionScores::for_current_user();
    report_scores(&summary, &mut scores);
    Ok(())
}

fn init_logging(path: Option<&Path>, level: LogLevel) -> Result<()> {
    // The terminal is in raw mode while playing; logs only ever go to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(level))
        .init();
    Ok(())
}
