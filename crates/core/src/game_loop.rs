//! Game loop - drives [`GameState`] from input events and the gravity timer.
//!
//! One iteration: draw the board with the active piece painted, then block on
//! input until a key arrives or the fall interval runs out. A timeout is gravity;
//! a key is a command. Nothing in a step is interrupted once it starts.

use std::fmt;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::game_state::{GameState, Outcome};
use crate::ports::{Input, InputSource, Renderer, ScoreSink};
use crate::timer::FallTimer;
use crate::types::{Command, Level};

pub const PAUSED_MESSAGE: &str = "paused - press RETURN to continue";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// A new piece could not spawn.
    GameOver,
    /// The quit key.
    Quit,
    /// Interrupt from the terminal.
    Interrupted,
}

/// Final result of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub level: Level,
    pub rows_cleared: u32,
    pub reason: EndReason,
}

impl GameSummary {
    /// Score weighted by level.
    pub fn total(&self) -> u32 {
        self.score.saturating_mul(self.level.get())
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your score:  {} point{}  x  level {}  =  {}",
            self.score,
            if self.score == 1 { "" } else { "s" },
            self.level,
            self.total()
        )
    }
}

/// Run a whole game: take over the display, play, and always give it back.
pub fn play<I, R>(
    state: &mut GameState,
    config: &GameConfig,
    input: &mut I,
    renderer: &mut R,
) -> Result<GameSummary>
where
    I: InputSource,
    R: Renderer,
{
    renderer.enter()?;
    let result = run(state, config, input, renderer);
    if let Err(err) = renderer.exit() {
        warn!("failed to restore the display: {err:#}");
    }
    result
}

/// The event loop proper. The display must already be set up.
pub fn run<I, R>(
    state: &mut GameState,
    config: &GameConfig,
    input: &mut I,
    renderer: &mut R,
) -> Result<GameSummary>
where
    I: InputSource,
    R: Renderer,
{
    info!(
        level = %config.level,
        preview = config.preview,
        seed = config.seed,
        "game started"
    );
    let mut timer = FallTimer::new(config.level.fall_interval());
    logged(renderer.show_message(&config.key_help, true), "show key help");

    let reason = 'game: loop {
        let started = Instant::now();
        draw(renderer, state, config.preview);

        // A key that arrived right at the deadline leaves the fall due.
        let event = if timer.is_due() {
            None
        } else {
            input.poll(timer.remaining())?
        };
        timer.consume(started.elapsed());

        let Some(event) = event else {
            timer.expire();
            let outcome = state.tick_with(|snap| {
                let snap = if config.preview { *snap } else { snap.without_preview() };
                logged(renderer.draw(&snap), "draw");
                logged(input.discard_for(config.clear_pause), "row clear pause");
            });
            if let Outcome::GameOver { .. } = outcome {
                break EndReason::GameOver;
            }
            continue;
        };

        let mut pending = Some(event);
        while let Some(event) = pending.take() {
            match event {
                Input::Interrupt => break 'game EndReason::Interrupted,
                Input::Command(Command::Quit) => {
                    state.apply(Command::Quit);
                    break 'game EndReason::Quit;
                }
                Input::Command(Command::Pause) => {
                    pending = Some(pause(state, config, input, renderer)?);
                }
                Input::Command(command) => {
                    state.apply(command);
                }
                Input::Redraw => {
                    logged(renderer.clear_screen(), "clear screen");
                    logged(renderer.show_message(&config.key_help, true), "show key help");
                }
                Input::Other => {}
            }
        }
    };

    logged(renderer.clear_screen(), "clear screen");
    let summary = GameSummary {
        score: state.score(),
        level: state.level(),
        rows_cleared: state.rows_cleared(),
        reason,
    };
    info!(score = summary.score, rows = summary.rows_cleared, ?reason, "game ended");
    Ok(summary)
}

/// Hold the game until any key. The key that ends the pause is returned so the
/// loop acts on it too.
fn pause<I, R>(
    state: &mut GameState,
    config: &GameConfig,
    input: &mut I,
    renderer: &mut R,
) -> Result<Input>
where
    I: InputSource,
    R: Renderer,
{
    state.apply(Command::Pause);
    debug!("paused");

    let resumed_by = loop {
        draw(renderer, state, config.preview);
        logged(renderer.show_message(&config.key_help, false), "hide key help");
        logged(renderer.show_message(PAUSED_MESSAGE, true), "show pause message");
        match input.wait_for_resume()? {
            Input::Redraw => logged(renderer.clear_screen(), "clear screen"),
            other => break other,
        }
    };

    logged(renderer.show_message(PAUSED_MESSAGE, false), "hide pause message");
    logged(renderer.show_message(&config.key_help, true), "show key help");
    if resumed_by != Input::Interrupt {
        state.resume();
        debug!(?resumed_by, "resumed");
    }
    Ok(resumed_by)
}

/// Record the result and show the table. Failures are logged, never fatal.
pub fn report_scores(summary: &GameSummary, scores: &mut impl ScoreSink) {
    logged(scores.record_score(summary), "record score");
    logged(scores.show_scores(Some(summary.level)), "show scores");
}

fn draw(renderer: &mut impl Renderer, state: &mut GameState, preview: bool) {
    let snap = state.snapshot();
    let snap = if preview { snap } else { snap.without_preview() };
    logged(renderer.draw(&snap), "draw");
}

fn logged(result: Result<()>, what: &str) {
    if let Err(err) = result {
        warn!("{what} failed: {err:#}");
    }
}
