//! Terminal Sheep Crush runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the term crate.
//! Accepted swaps are resolved one step at a time with a short pause between
//! steps so every cascade is visible.

mod logging;

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use sheep_crush::core::{EngineConfig, GameSnapshot, GameState, SelectOutcome};
use sheep_crush::input::{handle_key_event, should_quit, Cursor};
use sheep_crush::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use sheep_crush::types::PlayerAction;

/// Pause between resolution steps.
const STEP_DELAY: Duration = Duration::from_millis(180);

/// Input poll interval while idle.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    logging::init_from_env()?;

    let config = EngineConfig::from_env();
    let mut game = GameState::with_config(config)?;
    info!(
        "starting: size={} kinds={} seed={}",
        game.size(),
        game.config().kind_count,
        game.seed()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exit: score={} moves={}", game.score(), game.moves());
    log::logger().flush();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut cursor = Cursor::new(game.size());
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_step = Instant::now();

    loop {
        if game.busy() && last_step.elapsed() >= STEP_DELAY {
            game.step();
            last_step = Instant::now();
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Some(cursor.index()), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = if game.busy() {
            STEP_DELAY.saturating_sub(last_step.elapsed())
        } else {
            IDLE_POLL
        };
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                match action {
                    PlayerAction::CursorUp
                    | PlayerAction::CursorDown
                    | PlayerAction::CursorLeft
                    | PlayerAction::CursorRight => {
                        cursor.apply(action);
                    }
                    PlayerAction::Select => {
                        if let SelectOutcome::Began(outcome) =
                            game.select_deferred(cursor.index())
                        {
                            info!("swap {}", outcome.as_str());
                            // Show the swapped tiles before the first clear.
                            last_step = Instant::now();
                        }
                    }
                    PlayerAction::Cancel => game.cancel_selection(),
                    PlayerAction::Reset => {
                        game.reset()?;
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
