use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tokio::time::Instant;
use tracing::warn;

use crate::core::engine::GameEngine;
use crate::core::sound::SoundPlayer;
use crate::ui::renderer;

/// How long the wilt image stays up after a miss.
const WILT_REVERT: Duration = Duration::from_millis(750);
/// Render cadence. Input is polled every pass.
const FRAME: Duration = Duration::from_millis(33);

/// Single-threaded shell around the engine: multiplexes keyboard input, the
/// render tick, and the wilt-revert timer on one loop, so nothing can race a
/// guess's state mutation.
pub struct App {
    engine: GameEngine,
    sounds: Box<dyn SoundPlayer>,
    wilt_deadline: Option<Instant>,
}

impl App {
    pub fn new(engine: GameEngine, sounds: Box<dyn SoundPlayer>) -> Self {
        Self {
            engine,
            sounds,
            wilt_deadline: None,
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            let mut snapshot = self.engine.snapshot();
            if self.wilt_deadline.is_some() {
                snapshot.image = format!("wilt{}", snapshot.guesses_remaining);
            }
            terminal.draw(|f| renderer::draw(f, &snapshot))?;

            // INPUT (non-blocking)
            if event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if !self.handle_key(key) {
                        break;
                    }
                }
            }

            let wilt_deadline = self.wilt_deadline;
            let wilt_revert = async {
                match wilt_deadline {
                    Some(deadline) => tokio::time::sleep_until(deadline).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                _ = tokio::time::sleep(FRAME) => {}
                _ = wilt_revert => {
                    // Back to the flower image for the current guess count.
                    self.wilt_deadline = None;
                }
            }
        }
        Ok(())
    }

    /// Returns false when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Enter if !self.engine.input_live() => {
                // New round supersedes any pending wilt revert.
                self.wilt_deadline = None;
                if let Err(e) = self.engine.advance_or_restart() {
                    warn!(error = %e, "could not continue to the next round");
                }
            }
            KeyCode::Char(c) if self.engine.input_live() => {
                if let Some(outcome) = self.engine.submit_letter(c) {
                    for cue in &outcome.sounds {
                        self.sounds.play(*cue);
                    }
                    self.wilt_deadline = if outcome.wilted {
                        Some(Instant::now() + WILT_REVERT)
                    } else {
                        None
                    };
                }
            }
            _ => {}
        }
        true
    }
}
