//! Application runtime and event loop.
//!
//! Everything runs on one thread: draw, poll for input, apply the key, and
//! loop. Each key handler leaves the [`App`] fully recomputed, so there is no
//! background work to reconcile before the next frame.

use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use crate::dataset::Directory;
use crate::ui::outcome::BrowseOutcome;
use crate::ui::state::App;

/// Construct an [`App`] over the directory and run it to completion.
pub fn run(directory: Directory) -> Result<BrowseOutcome> {
    let mut app = App::new(directory);
    app.run()
}

impl<'a> App<'a> {
    /// Pump the terminal event loop until the user exits with an outcome.
    pub fn run(&mut self) -> Result<BrowseOutcome> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let outcome = loop {
            terminal.draw(|frame| self.draw(frame))?;

            if !event::poll(Duration::from_millis(50))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(outcome) = self.handle_key(key)? {
                        break outcome;
                    }
                }
                _ => {}
            }
        };

        ratatui::restore();
        debug!(
            accepted = outcome.accepted,
            query = %outcome.query,
            "browser closed"
        );
        Ok(outcome)
    }
}
