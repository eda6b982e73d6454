//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::App;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches key presses to [`handle_key`]. It uses a
/// timeout to avoid blocking the UI, then advances the replay whether or not a key was pressed.
///
/// # Errors
///
/// This function may return errors from polling or reading terminal events.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    app.playback.update(app.maze.labels.len());

    Ok(())
}

/// Applies a single key press to the application state.
///
/// - `q` or `Esc` quits.
/// - `l` shows or hides the step labels.
/// - `p` switches replay on or off.
/// - `r` restarts the replay.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('l') => {
            app.show_labels = !app.show_labels;
            debug!("labels {}", if app.show_labels { "shown" } else { "hidden" });
        }
        KeyCode::Char('p') => app.playback.toggle(),
        KeyCode::Char('r') => {
            app.playback.restart();
            debug!("replay restarted");
        }
        _ => {}
    }
}
