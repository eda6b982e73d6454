//! Core application state and main loop of the maze viewer.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{config::Cli, events, maze::Maze, playback::Playback, ui};

/// Application state container for the maze viewer.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the maze and Crossterm events will help writing to.
#[derive(Debug)]
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// quits the viewer but it starts off `false`.
    pub(crate) exit: bool,
    /// Maze being displayed.
    pub(crate) maze: Maze,
    /// Whether step labels are drawn over the maze.
    pub(crate) show_labels: bool,
    /// Replay manager for the step labels.
    ///
    /// This field decides which labels are visible during a replay and advances it over time.
    pub(crate) playback: Playback,
}

impl App {
    /// Creates the application for a maze, with the replay settings taken from the command line.
    pub fn new(maze: Maze, cli: &Cli) -> Self {
        Self::with_playback(maze, Playback::new(cli.replay, cli.step_delay()))
    }

    /// Creates the application from an already configured replay manager.
    pub(crate) const fn with_playback(maze: Maze, playback: Playback) -> Self {
        Self {
            exit: false,
            maze,
            show_labels: true,
            playback,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws the maze, then handles user input and advances the replay. The loop
    /// continues until the exit condition is `true`, after which the function returns to the call
    /// site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
