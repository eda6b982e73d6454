//! Command-line configuration and logging setup.

use std::{fs::File, path::PathBuf, time::Duration};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr as _};
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::{maze::Maze, playback::STEP_DELAY_MS};

/// Draws a grid maze's walls in the terminal and numbers the steps of a path through it.
///
/// Without arguments the built-in 12 by 12 maze and its recorded robot run are shown.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Wall table to draw, one `x y : west south east north` line per cell.
    #[arg(short, long, value_name = "FILE")]
    pub walls: Option<PathBuf>,
    /// Path to number, as a nested list of `[x, y]` pairs.
    #[arg(short, long, value_name = "FILE")]
    pub path: Option<PathBuf>,
    /// Reveal the step labels one at a time instead of all at once.
    #[arg(short, long)]
    pub replay: bool,
    /// Milliseconds between two revealed steps during a replay.
    #[arg(long, value_name = "MS", default_value_t = STEP_DELAY_MS)]
    pub step_delay: u64,
    /// Write logs to this file; logging is off without it.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
    /// Most verbose level written to the log file. `RUST_LOG` can refine it.
    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Loads the maze selected on the command line.
    ///
    /// # Errors
    ///
    /// This function may return errors if a given file cannot be read or is malformed.
    pub fn load_maze(&self) -> Result<Maze> {
        Maze::load(self.walls.as_deref(), self.path.as_deref())
    }

    /// Sets up logging into the configured log file, if any.
    ///
    /// The terminal belongs to the user interface, so nothing is logged unless a file is given.
    ///
    /// # Errors
    ///
    /// This function may return errors if the log file cannot be created or a logger is already
    /// installed.
    pub fn init_logging(&self) -> Result<()> {
        let Some(log_file) = &self.log_file else {
            return Ok(());
        };

        let file = File::create(log_file)
            .wrap_err_with(|| format!("failed to create log file {}", log_file.display()))?;

        let mut builder = Builder::new();
        let _ = builder
            .filter_level(self.log_level)
            .parse_default_env()
            .target(Target::Pipe(Box::new(file)));
        builder.try_init()?;

        Ok(())
    }

    /// Delay between two revealed steps during a replay.
    pub(crate) const fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay)
    }
}
