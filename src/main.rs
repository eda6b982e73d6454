//! This crate contains the source code for the binary of the maze viewer labyrinplot.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use labyrinplot::{App, Cli};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    cli.init_logging()?;
    let maze = cli.load_maze()?;

    let mut terminal = ratatui::init();
    let result = App::new(maze, &cli).run(&mut terminal);
    ratatui::restore();

    result
}
