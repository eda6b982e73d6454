//! Terminal viewer for grid mazes and the paths taken through them.
//!
//! The viewer reads a wall table describing which sides of each cell are walled, draws every wall
//! as a line segment on a terminal canvas, and numbers the distinct steps of a recorded path on top
//! of it. Consecutive repeats of a position in the path count as a single step.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod maze;
mod path;
mod playback;
mod render;
mod ui;
mod walls;

pub use app::App;
pub use config::Cli;
pub use maze::Maze;
