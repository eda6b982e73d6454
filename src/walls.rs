//! Wall table parsing.
//!
//! This module turns the textual wall table into [`Cell`] records. Each non-blank line of the table
//! describes one cell as `x y : west south east north`, with the four flags written as the literal
//! tokens `true` or `false`.

use color_eyre::eyre::{bail, Result, WrapErr as _};

use crate::path::Position;

/// Wall flags of a single maze cell.
///
/// Each flag indicates whether a wall exists on the corresponding side of the cell. The flags are
/// independent; nothing ties a cell's east wall to its neighbour's west wall.
#[expect(
    clippy::struct_excessive_bools,
    reason = "The four sides of a cell are independent flags, not a state machine."
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Walls {
    /// Wall on the side of decreasing x.
    pub(crate) west: bool,
    /// Wall on the side of increasing y.
    pub(crate) south: bool,
    /// Wall on the side of increasing x.
    pub(crate) east: bool,
    /// Wall on the side of decreasing y.
    pub(crate) north: bool,
}

/// A grid cell together with its wall flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    /// Grid coordinates of the cell.
    pub(crate) position: Position,
    /// Walls surrounding the cell.
    pub(crate) walls: Walls,
}

/// Parses a whole wall table into cells, in the order they appear.
///
/// Blank lines are skipped. Coordinates are neither bounds-checked nor deduplicated.
///
/// # Errors
///
/// This function fails on the first malformed line, reporting its 1-based line number.
pub(crate) fn parse_wall_table(input: &str) -> Result<Vec<Cell>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_line(line)
                .wrap_err_with(|| format!("malformed wall table entry on line {}", idx + 1))
        })
        .collect()
}

/// Parses one `x y : w s e n` entry.
///
/// The colon is removed before splitting, so it may stick to the coordinate before it but must
/// be followed by whitespace.
fn parse_line(line: &str) -> Result<Cell> {
    let line = line.replace(':', "");
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let [x, y, west, south, east, north] = tokens.as_slice() else {
        bail!("expected 6 fields, found {}", tokens.len());
    };

    Ok(Cell {
        position: Position {
            x: parse_coordinate(x)?,
            y: parse_coordinate(y)?,
        },
        walls: Walls {
            west: parse_flag(west)?,
            south: parse_flag(south)?,
            east: parse_flag(east)?,
            north: parse_flag(north)?,
        },
    })
}

/// Parses an integer grid coordinate.
fn parse_coordinate(token: &str) -> Result<i32> {
    token
        .parse()
        .wrap_err_with(|| format!("invalid coordinate `{token}`"))
}

/// Parses a wall flag, which must be spelled exactly `true` or `false`.
fn parse_flag(token: &str) -> Result<bool> {
    match token {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => bail!("invalid wall flag `{token}`, expected `true` or `false`"),
    }
}
