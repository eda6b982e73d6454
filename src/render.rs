//! Maze geometry in plot coordinates.
//!
//! This module converts cells into the unit-length wall segments that get drawn, and computes the
//! plot window that fits both the walls and the path labels. A cell `(x, y)` occupies the square
//! from `(x - 0.5, y - 0.5)` to `(x + 0.5, y + 0.5)`; south is the edge at larger y.

use crate::{
    path::{Label, Position},
    walls::Cell,
};

/// Distance from a cell centre to each of its edges.
const HALF_CELL: f64 = 0.5;

/// Extra room around the outermost walls so they do not sit on the canvas border.
const MARGIN: f64 = 0.25;

/// A straight wall segment in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Segment {
    /// Horizontal coordinate of the start point.
    pub(crate) x1: f64,
    /// Vertical coordinate of the start point.
    pub(crate) y1: f64,
    /// Horizontal coordinate of the end point.
    pub(crate) x2: f64,
    /// Vertical coordinate of the end point.
    pub(crate) y2: f64,
}

/// Returns one segment per wall flag set on the cell, in west, south, east, north order.
pub(crate) fn cell_segments(cell: &Cell) -> Vec<Segment> {
    let x = f64::from(cell.position.x);
    let y = f64::from(cell.position.y);
    let (left, right) = (x - HALF_CELL, x + HALF_CELL);
    let (low, high) = (y - HALF_CELL, y + HALF_CELL);

    [
        (cell.walls.west, [left, low, left, high]),
        (cell.walls.south, [left, high, right, high]),
        (cell.walls.east, [right, low, right, high]),
        (cell.walls.north, [left, low, right, low]),
    ]
    .into_iter()
    .filter_map(|(present, [x1, y1, x2, y2])| present.then_some(Segment { x1, y1, x2, y2 }))
    .collect()
}

/// Returns the segments of every cell, in cell order.
pub(crate) fn maze_segments(cells: &[Cell]) -> Vec<Segment> {
    cells.iter().flat_map(cell_segments).collect()
}

/// Smallest grid rectangle containing every cell and every labelled position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Bounds {
    /// Lowest x and y in the maze.
    pub(crate) min: Position,
    /// Highest x and y in the maze.
    pub(crate) max: Position,
}

impl Bounds {
    /// Computes the bounds of a maze. An empty maze is bounded by the single cell at the origin.
    pub(crate) fn of(cells: &[Cell], labels: &[Label]) -> Self {
        let mut positions = cells
            .iter()
            .map(|cell| cell.position)
            .chain(labels.iter().map(|label| label.position));

        let Some(first) = positions.next() else {
            let origin = Position { x: 0, y: 0 };
            return Self {
                min: origin,
                max: origin,
            };
        };

        positions.fold(
            Self {
                min: first,
                max: first,
            },
            |bounds, position| Self {
                min: Position {
                    x: bounds.min.x.min(position.x),
                    y: bounds.min.y.min(position.y),
                },
                max: Position {
                    x: bounds.max.x.max(position.x),
                    y: bounds.max.y.max(position.y),
                },
            },
        )
    }

    /// Horizontal plot range, from the west edge of the leftmost cell to the east edge of the
    /// rightmost one, plus a margin.
    pub(crate) fn x(&self) -> [f64; 2] {
        [
            f64::from(self.min.x) - HALF_CELL - MARGIN,
            f64::from(self.max.x) + HALF_CELL + MARGIN,
        ]
    }

    /// Vertical plot range, built the same way as [`Bounds::x`].
    pub(crate) fn y(&self) -> [f64; 2] {
        [
            f64::from(self.min.y) - HALF_CELL - MARGIN,
            f64::from(self.max.y) + HALF_CELL + MARGIN,
        ]
    }

    /// Number of grid columns spanned, saturating at [`u16::MAX`].
    pub(crate) fn columns(&self) -> u16 {
        span(self.min.x, self.max.x)
    }

    /// Number of grid rows spanned, saturating at [`u16::MAX`].
    pub(crate) fn rows(&self) -> u16 {
        span(self.min.y, self.max.y)
    }
}

/// Counts the integers in `min..=max`, saturating at [`u16::MAX`].
fn span(min: i32, max: i32) -> u16 {
    u16::try_from(i64::from(max) - i64::from(min) + 1).unwrap_or(u16::MAX)
}
