//! Path parsing and step annotation.
//!
//! A path is the ordered list of grid positions visited over time. Consecutive repeats of a
//! position stand for a robot staying put, so they collapse into a single numbered step when the
//! path is annotated.

use color_eyre::eyre::{bail, Result, WrapErr as _};

/// Integer grid coordinates of a maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Position {
    /// Column of the cell.
    pub(crate) x: i32,
    /// Row of the cell.
    pub(crate) y: i32,
}

/// A step number placed on a path position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Label {
    /// Position the label is drawn at.
    pub(crate) position: Position,
    /// Logical step index, starting at 1.
    pub(crate) step: usize,
}

/// Parses a path written as a nested list of pairs, such as `[[3, 0], [4, 0], ]`.
///
/// Brackets and commas only separate numbers; the integers are paired up in reading order.
///
/// # Errors
///
/// This function fails if a token is not an integer or if the integers cannot be split into
/// `(x, y)` pairs.
pub(crate) fn parse(input: &str) -> Result<Vec<Position>> {
    let numbers = input
        .split(|symbol: char| matches!(symbol, '[' | ']' | ',') || symbol.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .wrap_err_with(|| format!("invalid path coordinate `{token}`"))
        })
        .collect::<Result<Vec<i32>>>()?;

    if numbers.len() % 2 != 0 {
        bail!(
            "path holds {} coordinates, which cannot form (x, y) pairs",
            numbers.len()
        );
    }

    let xs = numbers.iter().step_by(2);
    let ys = numbers.iter().skip(1).step_by(2);

    Ok(xs.zip(ys).map(|(&x, &y)| Position { x, y }).collect())
}

/// Numbers the distinct steps of a path.
///
/// The first position gets label `1`. Every later position that differs from the one right
/// before it gets the next number; immediate repeats get nothing. A position visited again after
/// leaving it is a new step and gets a new label.
pub(crate) fn annotate(path: &[Position]) -> Vec<Label> {
    let mut steps = path.to_vec();
    steps.dedup();

    steps
        .into_iter()
        .zip(1..)
        .map(|(position, step)| Label { position, step })
        .collect()
}
