//! User interface rendering for the maze viewer.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{path::Label, render::Bounds, App};

/// Terminal columns given to each maze cell.
const CELL_COLUMNS: u16 = 6;

/// Terminal rows given to each maze cell.
const CELL_ROWS: u16 = 3;

/// Colour of every wall segment; the terminal's default foreground.
const WALL_COLOR: Color = Color::Reset;

/// Colour of the step labels.
const LABEL_COLOR: Color = Color::Red;

/// Key hints shown below the maze.
const KEY_HINTS: &str = "(q) quit / (l) labels / (p) replay / (r) restart";

/// Updates the application UI based on the persistent state.
///
/// This function draws the maze walls and the currently visible step labels on a [`Canvas`]
/// centred in the terminal, with the key hints in a footer below it.
///
/// # Errors
///
/// This function may return errors from layout computations.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    // Maze area on top, key hints at the bottom
    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let space = maze_space(&app.maze.bounds, maze_content_area)?;

    let labels: &[Label] = if app.show_labels {
        app.playback.visible(&app.maze.labels)
    } else {
        &[]
    };
    let label_style = Style::default().fg(LABEL_COLOR);

    let maze = Canvas::default()
        .x_bounds(app.maze.bounds.x())
        .y_bounds(app.maze.bounds.y())
        .marker(Marker::Braille)
        .paint(|ctx| {
            for segment in &app.maze.segments {
                ctx.draw(&CanvasLine {
                    x1: segment.x1,
                    y1: segment.y1,
                    x2: segment.x2,
                    y2: segment.y2,
                    color: WALL_COLOR,
                });
            }

            // Labels go on their own layer so they sit on top of the walls
            ctx.layer();

            for label in labels {
                ctx.print(
                    f64::from(label.position.x),
                    f64::from(label.position.y),
                    Span::styled(label.step.to_string(), label_style),
                );
            }
        });

    frame.render_widget(maze, space);

    let tooltip_block = Block::bordered()
        .title(KEY_HINTS)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Computes the area the maze canvas is drawn in.
///
/// Each maze cell gets a fixed block of terminal cells and the result is centred in `area`. When
/// the terminal is too small, or the maze spans more cells than a terminal can address, the maze
/// shrinks to what is available.
///
/// # Errors
///
/// This function may return errors if the layout does not produce an area.
pub(crate) fn maze_space(bounds: &Bounds, area: Rect) -> Result<Rect> {
    let width = bounds.columns().saturating_mul(CELL_COLUMNS);
    let height = bounds.rows().saturating_mul(CELL_ROWS);

    let row = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area)
        .first()
        .copied()
        .ok_or_eyre("failed to get maze row from vertical layout")?;

    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(row)
        .first()
        .copied()
        .ok_or_eyre("failed to get maze space from horizontal layout")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{maze::Maze, path::Position, playback::Playback};
    use ratatui::{backend::TestBackend, Terminal};

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(100, 50);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Creates a test app over a small maze, with the given replay state.
    fn create_test_app(playback: Playback) -> App {
        let maze = Maze::parse(
            "0 0 : true true false true\n1 0 : false true true true",
            "[[0, 0], [0, 0], [1, 0]]",
        )
        .expect("test maze should parse");
        App::with_playback(maze, playback)
    }

    /// Returns whether any cell of the rendered buffer holds an ASCII digit.
    fn buffer_has_digits(terminal: &Terminal<TestBackend>) -> bool {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .any(|cell| cell.symbol().chars().any(|symbol| symbol.is_ascii_digit()))
    }

    /// Counts the buffer cells holding a braille pattern.
    fn braille_cells(terminal: &Terminal<TestBackend>) -> usize {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .filter(|cell| {
                cell.symbol()
                    .chars()
                    .any(|symbol| ('\u{2801}'..='\u{28ff}').contains(&symbol))
            })
            .count()
    }

    #[test]
    fn test_draw_default_maze() {
        let maze = Maze::load(None, None).expect("default maze should load");
        let app = App::with_playback(maze, Playback::default());
        let mut terminal = create_test_terminal();

        let result = terminal
            .draw(|frame| {
                draw(&app, frame).expect("drawing should succeed in test");
            })
            .map(drop);

        assert!(result.is_ok(), "drawing the default maze should succeed");
        assert!(buffer_has_digits(&terminal), "step labels should be drawn");
    }

    #[test]
    fn test_draw_hidden_labels() {
        let mut app = create_test_app(Playback::default());
        app.show_labels = false;
        let mut terminal = create_test_terminal();

        let result = terminal
            .draw(|frame| {
                draw(&app, frame).expect("drawing should succeed in test");
            })
            .map(drop);

        assert!(result.is_ok(), "drawing without labels should succeed");
        assert!(!buffer_has_digits(&terminal), "no step labels expected");
    }

    #[test]
    fn test_draw_replay_before_first_step() {
        let app = create_test_app(Playback::new(true, Duration::from_secs(3600)));
        let mut terminal = create_test_terminal();

        let result = terminal
            .draw(|frame| {
                draw(&app, frame).expect("drawing should succeed in test");
            })
            .map(drop);

        assert!(result.is_ok(), "drawing an empty replay should succeed");
        assert!(!buffer_has_digits(&terminal), "nothing revealed yet");
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let maze = Maze::load(None, None).expect("default maze should load");
        let app = App::with_playback(maze, Playback::default());
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).expect("failed to create terminal");

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in a tiny terminal");
        });

        assert!(result.is_ok(), "drawing in a tiny terminal should succeed");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_maze_space_is_centred() {
        let bounds = Bounds {
            min: Position { x: 0, y: 0 },
            max: Position { x: 11, y: 11 },
        };
        let area = Rect::new(0, 0, 100, 50);

        let space = maze_space(&bounds, area).expect("maze should fit");

        assert_eq!(space.width, 12 * CELL_COLUMNS, "width per cell");
        assert_eq!(space.height, 12 * CELL_ROWS, "height per cell");
        assert_eq!(space.x, (100 - space.width) / 2, "horizontally centred");
        assert_eq!(space.y, (50 - space.height) / 2, "vertically centred");
    }

    #[test]
    fn test_maze_space_too_wide() {
        let bounds = Bounds {
            min: Position { x: 0, y: 0 },
            max: Position { x: 20_000, y: 0 },
        };
        let area = Rect::new(0, 0, 100, 50);

        let space = maze_space(&bounds, area).expect("oversized maze should be clamped");

        assert_eq!(space.width, area.width, "clamped to the available width");
        assert_eq!(space.height, CELL_ROWS, "single row keeps its height");
    }

    #[test]
    fn test_draw_spread_out_maze() {
        let maze = Maze::parse(
            "0 0 : true true true true\n11000 0 : true true true true",
            "[]",
        )
        .expect("test maze should parse");
        let app = App::with_playback(maze, Playback::default());
        let mut terminal = create_test_terminal();

        let result = terminal
            .draw(|frame| {
                draw(&app, frame).expect("widely spread cells should still draw");
            })
            .map(drop);

        assert!(result.is_ok(), "drawing a spread out maze should succeed");
    }

    #[test]
    fn test_draw_closed_cell_walls() {
        let maze = Maze::parse("0 0 : true true true true", "[]").expect("test maze should parse");
        let app = App::with_playback(maze, Playback::default());
        let mut terminal = create_test_terminal();

        let result = terminal
            .draw(|frame| {
                draw(&app, frame).expect("drawing should succeed in test");
            })
            .map(drop);

        assert!(result.is_ok(), "drawing a closed cell should succeed");
        assert!(
            braille_cells(&terminal) > 0,
            "wall segments should be drawn as braille dots"
        );
    }

    #[test]
    fn test_draw_open_cell_has_no_walls() {
        let maze =
            Maze::parse("0 0 : false false false false", "[]").expect("test maze should parse");
        let app = App::with_playback(maze, Playback::default());
        let mut terminal = create_test_terminal();

        let result = terminal
            .draw(|frame| {
                draw(&app, frame).expect("drawing should succeed in test");
            })
            .map(drop);

        assert!(result.is_ok(), "drawing an open cell should succeed");
        assert_eq!(braille_cells(&terminal), 0, "no wall segments to draw");
    }

    #[test]
    fn test_draw_label_position() {
        let maze = Maze::parse("0 0 : false false false false", "[[0, 0]]")
            .expect("test maze should parse");
        let app = App::with_playback(maze, Playback::default());
        let mut terminal = create_test_terminal();

        let result = terminal
            .draw(|frame| {
                draw(&app, frame).expect("drawing should succeed in test");
            })
            .map(drop);
        assert!(result.is_ok(), "drawing a single label should succeed");

        // Same split as `draw`: the footer takes the last three rows
        let space = maze_space(&app.maze.bounds, Rect::new(0, 0, 100, 47))
            .expect("maze space should be computed");
        let buffer = terminal.backend().buffer();
        let digits: Vec<(u16, u16)> = buffer
            .content
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.symbol() == "1")
            .map(|(idx, _)| buffer.pos_of(idx))
            .collect();

        // The cell centre sits half way across the canvas: x from -0.75 to 0.75 over six columns
        // lands on column 2, y over three rows lands on row 1.
        assert_eq!(
            digits,
            vec![(space.x + 2, space.y + 1)],
            "label should be printed once, at the cell centre"
        );
    }
}
