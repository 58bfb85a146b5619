//! Keyboard mapping for cell selection.

use botmatch_tictactoe::{BOARD_SIZE, Coordinate};
use crossterm::event::KeyCode;

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Coordinate, key: KeyCode) -> Coordinate {
    let (row, col) = (cursor.row(), cursor.col());
    let last = BOARD_SIZE - 1;

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row.saturating_add(1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col.saturating_add(1).min(last)),
        _ => (row, col),
    };

    Coordinate::new(row, col).unwrap_or(cursor)
}

/// Maps keys `1`-`9` to cells in row-major order.
pub fn digit_to_coordinate(c: char) -> Option<Coordinate> {
    let digit = c.to_digit(10)?;
    if digit == 0 {
        return None;
    }
    Coordinate::from_index(digit as usize - 1)
}
