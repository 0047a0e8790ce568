//! Text rendering of a board.

use core::fmt;

use crate::board::{Board, Cell};
use crate::config::BOARD_SIZE;

impl Cell {
    /// Glyph for this cell; ships on a hidden board show as water.
    pub fn glyph(self, hidden: bool) -> char {
        match self {
            Cell::Ship if hidden => 'O',
            Cell::Empty => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
            Cell::Margin => '.',
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " | {}", c + 1)?;
        }
        writeln!(f, " |")?;
        for _ in 0..4 * BOARD_SIZE + 3 {
            write!(f, "-")?;
        }
        for (r, row) in self.grid().iter().enumerate() {
            write!(f, "\n{}", r + 1)?;
            for cell in row {
                write!(f, " | {}", cell.glyph(self.hidden()))?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}
