//! Board coordinates.

use core::fmt;

/// A (row, column) position, zero-based.
///
/// Components are signed so that off-grid positions such as `(-1, 0)` can be
/// represented and rejected by the board instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Build a coordinate from one-based row and column numbers, as typed by
    /// a person.
    pub const fn from_one_based(row: i32, col: i32) -> Self {
        Self::new(row - 1, col - 1)
    }

    /// The coordinate shifted by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// The 3×3 block centred on this coordinate, itself included.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Displays one-based, the way the console shows and reads moves.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.row + 1, self.col + 1)
    }
}
