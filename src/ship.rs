//! Ship definitions and the cells they cover.

use core::fmt;

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along increasing columns.
    Horizontal,
    /// Extends along increasing rows.
    Vertical,
}

/// A ship anchored at `origin`, tracking undamaged segments.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    origin: Coordinate,
    orientation: Orientation,
    remaining_hp: usize,
}

impl Ship {
    /// A ship at full health. Bounds are not checked here; the board does
    /// that on placement.
    pub fn new(length: usize, origin: Coordinate, orientation: Orientation) -> Self {
        Ship {
            length,
            origin,
            orientation,
            remaining_hp: length,
        }
    }

    /// Number of segments.
    pub fn length(&self) -> usize {
        self.length
    }

    /// First cell of the ship.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn remaining_hp(&self) -> usize {
        self.remaining_hp
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining_hp == 0
    }

    /// The `length` cells of the ship, starting at the origin.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> {
        let (origin, orientation) = (self.origin, self.orientation);
        (0..self.length as i32).map(move |i| match orientation {
            Orientation::Horizontal => origin.offset(0, i),
            Orientation::Vertical => origin.offset(i, 0),
        })
    }

    /// Whether the ship covers `coord`.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.occupied_cells().any(|c| c == coord)
    }

    /// Register a hit on one segment. Returns `true` if this sank the ship.
    /// A sunk ship stays sunk.
    pub(crate) fn take_hit(&mut self) -> bool {
        if self.remaining_hp == 0 {
            return false;
        }
        self.remaining_hp -= 1;
        self.remaining_hp == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, origin: ({}, {}), orientation: {:?}, hp: {} }}",
            self.length, self.origin.row, self.origin.col, self.orientation, self.remaining_hp,
        )
    }
}
