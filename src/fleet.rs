//! Random fleet layout.

use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::FleetError;
use crate::config::{BOARD_SIZE, FLEET, MAX_BOARD_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Produces boards carrying a full, randomly placed fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetGenerator {
    max_attempts: usize,
    max_boards: usize,
}

impl FleetGenerator {
    /// Generator with the standard budgets.
    pub const fn new() -> Self {
        Self {
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_boards: MAX_BOARD_ATTEMPTS,
        }
    }

    /// Generator with custom budgets: placement attempts per board and
    /// boards per [`generate`](Self::generate) call.
    pub const fn with_limits(max_attempts: usize, max_boards: usize) -> Self {
        Self {
            max_attempts,
            max_boards,
        }
    }

    /// Try to lay out the fleet on one fresh board.
    ///
    /// Ships are placed longest first, each at a uniformly random origin and
    /// orientation, resampling on a rejected placement. The attempt counter
    /// is shared by the whole fleet.
    pub fn try_generate<R: Rng>(&self, rng: &mut R) -> Result<Board, FleetError> {
        let mut board = Board::new(false);
        let mut attempts = 0;
        for &length in FLEET.iter() {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    return Err(FleetError::Exhausted {
                        attempts: self.max_attempts,
                    });
                }
                if board.place_ship(random_ship(rng, length)).is_ok() {
                    break;
                }
            }
        }
        debug!("fleet placed after {} attempts", attempts);
        Ok(board)
    }

    /// Generate boards until one carries the full fleet.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Board, FleetError> {
        for boards in 1..=self.max_boards {
            match self.try_generate(rng) {
                Ok(board) => return Ok(board),
                Err(e) => warn!("discarding board {}: {}", boards, e),
            }
        }
        Err(FleetError::GaveUp {
            boards: self.max_boards,
        })
    }
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A ship of `length` at a uniformly random origin and orientation.
pub fn random_ship<R: Rng>(rng: &mut R, length: usize) -> Ship {
    let origin = Coordinate::new(
        rng.random_range(0..BOARD_SIZE as i32),
        rng.random_range(0..BOARD_SIZE as i32),
    );
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(length, origin, orientation)
}
