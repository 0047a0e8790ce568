use crate::bitboard::BitBoard;

pub const BOARD_SIZE: usize = 6;
pub const NUM_SHIPS: usize = 7;

/// Ship lengths of a full fleet, in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in a full fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for one board before it is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 3000;

/// Fresh boards tried before fleet generation gives up entirely.
pub const MAX_BOARD_ATTEMPTS: usize = 100;

/// Set of cells on a game board.
pub type CellSet = BitBoard<u64, BOARD_SIZE>;
