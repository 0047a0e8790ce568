//! Game board state: ship placements, shot history and the cell grid.

use alloc::vec::Vec;
use log::{debug, info};

use crate::common::{BoardError, FireOutcome};
use crate::config::{CellSet, BOARD_SIZE, NUM_SHIPS};
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Undamaged ship segment.
    Ship,
    Hit,
    Miss,
    /// Margin painted around a sunk ship; no ship can be there.
    Margin,
}

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// One side's board.
///
/// Placement and firing track separate cell sets: `placement_blocked` holds
/// every ship cell and its one-cell halo, `fired_upon` holds every shot and
/// the margin of every sunk ship.
#[derive(Clone)]
pub struct Board {
    hidden: bool,
    grid: Grid,
    placement_blocked: CellSet,
    fired_upon: CellSet,
    ships: Vec<Ship>,
    destroyed_count: usize,
}

impl Board {
    /// Create an empty board. `hidden` only affects rendering.
    pub fn new(hidden: bool) -> Self {
        Board {
            hidden,
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            placement_blocked: CellSet::new(),
            fired_upon: CellSet::new(),
            ships: Vec::with_capacity(NUM_SHIPS),
            destroyed_count: 0,
        }
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// State of the cell at `coord`, `None` when off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        if Self::is_out_of_bounds(coord) {
            None
        } else {
            Some(self.grid[coord.row as usize][coord.col as usize])
        }
    }

    /// Placed ships in placement order, sunk ones included.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed_count
    }

    /// Number of placed ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.len() - self.destroyed_count
    }

    /// Returns `true` once a full fleet has been sunk.
    pub fn fleet_destroyed(&self) -> bool {
        self.destroyed_count >= NUM_SHIPS
    }

    /// Cells no further ship may occupy.
    pub fn placement_blocked(&self) -> CellSet {
        self.placement_blocked
    }

    /// Cells that can no longer be fired upon.
    pub fn fired_upon(&self) -> CellSet {
        self.fired_upon
    }

    pub fn is_out_of_bounds(coord: Coordinate) -> bool {
        !CellSet::in_bounds(coord)
    }

    fn set_cell(&mut self, coord: Coordinate, cell: Cell) {
        self.grid[coord.row as usize][coord.col as usize] = cell;
    }

    /// Mark the ship's cells and their eight neighbours.
    ///
    /// Without `paint` they are blocked for placement. With `paint` they are
    /// recorded as fired upon and every newly covered cell is painted as
    /// [`Cell::Margin`]. Off-grid neighbours are skipped by the cell sets.
    fn mark_halo(&mut self, ship: &Ship, paint: bool) {
        for cell in ship.occupied_cells() {
            for near in cell.neighbourhood() {
                if !paint {
                    self.placement_blocked.insert(near);
                } else if self.fired_upon.insert(near) {
                    self.set_cell(near, Cell::Margin);
                }
            }
        }
    }

    /// Place `ship`, rejecting it if it is empty or longer than the board,
    /// or if any cell is off the board, occupied or adjacent to another
    /// ship. The board is unchanged on error.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.length() == 0 || ship.length() > BOARD_SIZE {
            return Err(BoardError::WrongShipPlacement);
        }
        for cell in ship.occupied_cells() {
            if Self::is_out_of_bounds(cell) || self.placement_blocked.contains(cell) {
                return Err(BoardError::WrongShipPlacement);
            }
        }
        for cell in ship.occupied_cells() {
            self.set_cell(cell, Cell::Ship);
            self.placement_blocked.insert(cell);
        }
        self.ships.push(ship);
        self.mark_halo(&ship, false);
        debug!("placed {:?}", ship);
        Ok(())
    }

    /// Resolve a shot at `target`. The board is unchanged on error.
    pub fn fire(&mut self, target: Coordinate) -> Result<FireOutcome, BoardError> {
        if Self::is_out_of_bounds(target) {
            return Err(BoardError::OutOfBounds);
        }
        // a destroyed segment stays destroyed even after the history is reset
        if self.fired_upon.contains(target) || self.cell(target) == Some(Cell::Hit) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.fired_upon.insert(target);

        let Some(idx) = self.ships.iter().position(|s| s.occupies(target)) else {
            self.set_cell(target, Cell::Miss);
            debug!("shot at ({}) missed", target);
            return Ok(FireOutcome::Miss);
        };

        self.set_cell(target, Cell::Hit);
        if !self.ships[idx].take_hit() {
            debug!("shot at ({}) hit {:?}", target, self.ships[idx]);
            return Ok(FireOutcome::Hit);
        }

        let wreck = self.ships[idx];
        self.destroyed_count += 1;
        self.mark_halo(&wreck, true);
        info!(
            "ship of length {} sunk at ({}), {} remaining",
            wreck.length(),
            target,
            self.remaining_ships()
        );
        Ok(FireOutcome::Sunk)
    }

    /// Forget the shot history, including sunk ships' margins. Grid glyphs
    /// and ship damage are kept, and hit segments still reject shots.
    pub fn reset_shot_history(&mut self) {
        self.fired_upon.clear_all();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(false)
    }
}

impl core::fmt::Debug for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Board {{\n  hidden: {},\n  destroyed: {},\n  ships: {:?},\n  placement_blocked: {:?},\n  fired_upon: {:?}\n}}",
            self.hidden, self.destroyed_count, self.ships, self.placement_blocked, self.fired_upon
        )
    }
}
