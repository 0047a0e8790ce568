//! Common types for the rule engine: shot outcomes and errors.

use core::fmt;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// No ship at the target.
    Miss,
    /// A ship segment was destroyed and the ship is still afloat.
    Hit,
    /// The last segment of a ship was destroyed.
    Sunk,
}

impl FireOutcome {
    /// Whether the firing side shoots again.
    pub fn fires_again(self) -> bool {
        !matches!(self, FireOutcome::Miss)
    }
}

impl fmt::Display for FireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireOutcome::Miss => write!(f, "Miss!"),
            FireOutcome::Hit => write!(f, "Hit!"),
            FireOutcome::Sunk => write!(f, "Sunk!"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Target coordinate lies outside the grid.
    OutOfBounds,
    /// Target was already fired upon or lies in a sunk ship's margin.
    AlreadyTargeted,
    /// Ship is too long, leaves the grid, overlaps a ship or touches one.
    WrongShipPlacement,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinate is off the board"),
            BoardError::AlreadyTargeted => write!(f, "That cell has already been targeted"),
            BoardError::WrongShipPlacement => write!(f, "Ship cannot be placed there"),
        }
    }
}

impl core::error::Error for BoardError {}

/// Errors returned by fleet generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// The placement budget for one board ran out.
    Exhausted { attempts: usize },
    /// No board produced a full fleet.
    GaveUp { boards: usize },
    /// A board handed to a match does not carry the standard fleet.
    Incomplete { ships: usize },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::Exhausted { attempts } => {
                write!(f, "Fleet did not fit after {} placement attempts", attempts)
            }
            FleetError::GaveUp { boards } => {
                write!(f, "No valid fleet layout after {} boards", boards)
            }
            FleetError::Incomplete { ships } => {
                write!(f, "Board carries {} ships, not the standard fleet", ships)
            }
        }
    }
}

impl core::error::Error for FleetError {}
