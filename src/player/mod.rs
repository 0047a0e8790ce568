//! Actor trait and implementations
//!
//! An actor decides where its side fires next:
//! - AutomatedActor: uniform random targets
//! - HumanActor: moves read from a text input

use log::debug;

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::game::{Observer, Side};

/// Interface implemented by the two kinds of side.
pub trait Actor {
    /// Choose the next cell to fire at on `opponent`.
    fn choose_target(&mut self, own: &Board, opponent: &Board) -> anyhow::Result<Coordinate>;

    /// Fire at `opponent` until a shot is accepted, reporting every attempt
    /// to `observer`. Rejected targets are retried within the same turn.
    ///
    /// Returns `true` when the shot hit or sank a ship and this side fires
    /// again.
    fn take_turn(
        &mut self,
        side: Side,
        own: &Board,
        opponent: &mut Board,
        observer: &mut dyn Observer,
    ) -> anyhow::Result<bool> {
        loop {
            let target = self.choose_target(own, opponent)?;
            let result = opponent.fire(target);
            observer.shot(side, target, &result);
            match result {
                Ok(outcome) => return Ok(outcome.fires_again()),
                Err(e) => debug!("{:?} retargets after ({}): {}", side, target, e),
            }
        }
    }
}

mod ai;
pub use ai::AutomatedActor;

#[cfg(feature = "std")]
mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_move, HumanActor};
