use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;

use super::Actor;

/// Computer side firing at uniformly random cells, with no memory of its
/// previous shots. Repeats are rejected by the board and resampled.
pub struct AutomatedActor<R = SmallRng> {
    rng: R,
}

impl<R: Rng> AutomatedActor<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "std")]
impl AutomatedActor<SmallRng> {
    /// Actor seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Actor for AutomatedActor<R> {
    fn choose_target(&mut self, _own: &Board, _opponent: &Board) -> anyhow::Result<Coordinate> {
        Ok(Coordinate::new(
            self.rng.random_range(0..BOARD_SIZE as i32),
            self.rng.random_range(0..BOARD_SIZE as i32),
        ))
    }
}
