use alloc::boxed::Box;
use log::info;
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, FireOutcome, FleetError},
    coordinate::Coordinate,
    config::FLEET,
    fleet::FleetGenerator,
    player::Actor,
};

/// The two seats of a match. The human seat fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Finished { loser: Side },
}

impl MatchStatus {
    pub fn winner(self) -> Option<Side> {
        match self {
            MatchStatus::InProgress => None,
            MatchStatus::Finished { loser } => Some(loser.opponent()),
        }
    }
}

/// Receives what happens during a match. Every method defaults to doing
/// nothing.
pub trait Observer {
    /// `side` is about to fire.
    fn turn_started(&mut self, _side: Side, _game: &Match) {}

    /// `side` fired at `target`; rejected shots are reported too.
    fn shot(&mut self, _side: Side, _target: Coordinate, _result: &Result<FireOutcome, BoardError>) {
    }

    /// The match ended.
    fn finished(&mut self, _winner: Side, _game: &Match) {}
}

impl Observer for () {}

fn check_fleet(board: &Board) -> Result<(), FleetError> {
    let lengths = board.ships().iter().map(|s| s.length());
    if lengths.eq(FLEET.iter().copied()) {
        Ok(())
    } else {
        Err(FleetError::Incomplete {
            ships: board.ships().len(),
        })
    }
}

/// A single game: both boards, both actors and whose turn it is.
pub struct Match {
    human_board: Board,
    automated_board: Board,
    human: Box<dyn Actor>,
    automated: Box<dyn Actor>,
    active: Side,
    status: MatchStatus,
    shots: usize,
}

impl Match {
    /// Wire boards to actors. The automated side's board is hidden.
    ///
    /// Both boards must carry the standard fleet, in placement order;
    /// otherwise no side could ever lose.
    pub fn new(
        human: Box<dyn Actor>,
        human_board: Board,
        automated: Box<dyn Actor>,
        mut automated_board: Board,
    ) -> Result<Self, FleetError> {
        check_fleet(&human_board)?;
        check_fleet(&automated_board)?;
        automated_board.set_hidden(true);
        let mut game = Match {
            human_board,
            automated_board,
            human,
            automated,
            active: Side::Human,
            status: MatchStatus::InProgress,
            shots: 0,
        };
        game.status = game.evaluate();
        Ok(game)
    }

    /// Start a match with a freshly generated fleet on each side.
    pub fn generate<R: Rng>(
        rng: &mut R,
        human: Box<dyn Actor>,
        automated: Box<dyn Actor>,
    ) -> Result<Self, FleetError> {
        let generator = FleetGenerator::new();
        let human_board = generator.generate(rng)?;
        let automated_board = generator.generate(rng)?;
        Self::new(human, human_board, automated, automated_board)
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human_board,
            Side::Automated => &self.automated_board,
        }
    }

    /// Side entitled to fire next.
    pub fn active(&self) -> Side {
        self.active
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Side> {
        self.status.winner()
    }

    /// Number of accepted shots so far, both sides together.
    pub fn shots(&self) -> usize {
        self.shots
    }

    fn evaluate(&self) -> MatchStatus {
        if self.human_board.fleet_destroyed() {
            MatchStatus::Finished { loser: Side::Human }
        } else if self.automated_board.fleet_destroyed() {
            MatchStatus::Finished {
                loser: Side::Automated,
            }
        } else {
            MatchStatus::InProgress
        }
    }

    /// Let the active side fire one accepted shot. The same side stays
    /// active after a hit or a sinking; a miss passes the turn.
    pub fn play_shot(&mut self, observer: &mut dyn Observer) -> anyhow::Result<MatchStatus> {
        if self.status != MatchStatus::InProgress {
            return Ok(self.status);
        }
        let side = self.active;
        observer.turn_started(side, self);

        let (actor, own, opponent) = match side {
            Side::Human => (&mut self.human, &self.human_board, &mut self.automated_board),
            Side::Automated => (&mut self.automated, &self.automated_board, &mut self.human_board),
        };
        let again = actor.take_turn(side, own, opponent, observer)?;
        self.shots += 1;

        self.status = self.evaluate();
        if let Some(winner) = self.status.winner() {
            info!("{:?} side wins after {} shots", winner, self.shots);
            observer.finished(winner, self);
        } else if !again {
            self.active = side.opponent();
        }
        Ok(self.status)
    }

    /// Play until one fleet is destroyed and return the winner.
    pub fn run(&mut self, observer: &mut dyn Observer) -> anyhow::Result<Side> {
        loop {
            if let Some(winner) = self.play_shot(observer)?.winner() {
                return Ok(winner);
            }
        }
    }
}
