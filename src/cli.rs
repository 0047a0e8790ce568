//! Console presentation of a match: greeting, boards and shot messages.

#![cfg(feature = "std")]

use std::io::{self, Stdout, Write};

use crate::{BoardError, Coordinate, FireOutcome, Match, Observer, Side};

const RULE: &str = "--------------------";

/// Print the greeting banner and the move format.
pub fn greet<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "-------------------")?;
    writeln!(out, "    Welcome to     ")?;
    writeln!(out, "    Sea Battle     ")?;
    writeln!(out, "-------------------")?;
    writeln!(out, " move format: x y  ")?;
    writeln!(out, " x - row number    ")?;
    writeln!(out, " y - column number ")
}

/// Observer writing a human-readable account of the match.
pub struct ConsoleObserver<W = Stdout> {
    out: W,
}

impl ConsoleObserver<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn show(&mut self, game: &Match) -> io::Result<()> {
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "Your board:")?;
        writeln!(self.out, "{}", game.board(Side::Human))?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "Computer's board:")?;
        writeln!(self.out, "{}", game.board(Side::Automated))
    }
}

// Console output is best effort; a closed stdout must not abort the match.
impl<W: Write> Observer for ConsoleObserver<W> {
    fn turn_started(&mut self, side: Side, game: &Match) {
        let _ = self.show(game).and_then(|()| {
            writeln!(self.out, "{}", RULE)?;
            match side {
                Side::Human => writeln!(self.out, "Your turn!"),
                Side::Automated => writeln!(self.out, "Computer's turn!"),
            }
        });
    }

    fn shot(&mut self, side: Side, target: Coordinate, result: &Result<FireOutcome, BoardError>) {
        if side == Side::Automated {
            let _ = writeln!(self.out, "Computer's move: {}", target);
        }
        let _ = match result {
            Ok(outcome) => writeln!(self.out, "{}", outcome),
            Err(e) => writeln!(self.out, "{}", e),
        };
    }

    fn finished(&mut self, winner: Side, game: &Match) {
        let _ = self.show(game).and_then(|()| {
            writeln!(self.out, "{}", RULE)?;
            match winner {
                Side::Human => writeln!(self.out, "You win!"),
                Side::Automated => writeln!(self.out, "Computer wins!"),
            }
        });
    }
}
