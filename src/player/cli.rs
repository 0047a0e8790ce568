#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, Stdout, Write};
use std::string::String;

use anyhow::bail;

use crate::board::Board;
use crate::coordinate::Coordinate;

use super::Actor;

/// Human side reading moves as two one-based numbers, `row col`.
pub struct HumanActor<I, O> {
    input: I,
    output: O,
}

impl HumanActor<io::StdinLock<'static>, Stdout> {
    /// Actor playing on the process's terminal.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> HumanActor<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Prompt until a well-formed move is entered. Bounds are left to the
    /// board.
    fn read_move(&mut self) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before a move was entered");
            }
            match parse_move(&line) {
                Ok(coord) => return Ok(coord),
                Err(msg) => writeln!(self.output, " {} ", msg)?,
            }
        }
    }
}

/// Parse `row col` as typed by a person (one-based) into a coordinate.
pub fn parse_move(line: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts[..] else {
        return Err("Enter 2 coordinates!".to_string());
    };
    let number = |s: &str| -> Option<i32> {
        if s.chars().all(|c| c.is_ascii_digit()) {
            s.parse().ok()
        } else {
            None
        }
    };
    match (number(row), number(col)) {
        (Some(r), Some(c)) => Ok(Coordinate::from_one_based(r, c)),
        _ => Err("Coordinates must be numbers".to_string()),
    }
}

impl<I: BufRead, O: Write> Actor for HumanActor<I, O> {
    fn choose_target(&mut self, _own: &Board, _opponent: &Board) -> anyhow::Result<Coordinate> {
        self.read_move()
    }
}
