#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod coordinate;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod render;
mod ship;

pub use bitboard::BitBoard;
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
