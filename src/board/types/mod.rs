//! Core checkers types.
//!
//! - `Team`, `Rank`, `Piece` - checker identity
//! - `Cell` - linear 0-63 board addressing

mod cell;
mod piece;

pub use cell::Cell;
pub use piece::{Piece, Rank, Team};
