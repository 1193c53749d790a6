//! Checkers board representation.
//!
//! A fixed 64-slot arena of optional pieces addressed by linear cell index,
//! plus the diagonal move generation shared by selection and chain-capture
//! continuations. Rule orchestration lives in [`crate::engine`].
//!
//! # Example
//! ```
//! use checkers_engine::board::Board;
//!
//! let board = Board::new();
//! assert_eq!(board.total_pieces(), 24);
//! ```

mod builder;
mod error;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::CellError;
pub use state::Board;
pub use types::{Cell, Piece, Rank, Team};

// Internal utilities shared with the engine
pub(crate) use movegen::Hop;
