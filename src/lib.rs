pub mod board;
pub mod engine;
pub mod sync;
pub mod zobrist;

pub use board::{Board, BoardBuilder, Cell, CellError, Piece, Rank, Team};
pub use engine::{Engine, Game, MoveResult, Outcome};
pub use sync::{GameSnapshot, NullPublisher, StatePublisher};
