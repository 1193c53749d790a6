//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than mutating a board
//! by hand in tests or embedding code.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Cell, Rank, Team};
//!
//! let board = BoardBuilder::new()
//!     .piece(Cell::from_index(5).unwrap(), Team::Dark, Rank::Man)
//!     .piece(Cell::from_index(14).unwrap(), Team::Light, Rank::Man)
//!     .build();
//! assert_eq!(board.total_pieces(), 2);
//! ```

use super::{Board, Cell, Piece, Rank, Team};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Cell, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder preloaded with the standard starting layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = BoardBuilder::new();
        for (cell, piece) in Board::new().occupied_cells() {
            builder.pieces.push((cell, piece));
        }
        builder
    }

    /// Add a piece to the position. Later placements on the same cell win.
    #[must_use]
    pub fn piece(mut self, cell: Cell, team: Team, rank: Rank) -> Self {
        let piece = match rank {
            Rank::Man => Piece::man(team),
            Rank::King => Piece::king(team),
        };
        self.pieces.push((cell, piece));
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (cell, piece) in self.pieces {
            board.place(cell, piece);
        }
        board
    }
}
