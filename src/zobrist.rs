//! Zobrist hashing for checkers positions.
//!
//! Provides deterministic 64-bit state hashes so snapshot receivers can
//! deduplicate redelivered publishes.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Team};

pub(crate) struct ZobristKeys {
    // piece_keys[rank][team][cell_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 2],
    pub(crate) dark_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Fixed seed for reproducibility
        let mut piece_keys = [[[0; 64]; 2]; 2];

        for rank in &mut piece_keys {
            for team in rank.iter_mut() {
                for key in team.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let dark_to_move_key = rng.gen();

        ZobristKeys {
            piece_keys,
            dark_to_move_key,
        }
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Hash of the piece placement plus side to move. Selection state is not
/// part of the hash.
#[must_use]
pub(crate) fn hash_state(board: &Board, turn: Team) -> u64 {
    let mut hash = 0u64;
    for (cell, piece) in board.occupied_cells() {
        hash ^= ZOBRIST.piece_keys[piece.rank().index()][piece.team().index()][cell.index()];
    }
    if turn == Team::Dark {
        hash ^= ZOBRIST.dark_to_move_key;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Cell, Rank};

    #[test]
    fn test_hash_is_deterministic() {
        let board = Board::new();
        assert_eq!(hash_state(&board, Team::Dark), hash_state(&board, Team::Dark));
    }

    #[test]
    fn test_turn_changes_hash() {
        let board = Board::new();
        assert_ne!(hash_state(&board, Team::Dark), hash_state(&board, Team::Light));
    }

    #[test]
    fn test_placement_changes_hash() {
        let a = BoardBuilder::new()
            .piece(Cell::from_index(5).unwrap(), Team::Dark, Rank::Man)
            .build();
        let b = BoardBuilder::new()
            .piece(Cell::from_index(5).unwrap(), Team::Dark, Rank::King)
            .build();
        let c = BoardBuilder::new()
            .piece(Cell::from_index(12).unwrap(), Team::Dark, Rank::Man)
            .build();
        assert_ne!(hash_state(&a, Team::Dark), hash_state(&b, Team::Dark));
        assert_ne!(hash_state(&a, Team::Dark), hash_state(&c, Team::Dark));
    }

    #[test]
    fn test_selection_does_not_change_hash() {
        let mut board = Board::new();
        let before = hash_state(&board, Team::Dark);
        board.select(Cell::from_index(1).unwrap());
        assert_eq!(hash_state(&board, Team::Dark), before);
    }
}
