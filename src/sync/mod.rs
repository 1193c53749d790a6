//! Seam to the external synchronization collaborator.
//!
//! After every completed selection or move the engine hands the collaborator
//! one [`GameSnapshot`] carrying the full board, turn, and outcome. Delivery
//! to remote participants is assumed at-least-once, so snapshots carry a
//! deterministic hash the receiving side can use to drop redeliveries; the
//! engine itself never publishes a half-mutated state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Piece, Team};
use crate::engine::Outcome;
use crate::zobrist::hash_state;

/// Full state of a match at one instant, as handed to the synchronization
/// collaborator. Pieces are listed sparsely as `(cell index, piece)` in
/// index order.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub pieces: Vec<(u8, Piece)>,
    pub selected: Option<u8>,
    pub legal_destinations: Vec<u8>,
    pub turn: Team,
    pub outcome: Outcome,
    /// Hash of (pieces, turn); selection state is excluded so reselecting
    /// does not change a position's identity.
    pub hash: u64,
}

impl GameSnapshot {
    /// Capture the current state. Called by the engine only once all
    /// mutations of the triggering operation have been applied.
    #[must_use]
    pub fn capture(board: &Board, turn: Team, outcome: Outcome) -> Self {
        GameSnapshot {
            pieces: board
                .occupied_cells()
                .map(|(cell, piece)| (cell.index() as u8, piece))
                .collect(),
            selected: board.selected().map(|cell| cell.index() as u8),
            legal_destinations: board
                .legal_destinations()
                .iter()
                .map(|cell| cell.index() as u8)
                .collect(),
            turn,
            outcome,
            hash: hash_state(board, turn),
        }
    }

    /// Piece at a cell in this snapshot, if any
    #[must_use]
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        let index = cell.index() as u8;
        self.pieces
            .iter()
            .find(|(at, _)| *at == index)
            .map(|(_, piece)| *piece)
    }
}

/// The synchronization collaborator's single entry point.
///
/// Implementations forward the snapshot to the other match participants;
/// the engine calls [`publish`](StatePublisher::publish) exactly once per
/// completed `select_for_move`/`apply_move` invocation, never batched and
/// never skipped.
pub trait StatePublisher {
    fn publish(&mut self, snapshot: &GameSnapshot);
}

/// Publisher that drops every snapshot. Useful for local-only matches and
/// as the default collaborator in tests and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPublisher;

impl StatePublisher for NullPublisher {
    fn publish(&mut self, _snapshot: &GameSnapshot) {}
}

impl<P: StatePublisher + ?Sized> StatePublisher for &mut P {
    fn publish(&mut self, snapshot: &GameSnapshot) {
        (**self).publish(snapshot);
    }
}
