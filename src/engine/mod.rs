//! Rule orchestration for one checkers match.
//!
//! The [`Engine`] owns the mutable match state it was wired to at
//! construction (a [`Board`] and a [`Game`] record) plus the handle to the
//! synchronization collaborator. It is the sole writer of both; the
//! presentation and session layers observe through the read-only query
//! surface and the snapshots the collaborator receives.
//!
//! Control flow per input: the UI resolves a click to one
//! [`select_for_move`](Engine::select_for_move) or
//! [`apply_move`](Engine::apply_move) call, fully processed before the next
//! input, and every completed call ends in exactly one publish.

mod game;

pub use game::{Game, Outcome};

#[cfg(feature = "logging")]
use log::debug;

use crate::board::{Board, Cell, Hop, Piece, Rank, Team};
use crate::sync::{GameSnapshot, StatePublisher};

/// What an [`Engine::apply_move`] call did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveResult {
    /// The move completed the turn; the other team moves next
    TurnComplete,
    /// The move was a capture with further jumps available; the same piece
    /// must continue and the turn has not changed
    ChainContinues,
    /// The call violated its preconditions and changed nothing
    Rejected,
}

/// The rule engine for a single match.
///
/// Constructing one wires it to a match's mutable state and its
/// synchronization collaborator; there are no process-wide globals. All
/// rule failures are policy rejections, never panics.
pub struct Engine<P: StatePublisher> {
    board: Board,
    game: Game,
    publisher: P,
    /// Cell of a committed, unfinished capture chain. While set, only that
    /// piece's jumps are legal and the chain cannot be cancelled.
    chain: Option<Cell>,
}

impl<P: StatePublisher> Engine<P> {
    /// Wire an engine to one match's state and its publisher. Must happen
    /// before any selection or move is processed.
    pub fn new(game: Game, board: Board, publisher: P) -> Self {
        Engine {
            board,
            game,
            publisher,
            chain: None,
        }
    }

    /// Engine over a fresh standard match
    pub fn standard(publisher: P) -> Self {
        Engine::new(Game::new(), Board::new(), publisher)
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Handle a click on `index` while awaiting a selection.
    ///
    /// A cell holding a piece of the side to move becomes the selection and
    /// its legal destinations are computed; an empty cell, an opponent's
    /// cell, or an out-of-range index clears the selection instead. Either
    /// way the updated state is published so peers see the highlight.
    ///
    /// Once a capture chain is committed the selection is locked to the
    /// chain piece: the requested cell is ignored and the chain cell is
    /// re-armed with its jump destinations.
    pub fn select_for_move(&mut self, index: usize) {
        if self.game.outcome().is_over() {
            return;
        }

        if let Some(origin) = self.chain {
            self.arm_chain_selection(origin);
            self.publish();
            return;
        }

        match Cell::from_index(index) {
            Some(cell)
                if self
                    .board
                    .get(cell)
                    .is_some_and(|piece| piece.team() == self.game.turn()) =>
            {
                self.arm_selection(cell);
                #[cfg(feature = "logging")]
                debug!("selected {cell} with {} destinations", self.board.legal_destinations().len());
            }
            _ => {
                self.board.clear_selection();
            }
        }

        self.publish();
    }

    /// Apply the previously selected piece's move to `index`.
    ///
    /// The destination is expected to come from the offered legal set; a
    /// destination outside it, an out-of-range index, a missing selection,
    /// or a finished match is rejected without touching the board and
    /// without publishing.
    pub fn apply_move(&mut self, index: usize) -> MoveResult {
        if self.game.outcome().is_over() {
            return MoveResult::Rejected;
        }
        let destination = match Cell::from_index(index) {
            Some(cell) => cell,
            None => return MoveResult::Rejected,
        };
        let origin = match self.board.selected() {
            Some(cell) => cell,
            None => return MoveResult::Rejected,
        };
        if !self.board.is_legal_destination(destination) {
            return MoveResult::Rejected;
        }
        let piece = match self.board.remove(origin) {
            Some(piece) => piece,
            None => return MoveResult::Rejected,
        };

        // A destination two cells away is a jump; the captured piece sits
        // on the arithmetic midpoint.
        let delta = destination.index() as i32 - origin.index() as i32;
        let captured = if delta.abs() >= 14 {
            let over = Cell::from_index_unchecked((origin.index() + destination.index()) / 2);
            self.board.remove(over)
        } else {
            None
        };

        let piece = self.promote_if_due(piece, destination);
        self.board.place(destination, piece);
        self.board.clear_selection();

        #[cfg(feature = "logging")]
        debug!(
            "{} moved {origin} -> {destination}{}",
            piece.team(),
            if captured.is_some() { " (capture)" } else { "" }
        );

        // A capture with further jumps available keeps the turn on the
        // same piece; the chain runs to completion.
        if captured.is_some() && !self.board.jump_landings_from(destination).is_empty() {
            self.chain = Some(destination);
            self.arm_chain_selection(destination);
            self.publish();
            return MoveResult::ChainContinues;
        }

        self.chain = None;
        self.game.toggle_turn();
        self.evaluate_termination();
        self.publish();
        MoveResult::TurnComplete
    }

    // ------------------------------------------------------------------
    // Read-only query surface (consumed by rendering)
    // ------------------------------------------------------------------

    /// Piece at an index; out-of-range indices answer `None`
    #[must_use]
    pub fn piece_at(&self, index: usize) -> Option<Piece> {
        Cell::from_index(index).and_then(|cell| self.board.get(cell))
    }

    #[must_use]
    pub fn has_piece(&self, index: usize) -> bool {
        self.piece_at(index).is_some()
    }

    #[must_use]
    pub fn team_at(&self, index: usize) -> Option<Team> {
        self.piece_at(index).map(Piece::team)
    }

    #[must_use]
    pub fn rank_at(&self, index: usize) -> Option<Rank> {
        self.piece_at(index).map(Piece::rank)
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        Cell::from_index(index).is_some_and(|cell| self.board.selected() == Some(cell))
    }

    #[must_use]
    pub fn is_legal_destination(&self, index: usize) -> bool {
        Cell::from_index(index).is_some_and(|cell| self.board.is_legal_destination(cell))
    }

    #[must_use]
    pub fn current_turn(&self) -> Team {
        self.game.turn()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Snapshot of the current state, as the publisher would receive it
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.board, self.game.turn(), self.game.outcome())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Select `origin` and offer its full first-hop destination set
    fn arm_selection(&mut self, origin: Cell) {
        let destinations = self
            .board
            .hops_from(origin)
            .into_iter()
            .map(Hop::destination)
            .collect();
        self.board.select(origin);
        self.board.set_legal_destinations(destinations);
    }

    /// Select `origin` mid-chain, offering only its jump landings
    fn arm_chain_selection(&mut self, origin: Cell) {
        let landings = self.board.jump_landings_from(origin);
        self.board.select(origin);
        self.board.set_legal_destinations(landings);
    }

    /// Crown a man arriving on the opponent's home row
    fn promote_if_due(&self, piece: Piece, destination: Cell) -> Piece {
        if piece.rank() == Rank::Man && destination.row() == piece.team().crowning_row() {
            piece.crowned()
        } else {
            piece
        }
    }

    /// Runs only when the turn has just toggled: the side now to move loses
    /// if it has no pieces or no legal move across all of its pieces.
    fn evaluate_termination(&mut self) {
        let mover = self.game.turn();
        if self.board.count_pieces(mover) == 0 || !self.board.has_any_move(mover) {
            self.game.record_win(mover.opponent());
            #[cfg(feature = "logging")]
            debug!("match over: {}", self.game.outcome());
        }
    }

    fn publish(&mut self) {
        let snapshot = GameSnapshot::capture(&self.board, self.game.turn(), self.game.outcome());
        self.publisher.publish(&snapshot);
    }
}
