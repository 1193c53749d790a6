//! Board storage: a 64-slot piece arena plus the transient selection cursor.

use super::{Cell, Piece, Team};

/// Starting cells for the twelve Dark men (rows 0-2).
pub(crate) const DARK_START: [usize; 12] = [1, 3, 5, 7, 8, 10, 12, 14, 17, 19, 21, 23];

/// Starting cells for the twelve Light men (rows 5-7).
pub(crate) const LIGHT_START: [usize; 12] = [40, 42, 44, 46, 49, 51, 53, 55, 56, 58, 60, 62];

/// Piece storage for one match.
///
/// Pure storage plus a selection cursor; no rule knowledge lives here. The
/// selection and legal-destination list are transient UI-facing state that
/// the engine rewrites on every selection.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [Option<Piece>; 64],
    selected: Option<Cell>,
    legal_destinations: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board with the standard 24-piece starting layout
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for index in DARK_START {
            board.cells[index] = Some(Piece::man(Team::Dark));
        }
        for index in LIGHT_START {
            board.cells[index] = Some(Piece::man(Team::Light));
        }
        board
    }

    /// Board with no pieces
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [None; 64],
            selected: None,
            legal_destinations: Vec::new(),
        }
    }

    /// Put a piece on a cell, replacing any previous occupant
    pub fn place(&mut self, cell: Cell, piece: Piece) {
        self.cells[cell.index()] = Some(piece);
    }

    /// Take the piece off a cell, returning it if one was there
    pub fn remove(&mut self, cell: Cell) -> Option<Piece> {
        self.cells[cell.index()].take()
    }

    /// Piece on a cell, if any
    #[inline]
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.index()]
    }

    #[inline]
    #[must_use]
    pub fn has_piece(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_some()
    }

    /// Set the selection cursor. Clears the previous legal-destination
    /// list; the caller must ensure the cell is occupied.
    pub fn select(&mut self, cell: Cell) {
        debug_assert!(self.has_piece(cell), "selected cell must hold a piece");
        self.selected = Some(cell);
        self.legal_destinations.clear();
    }

    /// Drop the selection cursor and the legal-destination list
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_destinations.clear();
    }

    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    /// Piece under the selection cursor, if a selection is armed
    #[must_use]
    pub fn selected_piece(&self) -> Option<Piece> {
        self.selected.and_then(|cell| self.get(cell))
    }

    /// Replace the legal-destination list. Valid only between a selection
    /// and the following move or deselection.
    pub fn set_legal_destinations(&mut self, destinations: Vec<Cell>) {
        self.legal_destinations = destinations;
    }

    #[inline]
    #[must_use]
    pub fn legal_destinations(&self) -> &[Cell] {
        &self.legal_destinations
    }

    #[must_use]
    pub fn is_legal_destination(&self, cell: Cell) -> bool {
        self.legal_destinations.contains(&cell)
    }

    /// Iterate over all occupied cells with their pieces, in index order
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|piece| (Cell::from_index_unchecked(index), piece)))
    }

    /// Number of pieces a team has on the board
    #[must_use]
    pub fn count_pieces(&self, team: Team) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|piece| piece.team() == team)
            .count()
    }

    /// Total number of pieces on the board
    #[must_use]
    pub fn total_pieces(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}
