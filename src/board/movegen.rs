//! Diagonal move generation: single steps, jumps, and chain continuations.

use super::{Board, Cell, Rank, Team};

/// Single-cell diagonal deltas in linear index space.
const UP_LEFT: i32 = -9;
const UP_RIGHT: i32 = -7;
const DOWN_LEFT: i32 = 7;
const DOWN_RIGHT: i32 = 9;

const DELTAS: [i32; 4] = [UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];

/// One hop a piece can make from its current cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Hop {
    /// Move one cell diagonally into an empty cell
    Step(Cell),
    /// Jump an adjacent enemy piece into the empty cell beyond it
    Jump { over: Cell, to: Cell },
}

impl Hop {
    /// Destination cell of the hop
    #[inline]
    #[must_use]
    pub(crate) fn destination(self) -> Cell {
        match self {
            Hop::Step(to) => to,
            Hop::Jump { to, .. } => to,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_jump(self) -> bool {
        matches!(self, Hop::Jump { .. })
    }
}

impl Board {
    /// All hops available to the piece on `origin` as the first hop of a
    /// turn: single steps into empty cells plus jumps over adjacent enemy
    /// pieces. Empty origin yields an empty list.
    ///
    /// Men only keep their forward pair of deltas; kings keep all four.
    /// Column 0/7 and row 0/7 suppression prevents horizontal wraparound
    /// and vertical overflow, and the jump landing is additionally rejected
    /// when the origin/landing column pairing indicates an edge wrap.
    pub(crate) fn hops_from(&self, origin: Cell) -> Vec<Hop> {
        let piece = match self.get(origin) {
            Some(piece) => piece,
            None => return Vec::new(),
        };

        let index = origin.index() as i32;
        let row = origin.row();
        let col = origin.col();
        let mut hops = Vec::new();

        for delta in DELTAS {
            // Men advance only toward the opponent's home row.
            if piece.rank() == Rank::Man && delta.signum() != piece.team().forward_sign() {
                continue;
            }
            // Edge suppression keeps `index + delta` on the board and on an
            // adjacent diagonal (no horizontal wrap).
            if col == 0 && (delta == UP_LEFT || delta == DOWN_LEFT) {
                continue;
            }
            if col == 7 && (delta == UP_RIGHT || delta == DOWN_RIGHT) {
                continue;
            }
            if row == 0 && delta < 0 {
                continue;
            }
            if row == 7 && delta > 0 {
                continue;
            }

            let adjacent = Cell::from_index_unchecked((index + delta) as usize);
            match self.get(adjacent) {
                None => hops.push(Hop::Step(adjacent)),
                Some(other) if other.team() != piece.team() => {
                    let landing = index + 2 * delta;
                    if !(0..64).contains(&landing) {
                        continue;
                    }
                    let landing_col = (landing % 8) as usize;
                    // Jump wrap guard over the a/h file seam.
                    if (col == 1 && landing_col == 7) || (col == 6 && landing_col == 0) {
                        continue;
                    }
                    let landing = Cell::from_index_unchecked(landing as usize);
                    if self.has_piece(landing) {
                        continue;
                    }
                    hops.push(Hop::Jump {
                        over: adjacent,
                        to: landing,
                    });
                }
                Some(_) => {}
            }
        }

        hops
    }

    /// Landing cells of the jumps available from `origin`. Used for chain
    /// continuations, where only captures are offered.
    pub(crate) fn jump_landings_from(&self, origin: Cell) -> Vec<Cell> {
        self.hops_from(origin)
            .into_iter()
            .filter(|hop| hop.is_jump())
            .map(Hop::destination)
            .collect()
    }

    /// True when any piece of `team` has at least one hop available
    #[must_use]
    pub fn has_any_move(&self, team: Team) -> bool {
        self.occupied_cells()
            .filter(|(_, piece)| piece.team() == team)
            .any(|(cell, _)| !self.hops_from(cell).is_empty())
    }
}
