//! Piece, rank, and team types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides of a match.
///
/// Dark starts on rows 0-2 and moves toward increasing index; Light starts
/// on rows 5-7 and moves toward decreasing index. Dark moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Team {
    Light,
    Dark,
}

impl Team {
    /// Both teams in index order (Light=0, Dark=1)
    pub const BOTH: [Team; 2] = [Team::Light, Team::Dark];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Team::Light => 0,
            Team::Dark => 1,
        }
    }

    /// Returns the opposing team
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::Light => Team::Dark,
            Team::Dark => Team::Light,
        }
    }

    /// Row on which this team's men are crowned (0 for Light, 7 for Dark)
    #[inline]
    #[must_use]
    pub(crate) const fn crowning_row(self) -> usize {
        match self {
            Team::Light => 0,
            Team::Dark => 7,
        }
    }

    /// Forward index direction for this team's men (-1 for Light, +1 for Dark)
    #[inline]
    #[must_use]
    pub(crate) const fn forward_sign(self) -> i32 {
        match self {
            Team::Light => -1,
            Team::Dark => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Light => write!(f, "Light"),
            Team::Dark => write!(f, "Dark"),
        }
    }
}

/// Checker rank: a man advances only toward the opponent's home row, a king
/// moves in all four diagonal directions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    Man,
    King,
}

impl Rank {
    /// Both ranks in index order (Man=0, King=1)
    pub const BOTH: [Rank; 2] = [Rank::Man, Rank::King];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Rank::Man => 0,
            Rank::King => 1,
        }
    }
}

/// A checker on the board. The team is fixed for the piece's lifetime; the
/// rank changes only through promotion ([`Piece::crowned`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    team: Team,
    rank: Rank,
}

impl Piece {
    /// Create a man of the given team
    #[inline]
    #[must_use]
    pub const fn man(team: Team) -> Piece {
        Piece {
            team,
            rank: Rank::Man,
        }
    }

    /// Create a king of the given team
    #[inline]
    #[must_use]
    pub const fn king(team: Team) -> Piece {
        Piece {
            team,
            rank: Rank::King,
        }
    }

    #[inline]
    #[must_use]
    pub const fn team(self) -> Team {
        self.team
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// The same piece promoted to king; the only rank transition
    #[inline]
    #[must_use]
    pub const fn crowned(self) -> Piece {
        Piece::king(self.team)
    }

    /// Character for board dumps: l/d for men, L/D for kings
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.team, self.rank) {
            (Team::Light, Rank::Man) => 'l',
            (Team::Light, Rank::King) => 'L',
            (Team::Dark, Rank::Man) => 'd',
            (Team::Dark, Rank::King) => 'D',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
