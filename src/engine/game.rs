//! The per-match game record: whose turn it is and the match outcome.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Team;

/// Match outcome. Leaves `InProgress` at most once and never returns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    InProgress,
    LightWins,
    DarkWins,
}

impl Outcome {
    /// The winning variant for a team
    #[inline]
    #[must_use]
    pub const fn win_for(team: Team) -> Outcome {
        match team {
            Team::Light => Outcome::LightWins,
            Team::Dark => Outcome::DarkWins,
        }
    }

    /// Winner, if the match is decided
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Team> {
        match self {
            Outcome::InProgress => None,
            Outcome::LightWins => Some(Team::Light),
            Outcome::DarkWins => Some(Team::Dark),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::LightWins => write!(f, "Light wins"),
            Outcome::DarkWins => write!(f, "Dark wins"),
        }
    }
}

/// Mutable per-match record. Created once per match, written exclusively by
/// the engine, read by the session and presentation layers.
#[derive(Clone, Debug)]
pub struct Game {
    turn: Team,
    outcome: Outcome,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh match record. Dark moves first in the standard setup.
    #[must_use]
    pub fn new() -> Self {
        Game {
            turn: Team::Dark,
            outcome: Outcome::InProgress,
        }
    }

    /// Match record with an explicit side to move (for set-up positions)
    #[must_use]
    pub fn with_turn(turn: Team) -> Self {
        Game {
            turn,
            outcome: Outcome::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Team {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Hand the move to the other team
    pub(crate) fn toggle_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Record a win. Only the first decision sticks; a decided match never
    /// reverts to `InProgress`.
    pub(crate) fn record_win(&mut self, team: Team) {
        if self.outcome == Outcome::InProgress {
            self.outcome = Outcome::win_for(team);
        }
    }
}
