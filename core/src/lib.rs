//! Game-state engine for a grid based mine-discovery puzzle.
//!
//! [`GameSession`] is the entry point for front ends: it owns the [`Board`], the [`GameState`]
//! and the [`UndoHistory`] of one game and answers every operation with a [`SessionUpdate`]
//! describing what to redraw. Front ends supply the seed for random layouts.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use history::*;
pub use session::*;
pub use state::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod generator;
mod history;
mod session;
mod state;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_outcomes_combine_by_severity() {
        use RevealOutcome::*;
        assert_eq!(NoChange | Revealed, Revealed);
        assert_eq!(Revealed | Won, Won);
        assert_eq!(Won | HitMine, HitMine);
        assert_eq!(NoChange | NoChange, NoChange);
        assert!(!NoChange.has_update());
        assert!(MarkOutcome::Changed.has_update());
    }
}
