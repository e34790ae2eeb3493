use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: {rows}x{cols} with {mines} mines")]
    InvalidConfig {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Undo history is empty")]
    EmptyHistory,
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("No undo credits left for this game")]
    NoCreditsLeft,
}

pub type Result<T> = core::result::Result<T, GameError>;
