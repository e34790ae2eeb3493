use serde::{Deserialize, Serialize};

/// Runtime status of one board position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
}

impl Cell {
    pub const fn is_hidden(self) -> bool {
        !self.revealed
    }

    pub const fn is_revealed_safe(self) -> bool {
        self.revealed && !self.is_mine
    }
}

/// Player-visible state of a cell, what the presentation layer draws.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    /// Safe cell with its adjacent mine count.
    Revealed(u8),
    /// Mine shown at the end of a lost game.
    Mine,
}

impl CellView {
    /// Hidden and flagged cells are the ones clicks can still act on.
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
