use serde::{Deserialize, Serialize};

use crate::*;

/// Mine count used when the player's input cannot be parsed.
pub const DEFAULT_MINES: CellCount = 10;

/// Board dimensions and mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(rows, cols)`
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validated constructor, at least one cell must be left without a mine.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(size, mines).validate()
    }

    pub fn validate(self) -> Result<Self> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 || self.mines >= self.total_cells() {
            return Err(GameError::InvalidConfig {
                rows,
                cols,
                mines: self.mines,
            });
        }
        Ok(self)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((8, 8), DEFAULT_MINES)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((16, 30), 99)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    /// Replaces the mine count with free-form player input.
    ///
    /// Unparseable input falls back to [`DEFAULT_MINES`], and the result is clamped so that at
    /// least one safe cell remains. Negative numbers give an empty minefield.
    pub fn with_mine_input(self, input: &str) -> Self {
        let requested = match input.trim().parse::<i64>() {
            Ok(mines) => mines,
            Err(err) => {
                log::warn!(
                    "Invalid mine count {:?} ({}), using default of {}",
                    input,
                    err,
                    DEFAULT_MINES
                );
                DEFAULT_MINES.into()
            }
        };

        let max_mines = self.total_cells().saturating_sub(1);
        let clamped = requested.clamp(0, max_mines.into());
        if clamped != requested {
            log::warn!(
                "Mine count {} does not fit a {}x{} board, clamped to {}",
                requested,
                self.rows(),
                self.cols(),
                clamped
            );
        }
        let mines = CellCount::try_from(clamped).unwrap_or(max_mines);
        Self::new_unchecked(self.size, mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for config in [
            GameConfig::beginner(),
            GameConfig::intermediate(),
            GameConfig::expert(),
        ] {
            assert_eq!(config.validate(), Ok(config));
        }
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            GameConfig::new((0, 5), 1),
            Err(GameError::InvalidConfig { rows: 0, .. })
        ));
        assert!(GameConfig::new((5, 0), 1).is_err());
    }

    #[test]
    fn rejects_board_without_safe_cell() {
        assert_eq!(
            GameConfig::new((3, 3), 9),
            Err(GameError::InvalidConfig {
                rows: 3,
                cols: 3,
                mines: 9
            })
        );
        assert!(GameConfig::new((3, 3), 8).is_ok());
    }

    #[test]
    fn zero_mines_is_allowed() {
        assert!(GameConfig::new((2, 2), 0).is_ok());
    }

    #[test]
    fn mine_input_parses_numbers() {
        let config = GameConfig::beginner().with_mine_input(" 12 ");
        assert_eq!(config.mines, 12);
        assert_eq!(config.size, (8, 8));
    }

    #[test]
    fn mine_input_falls_back_to_default() {
        let config = GameConfig::new_unchecked((8, 8), 3).with_mine_input("lots");
        assert_eq!(config.mines, DEFAULT_MINES);
    }

    #[test]
    fn mine_input_is_clamped() {
        assert_eq!(GameConfig::beginner().with_mine_input("500").mines, 63);
        assert_eq!(GameConfig::beginner().with_mine_input("-4").mines, 0);
        // the default itself must still fit tiny boards
        let tiny = GameConfig::new_unchecked((2, 2), 1).with_mine_input("");
        assert_eq!(tiny.mines, 3);
        assert!(tiny.validate().is_ok());
    }
}
