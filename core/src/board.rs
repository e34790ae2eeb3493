use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::ops::Index;

use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// The grid of cells for one game, together with its mine roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    mines: Vec<Coord2>,
}

/// Immutable value copy of a [`Board`], used by the undo history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct BoardSnapshot {
    config: GameConfig,
    cells: Array2<Cell>,
    mines: Vec<Coord2>,
}

impl BoardSnapshot {
    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}

/// Deserialized board fields, checked for consistency before they become a board or a snapshot.
#[derive(Deserialize)]
struct BoardParts {
    config: GameConfig,
    cells: Array2<Cell>,
    mines: Vec<Coord2>,
}

impl BoardParts {
    /// The grid must match the configured size, and the roster must list every mined cell
    /// exactly once. An empty roster is accepted for boards that had no mines placed yet.
    fn validate(self) -> Result<Self> {
        let config = self.config.validate()?;
        let (rows, cols) = config.size;
        if self.cells.dim() != (usize::from(rows), usize::from(cols)) {
            return Err(GameError::InvalidBoardShape);
        }
        if !self.mines.is_empty() && self.mines.len() != usize::from(config.mines) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut distinct = BTreeSet::new();
        for &coords in &self.mines {
            match self.cells.get(coords.to_nd_index()) {
                Some(cell) if cell.is_mine && distinct.insert(coords) => {}
                _ => return Err(GameError::InvalidBoardShape),
            }
        }
        if self.cells.iter().filter(|cell| cell.is_mine).count() != self.mines.len() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(self)
    }
}

impl TryFrom<BoardParts> for Board {
    type Error = GameError;

    fn try_from(parts: BoardParts) -> Result<Self> {
        let BoardParts {
            config,
            cells,
            mines,
        } = parts.validate()?;
        Ok(Self {
            config,
            cells,
            mines,
        })
    }
}

impl TryFrom<BoardParts> for BoardSnapshot {
    type Error = GameError;

    fn try_from(parts: BoardParts) -> Result<Self> {
        let BoardParts {
            config,
            cells,
            mines,
        } = parts.validate()?;
        Ok(Self {
            config,
            cells,
            mines,
        })
    }
}

impl Board {
    /// Allocates an empty board, no mines are placed yet.
    pub fn new(config: GameConfig) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            cells: Array2::default(config.size.to_nd_index()),
            mines: Vec::with_capacity(config.mines.into()),
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cell_count()
    }

    /// Mined coordinates in placement order.
    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }

    /// Randomly places exactly `mine_count` mines by rejection sampling, replacing any previous
    /// placement.
    pub fn place_mines<R: Rng>(&mut self, rng: &mut R) {
        self.clear_mines();

        let (rows, cols) = self.size();
        let target = usize::from(self.config.mines);
        while self.mines.len() < target {
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            let cell = &mut self.cells[coords.to_nd_index()];
            if !cell.is_mine {
                cell.is_mine = true;
                self.mines.push(coords);
            }
        }
        log::trace!("Placed {} mines: {:?}", self.mines.len(), self.mines);
    }

    /// Places mines at exactly the given coordinates, the mine count becomes the number of
    /// distinct entries.
    pub fn place_mines_at(&mut self, mine_coords: &[Coord2]) -> Result<()> {
        let mut distinct = BTreeSet::new();
        for &coords in mine_coords {
            if !self.in_bounds(coords) {
                return Err(GameError::InvalidCoords);
            }
            distinct.insert(coords);
        }

        let mines = distinct.len().try_into().unwrap_or(CellCount::MAX);
        let config = GameConfig::new_unchecked(self.size(), mines).validate()?;

        self.clear_mines();
        self.config = config;
        for &coords in mine_coords {
            let cell = &mut self.cells[coords.to_nd_index()];
            if !cell.is_mine {
                cell.is_mine = true;
                self.mines.push(coords);
            }
        }
        Ok(())
    }

    fn clear_mines(&mut self) {
        for &coords in &self.mines {
            self.cells[coords.to_nd_index()].is_mine = false;
        }
        self.mines.clear();
    }

    pub fn in_bounds(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.cell(coords).is_some_and(|cell| cell.is_mine)
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        self.cells.get_mut(coords.to_nd_index())
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Number of mines among the up to 8 in-bounds neighbours, 0 for out-of-bounds coordinates.
    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        if !self.in_bounds(coords) {
            return 0;
        }
        let mut count = 0;
        for pos in self.iter_neighbors(coords) {
            if self[pos].is_mine {
                count += 1;
            }
        }
        count
    }

    pub fn view(&self, coords: Coord2) -> Option<CellView> {
        let cell = self.cell(coords)?;
        Some(match cell {
            Cell { revealed: true, is_mine: true, .. } => CellView::Mine,
            Cell { revealed: true, .. } => CellView::Revealed(self.count_adjacent_mines(coords)),
            Cell { flagged: true, .. } => CellView::Flagged,
            _ => CellView::Hidden,
        })
    }

    /// All cell views in row-major order.
    pub fn views(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        iter_coords(self.size()).map(|coords| {
            let view = self.view(coords).unwrap_or_default();
            (coords, view)
        })
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.count_cells(Cell::is_revealed_safe)
    }

    pub fn flag_count(&self) -> CellCount {
        self.count_cells(|cell| cell.flagged)
    }

    fn count_cells(&self, predicate: impl Fn(Cell) -> bool) -> CellCount {
        let count = self.cells.iter().filter(|&&cell| predicate(cell)).count();
        count.try_into().unwrap_or(CellCount::MAX)
    }

    /// Marks every mine as revealed for end-of-game display, returning the cells that changed.
    pub(crate) fn reveal_mines(&mut self) -> Vec<Coord2> {
        let mut changed = Vec::new();
        for &coords in &self.mines {
            let cell = &mut self.cells[coords.to_nd_index()];
            if !cell.revealed {
                cell.revealed = true;
                cell.flagged = false;
                changed.push(coords);
            }
        }
        changed
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            config: self.config,
            cells: self.cells.clone(),
            mines: self.mines.clone(),
        }
    }

    /// Replaces the whole board state with `snapshot`, which must have been taken from a board of
    /// the same size.
    pub fn restore(&mut self, snapshot: BoardSnapshot) -> Result<()> {
        if snapshot.config.size != self.size() || snapshot.cells.dim() != self.cells.dim() {
            return Err(GameError::InvalidBoardShape);
        }
        let BoardSnapshot {
            config,
            cells,
            mines,
        } = snapshot;
        self.config = config;
        self.cells = cells;
        self.mines = mines;
        Ok(())
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
