use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Progress of one game: the Playing/Won/Lost state machine and the revealed-cell counter.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GameState {
    state: EngineState,
    cells_revealed: CellCount,
    triggered_mine: Option<Coord2>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.state, EngineState::Won)
    }

    /// Safe cells revealed so far, mines shown after a loss are not counted.
    pub fn cells_revealed(&self) -> CellCount {
        self.cells_revealed
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Reveals a cell, flood filling through zero-count cells.
    ///
    /// Every cell whose view changed is appended to `changed`. Finished games, out-of-bounds
    /// coordinates and already revealed cells are left untouched.
    pub fn reveal_cell(
        &mut self,
        board: &mut Board,
        coords: Coord2,
        changed: &mut Vec<Coord2>,
    ) -> RevealOutcome {
        use RevealOutcome::*;

        if self.is_game_over() {
            return NoChange;
        }
        let Some(cell) = board.cell(coords) else {
            return NoChange;
        };
        if cell.revealed {
            return NoChange;
        }

        if cell.is_mine {
            log::debug!("Hit mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.state = EngineState::Lost;
            changed.extend(board.reveal_mines());
            return HitMine;
        }

        let mut visited = BTreeSet::from([coords]);
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let Some(cell) = board.cell_mut(visit_coords) else {
                continue;
            };
            if cell.revealed || cell.is_mine {
                continue;
            }
            cell.revealed = true;
            cell.flagged = false;
            self.cells_revealed = self.cells_revealed.saturating_add(1);
            changed.push(visit_coords);

            let count = board.count_adjacent_mines(visit_coords);
            log::trace!("Opened cell at {:?}, mine count: {}", visit_coords, count);

            // zero cells keep the cascade going
            if count == 0 {
                for pos in board.iter_neighbors(visit_coords) {
                    if board[pos].is_hidden() && visited.insert(pos) {
                        to_visit.push_back(pos);
                    }
                }
            }
        }

        if self.check_win_condition(board) {
            Won
        } else {
            Revealed
        }
    }

    /// Flips the flag on a hidden cell, flags never influence winning or losing.
    pub fn toggle_flag(&mut self, board: &mut Board, coords: Coord2) -> MarkOutcome {
        if self.is_game_over() {
            return MarkOutcome::NoChange;
        }
        match board.cell_mut(coords) {
            Some(cell) if !cell.revealed => {
                cell.flagged = !cell.flagged;
                MarkOutcome::Changed
            }
            _ => MarkOutcome::NoChange,
        }
    }

    /// Transitions to [`EngineState::Won`] once every safe cell has been revealed.
    pub fn check_win_condition(&mut self, board: &Board) -> bool {
        match self.state {
            EngineState::Won => true,
            EngineState::Lost => false,
            EngineState::Playing if self.cells_revealed == board.safe_cell_count() => {
                log::debug!("All {} safe cells revealed", self.cells_revealed);
                self.state = EngineState::Won;
                true
            }
            EngineState::Playing => false,
        }
    }

    /// Brings the state back in line with a board that was just restored from a snapshot.
    pub fn reset_after_restore(&mut self, board: &Board) {
        self.state = EngineState::Playing;
        self.triggered_mine = None;
        self.cells_revealed = board.revealed_safe_count();
    }
}
