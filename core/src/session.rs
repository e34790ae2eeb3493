use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::*;

/// What a session operation did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    NewGame,
    Reveal(RevealOutcome),
    Mark(MarkOutcome),
    Undo,
}

/// Which part of the board the presentation layer has to draw again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Redraw {
    Nothing,
    Cells(Vec<Coord2>),
    Full,
}

/// Result descriptor returned by every [`GameSession`] operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUpdate {
    pub action: SessionAction,
    pub redraw: Redraw,
    pub state: EngineState,
    pub undo_credits_left: usize,
}

impl SessionUpdate {
    pub fn has_update(&self) -> bool {
        !matches!(self.redraw, Redraw::Nothing)
    }
}

/// One live game: the board, its progress and the undo history, behind the operations a front
/// end calls.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    game: GameState,
    history: UndoHistory,
    seed: Option<u64>,
}

impl GameSession {
    /// Starts a session with mines placed randomly from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::start(config, RandomMinefieldGenerator::new(seed), Some(seed))
    }

    pub fn with_layout(config: GameConfig, mines: &[Coord2]) -> Result<Self> {
        Self::start(config, FixedMinefieldGenerator::new(mines), None)
    }

    fn start(
        config: GameConfig,
        generator: impl MinefieldGenerator,
        seed: Option<u64>,
    ) -> Result<Self> {
        let mut board = Board::new(config)?;
        generator.generate(&mut board)?;
        log::debug!(
            "New game {}x{} with {} mines, seed: {:?}",
            board.size().0,
            board.size().1,
            board.mine_count(),
            seed
        );
        Ok(Self {
            board,
            game: GameState::new(),
            history: UndoHistory::new(),
            seed,
        })
    }

    /// Replaces the current game, on error the current game is kept as is.
    pub fn new_game(&mut self, config: GameConfig, seed: u64) -> Result<SessionUpdate> {
        *self = Self::new(config, seed)?;
        Ok(self.update(SessionAction::NewGame, Redraw::Full))
    }

    pub fn new_game_with_layout(
        &mut self,
        config: GameConfig,
        mines: &[Coord2],
    ) -> Result<SessionUpdate> {
        *self = Self::with_layout(config, mines)?;
        Ok(self.update(SessionAction::NewGame, Redraw::Full))
    }

    /// Reveals a hidden cell, snapshotting the board first so the move can be undone.
    pub fn left_click(&mut self, coords: Coord2) -> SessionUpdate {
        if !self.accepts_click(coords) {
            return self.update(SessionAction::Reveal(RevealOutcome::NoChange), Redraw::Nothing);
        }

        self.history.push(self.board.snapshot());
        let mut changed = Vec::new();
        let outcome = self.game.reveal_cell(&mut self.board, coords, &mut changed);
        self.update(SessionAction::Reveal(outcome), Redraw::Cells(changed))
    }

    /// Toggles the flag on a hidden cell, snapshotting the board first so the move can be undone.
    pub fn right_click(&mut self, coords: Coord2) -> SessionUpdate {
        if !self.accepts_click(coords) {
            return self.update(SessionAction::Mark(MarkOutcome::NoChange), Redraw::Nothing);
        }

        self.history.push(self.board.snapshot());
        let outcome = self.game.toggle_flag(&mut self.board, coords);
        self.update(SessionAction::Mark(outcome), Redraw::Cells(vec![coords]))
    }

    fn accepts_click(&self, coords: Coord2) -> bool {
        !self.game.is_game_over() && self.board.view(coords).is_some_and(CellView::is_unrevealed)
    }

    /// Rolls the board back to before the latest move, this also takes back a lost or won game.
    pub fn undo(&mut self) -> Result<SessionUpdate> {
        if self.history.credits_remaining() == 0 {
            return Err(GameError::NoCreditsLeft);
        }
        let snapshot = self.history.pop().map_err(|_| GameError::NothingToUndo)?;
        self.board.restore(snapshot).inspect_err(|err| {
            log::warn!("Could not restore snapshot: {}", err);
        })?;
        self.history.spend_credit()?;
        self.game.reset_after_restore(&self.board);
        log::debug!(
            "Undo, {} credits and {} snapshots left",
            self.history.credits_remaining(),
            self.history.len()
        );
        Ok(self.update(SessionAction::Undo, Redraw::Full))
    }

    fn update(&self, action: SessionAction, redraw: Redraw) -> SessionUpdate {
        SessionUpdate {
            action,
            redraw,
            state: self.game.state(),
            undo_credits_left: self.history.credits_remaining(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> EngineState {
        self.game.state()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn cell_view(&self, coords: Coord2) -> Option<CellView> {
        self.board.view(coords)
    }

    pub fn views(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        self.board.views()
    }

    /// Mine count minus placed flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.board.flag_count() as isize)
    }

    pub fn cells_revealed(&self) -> CellCount {
        self.game.cells_revealed()
    }

    pub fn undo_credits_remaining(&self) -> usize {
        self.history.credits_remaining()
    }

    pub fn undo_snapshots(&self) -> usize {
        self.history.len()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.game.triggered_mine()
    }

    /// Seed of the random layout, `None` for explicit layouts.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
