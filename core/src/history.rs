use alloc::collections::VecDeque;

use crate::*;

/// Snapshots kept around, and undo actions allowed, per game.
pub const MAX_UNDO: usize = 3;

/// Bounded stack of board snapshots plus the per-game undo credit counter.
///
/// Pushing past [`MAX_UNDO`] drops the oldest snapshot. Credits are tracked separately, a game
/// never gets more than [`MAX_UNDO`] undos no matter how many snapshots are still stored.
#[derive(Clone, Debug, Default)]
pub struct UndoHistory {
    snapshots: VecDeque<BoardSnapshot>,
    credits_used: usize,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self {
            snapshots: VecDeque::with_capacity(MAX_UNDO),
            credits_used: 0,
        }
    }

    pub fn push(&mut self, snapshot: BoardSnapshot) {
        if self.snapshots.len() >= MAX_UNDO {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Result<BoardSnapshot> {
        self.snapshots.pop_back().ok_or(GameError::EmptyHistory)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn credits_remaining(&self) -> usize {
        MAX_UNDO.saturating_sub(self.credits_used)
    }

    pub fn spend_credit(&mut self) -> Result<()> {
        if self.credits_remaining() == 0 {
            return Err(GameError::NoCreditsLeft);
        }
        self.credits_used += 1;
        Ok(())
    }

    /// Forgets every snapshot and refills the credits, for a new game.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.credits_used = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_revealed(revealed: u8) -> BoardSnapshot {
        let mut board = Board::new(GameConfig::new_unchecked((1, 8), 0)).unwrap();
        for col in 0..revealed {
            board.cell_mut((0, col)).unwrap().revealed = true;
        }
        board.snapshot()
    }

    fn revealed_in(snapshot: &BoardSnapshot) -> usize {
        (0..8)
            .filter(|&col| snapshot.cell((0, col)).is_some_and(|cell| cell.revealed))
            .count()
    }

    #[test]
    fn pop_is_lifo() {
        let mut history = UndoHistory::new();
        history.push(snapshot_with_revealed(1));
        history.push(snapshot_with_revealed(2));

        assert_eq!(revealed_in(&history.pop().unwrap()), 2);
        assert_eq!(revealed_in(&history.pop().unwrap()), 1);
        assert_eq!(history.pop(), Err(GameError::EmptyHistory));
    }

    #[test]
    fn push_over_capacity_evicts_oldest() {
        let mut history = UndoHistory::new();
        for revealed in 1..=4 {
            history.push(snapshot_with_revealed(revealed));
        }

        assert_eq!(history.len(), MAX_UNDO);
        assert_eq!(revealed_in(&history.pop().unwrap()), 4);
        assert_eq!(revealed_in(&history.pop().unwrap()), 3);
        assert_eq!(revealed_in(&history.pop().unwrap()), 2);
        assert!(history.is_empty());
    }

    #[test]
    fn credits_run_out_independently_of_snapshots() {
        let mut history = UndoHistory::new();
        for _ in 0..MAX_UNDO {
            history.spend_credit().unwrap();
        }
        history.push(snapshot_with_revealed(0));

        assert_eq!(history.credits_remaining(), 0);
        assert_eq!(history.spend_credit(), Err(GameError::NoCreditsLeft));
        assert_eq!(history.credits_remaining(), 0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut history = UndoHistory::new();
        history.push(snapshot_with_revealed(3));
        history.spend_credit().unwrap();

        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.credits_remaining(), MAX_UNDO);
    }
}
