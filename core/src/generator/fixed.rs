use alloc::vec::Vec;

use super::*;

/// Places mines at a predetermined list of coordinates, handy for replays and puzzles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(self, board: &mut Board) -> Result<()> {
        board.place_mines_at(&self.mines)
    }
}
