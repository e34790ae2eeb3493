use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement, no start cell is made safe and solvability is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, board: &mut Board) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        board.place_mines(&mut rng);

        // double check mine count
        let count = board.mines().len();
        if count != usize::from(board.mine_count()) {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                count,
                board.mine_count()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64) -> Board {
        let mut board = Board::new(GameConfig::beginner()).unwrap();
        RandomMinefieldGenerator::new(seed).generate(&mut board).unwrap();
        board
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(generate(1234).mines(), generate(1234).mines());
    }

    #[test]
    fn generates_requested_mine_count() {
        for seed in 0..32 {
            assert_eq!(generate(seed).mines().len(), 10);
        }
    }
}
