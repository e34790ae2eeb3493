use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait MinefieldGenerator {
    /// Lays mines on a freshly allocated board.
    fn generate(self, board: &mut Board) -> Result<()>;
}
