use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of fresh boards, one per round.
pub trait BoardGenerator {
    fn generate(&mut self, size: CellCount, hazard_count: CellCount) -> Result<Board>;
}

impl<G: BoardGenerator + ?Sized> BoardGenerator for &mut G {
    fn generate(&mut self, size: CellCount, hazard_count: CellCount) -> Result<Board> {
        (**self).generate(size, hazard_count)
    }
}
