use alloc::vec;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use super::*;

/// Places hazards uniformly at random without replacement.
///
/// Any [`RngCore`] can drive it, so tests can feed a fixed stream and know exactly where hazards land.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator<R = SmallRng> {
    rng: R,
}

impl RandomBoardGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomBoardGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(&mut self, size: CellCount, hazard_count: CellCount) -> Result<Board> {
        check_layout(size, hazard_count)?;

        let mut hazard_mask = vec![false; size.into()];
        let mut free_cells = size;

        while size - free_cells < hazard_count {
            // pick among the cells that are still safe, which keeps every placement distinct
            let pick = self.rng.gen_range(0..free_cells);
            let slot = hazard_mask
                .iter_mut()
                .filter(|hazard| !**hazard)
                .nth(usize::from(pick))
                .ok_or(MinesError::InvariantViolation("hazard pick ran past the free cells"))?;
            *slot = true;
            free_cells -= 1;
        }

        let board = Board::from_hazard_mask(&hazard_mask);

        // double check hazard count
        if board.hazard_count() != hazard_count {
            log::error!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.hazard_count(),
                hazard_count
            );
            return Err(MinesError::InvariantViolation(
                "generated board has the wrong hazard count",
            ));
        }

        log::trace!("generated board with hazards at {:?}", board.hazard_ids());
        Ok(board)
    }
}
