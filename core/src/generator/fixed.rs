use alloc::vec::Vec;

use super::*;

/// Replays predetermined hazard layouts in order, wrapping around after the last one.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    layouts: Vec<Vec<CellId>>,
    next: usize,
}

impl FixedBoardGenerator {
    pub fn new(hazard_ids: &[CellId]) -> Self {
        Self::with_layouts(alloc::vec![hazard_ids.to_vec()])
    }

    pub fn with_layouts(layouts: Vec<Vec<CellId>>) -> Self {
        Self { layouts, next: 0 }
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(&mut self, size: CellCount, hazard_count: CellCount) -> Result<Board> {
        check_layout(size, hazard_count)?;

        let Some(layout) = self.layouts.get(self.next) else {
            return Err(MinesError::InvalidConfiguration(
                ConfigIssue::LayoutMismatch {
                    layout: 0,
                    requested: hazard_count,
                },
            ));
        };

        let board = Board::from_hazard_ids(size, layout)?;
        if board.hazard_count() != hazard_count {
            return Err(MinesError::InvalidConfiguration(
                ConfigIssue::LayoutMismatch {
                    layout: board.hazard_count(),
                    requested: hazard_count,
                },
            ));
        }

        self.next = (self.next + 1) % self.layouts.len();
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn cycles_through_layouts() {
        let mut generator = FixedBoardGenerator::with_layouts(vec![vec![0, 1], vec![23, 24]]);

        assert_eq!(generator.generate(25, 2).unwrap().hazard_ids(), vec![0, 1]);
        assert_eq!(generator.generate(25, 2).unwrap().hazard_ids(), vec![23, 24]);
        assert_eq!(generator.generate(25, 2).unwrap().hazard_ids(), vec![0, 1]);
    }

    #[test]
    fn rejects_count_mismatch_without_advancing() {
        let mut generator = FixedBoardGenerator::with_layouts(vec![vec![4, 5, 6], vec![7]]);

        assert_eq!(
            generator.generate(25, 2),
            Err(MinesError::InvalidConfiguration(
                ConfigIssue::LayoutMismatch {
                    layout: 3,
                    requested: 2
                }
            ))
        );
        assert_eq!(generator.generate(25, 3).unwrap().hazard_ids(), vec![4, 5, 6]);
    }

    #[test]
    fn empty_generator_reports_mismatch() {
        let mut generator = FixedBoardGenerator::with_layouts(Vec::new());

        assert!(generator.generate(25, 3).is_err());
    }
}
