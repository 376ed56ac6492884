use alloc::{vec, vec::Vec};
use core::ops::Index;
use serde::Serialize;

use crate::*;

/// Checks that `hazard_count` hazards leave at least one safe cell on a board of `size` cells.
pub fn check_layout(size: CellCount, hazard_count: CellCount) -> Result<()> {
    if size < 2 {
        Err(MinesError::InvalidConfiguration(ConfigIssue::BoardSize(size)))
    } else if hazard_count == 0 || hazard_count >= size {
        Err(MinesError::InvalidConfiguration(ConfigIssue::HazardCount {
            hazards: hazard_count,
            size,
        }))
    } else {
        Ok(())
    }
}

/// The cells of one round. Hazard placement is fixed at creation and never changes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Vec<Cell>,
    hazard_count: CellCount,
}

impl Board {
    pub(crate) fn from_hazard_mask(hazard_mask: &[bool]) -> Self {
        let cells: Vec<_> = hazard_mask
            .iter()
            .enumerate()
            .map(|(id, &hazard)| Cell::new(id as CellId, hazard))
            .collect();
        let hazard_count = cells.iter().filter(|cell| cell.is_hazard()).count() as CellCount;
        Self {
            cells,
            hazard_count,
        }
    }

    pub fn from_hazard_ids(size: CellCount, hazard_ids: &[CellId]) -> Result<Self> {
        let mut hazard_mask = vec![false; size.into()];

        for &id in hazard_ids {
            if id >= size {
                return Err(MinesError::InvalidCell(id));
            }
            hazard_mask[usize::from(id)] = true;
        }

        let board = Self::from_hazard_mask(&hazard_mask);
        check_layout(size, board.hazard_count)?;
        Ok(board)
    }

    pub fn size(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn hazard_count(&self) -> CellCount {
        self.hazard_count
    }

    pub fn safe_count(&self) -> CellCount {
        self.size() - self.hazard_count
    }

    pub fn validate_id(&self, id: CellId) -> Result<CellId> {
        if id < self.size() {
            Ok(id)
        } else {
            Err(MinesError::InvalidCell(id))
        }
    }

    pub fn cell(&self, id: CellId) -> Result<Cell> {
        let id = self.validate_id(id)?;
        Ok(self[id])
    }

    pub fn contains_hazard(&self, id: CellId) -> bool {
        self.cells
            .get(usize::from(id))
            .is_some_and(|cell| cell.is_hazard())
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn hazard_ids(&self) -> Vec<CellId> {
        self.cells()
            .filter(|cell| cell.is_hazard())
            .map(Cell::id)
            .collect()
    }

    pub fn view(&self) -> Vec<CellView> {
        self.cells().map(Cell::view).collect()
    }

    /// Marks a validated cell as revealed.
    pub(crate) fn reveal(&mut self, id: CellId) {
        if let Some(cell) = self.cells.get_mut(usize::from(id)) {
            cell.reveal();
        }
    }

    /// Reveals every hazard in a single step and returns their positions.
    pub(crate) fn reveal_hazards(&mut self) -> Vec<CellId> {
        self.cells
            .iter_mut()
            .filter(|cell| cell.is_hazard())
            .map(|cell| {
                cell.reveal();
                cell.id()
            })
            .collect()
    }
}

impl Index<CellId> for Board {
    type Output = Cell;

    fn index(&self, id: CellId) -> &Self::Output {
        &self.cells[usize::from(id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_board_from_hazard_ids() {
        let board = Board::from_hazard_ids(25, &[0, 7, 24]).unwrap();

        assert_eq!(board.size(), 25);
        assert_eq!(board.hazard_count(), 3);
        assert_eq!(board.safe_count(), 22);
        assert_eq!(board.hazard_ids(), vec![0, 7, 24]);
        assert!(board.contains_hazard(7));
        assert!(!board.contains_hazard(8));
        assert!(!board.contains_hazard(200));
    }

    #[test]
    fn duplicate_hazard_ids_collapse() {
        let board = Board::from_hazard_ids(25, &[3, 3, 4]).unwrap();

        assert_eq!(board.hazard_count(), 2);
    }

    #[test]
    fn rejects_out_of_range_hazards() {
        assert_eq!(
            Board::from_hazard_ids(25, &[25]),
            Err(MinesError::InvalidCell(25))
        );
    }

    #[test]
    fn rejects_layouts_without_safe_cells_or_hazards() {
        assert!(matches!(
            Board::from_hazard_ids(2, &[0, 1]),
            Err(MinesError::InvalidConfiguration(ConfigIssue::HazardCount { .. }))
        ));
        assert!(matches!(
            Board::from_hazard_ids(4, &[]),
            Err(MinesError::InvalidConfiguration(ConfigIssue::HazardCount { .. }))
        ));
        assert_eq!(
            check_layout(1, 0),
            Err(MinesError::InvalidConfiguration(ConfigIssue::BoardSize(1)))
        );
    }

    #[test]
    fn reveal_hazards_exposes_all_of_them_at_once() {
        let mut board = Board::from_hazard_ids(9, &[1, 5]).unwrap();
        board.reveal(0);

        let hazards = board.reveal_hazards();

        assert_eq!(hazards, vec![1, 5]);
        assert!(board[0].is_revealed());
        let hidden = board.view().iter().filter(|v| v.tile.is_hidden()).count();
        assert_eq!(hidden, 6);
    }

    #[test]
    fn cell_lookup_validates_ids() {
        let board = Board::from_hazard_ids(4, &[2]).unwrap();

        assert_eq!(board.cell(9), Err(MinesError::InvalidCell(9)));
        assert!(board.cell(2).unwrap().is_hazard());
    }
}
