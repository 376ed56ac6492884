use serde::{Deserialize, Serialize};

use crate::CellId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    id: CellId,
    hazard: bool,
    revealed: bool,
}

impl Cell {
    pub(crate) const fn new(id: CellId, hazard: bool) -> Self {
        Self {
            id,
            hazard,
            revealed: false,
        }
    }

    pub const fn id(self) -> CellId {
        self.id
    }

    pub const fn is_hazard(self) -> bool {
        self.hazard
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    /// What a player may know about this cell; hidden cells never leak their contents.
    pub const fn view(self) -> CellView {
        let tile = match (self.revealed, self.hazard) {
            (false, _) => TileView::Hidden,
            (true, false) => TileView::Safe,
            (true, true) => TileView::Hazard,
        };
        CellView { id: self.id, tile }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Hidden,
    Safe,
    Hazard,
}

impl TileView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for TileView {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub id: CellId,
    pub tile: TileView,
}

impl CellView {
    pub const fn hidden(id: CellId) -> Self {
        Self {
            id,
            tile: TileView::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_cells_do_not_expose_hazards() {
        let hazard = Cell::new(4, true);
        let safe = Cell::new(5, false);

        assert_eq!(hazard.view(), CellView::hidden(4));
        assert_eq!(safe.view(), CellView::hidden(5));
    }

    #[test]
    fn revealed_cells_show_their_contents() {
        let mut hazard = Cell::new(0, true);
        let mut safe = Cell::new(1, false);
        hazard.reveal();
        safe.reveal();

        assert_eq!(hazard.view().tile, TileView::Hazard);
        assert_eq!(safe.view().tile, TileView::Safe);
    }
}
