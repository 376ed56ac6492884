//! Multiplier paid out after a run of safe reveals.
//!
//! For `n` safe reveals on a board with `safe` safe cells the multiplier is
//!
//! ```text
//! (safe / safe) * (safe / (safe - 1)) * ... * (safe / (safe - n + 1)) * (1 + hazards * premium)
//! ```
//!
//! with no premium at all before the first reveal. Everything is computed in `f64`, the product accumulates
//! rounding error in the last few bits which is acceptable for play money.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoutModel {
    risk_premium: f64,
}

impl PayoutModel {
    pub fn new(risk_premium: f64) -> Result<Self> {
        if risk_premium.is_finite() && risk_premium >= 0.0 {
            Ok(Self { risk_premium })
        } else {
            Err(MinesError::InvalidConfiguration(ConfigIssue::RiskPremium))
        }
    }

    pub const fn risk_premium(&self) -> f64 {
        self.risk_premium
    }

    /// Factor applied on top of the fair odds, grows with the hazard density.
    pub fn premium(&self, hazard_count: CellCount) -> f64 {
        1.0 + f64::from(hazard_count) * self.risk_premium
    }

    pub fn multiplier_after(
        &self,
        safe_revealed: CellCount,
        hazard_count: CellCount,
        board_size: CellCount,
    ) -> Result<f64> {
        check_layout(board_size, hazard_count)?;

        if safe_revealed == 0 {
            return Ok(1.0);
        }

        let safe_cells = board_size - hazard_count;
        if safe_revealed > safe_cells {
            log::error!(
                "{} safe reveals on a board with only {} safe cells",
                safe_revealed,
                safe_cells
            );
            return Err(MinesError::InvariantViolation(
                "more safe cells revealed than the board holds",
            ));
        }

        let safe = f64::from(safe_cells);
        let odds: f64 = (0..safe_revealed)
            .map(|i| safe / (safe - f64::from(i)))
            .product();
        Ok(odds * self.premium(hazard_count))
    }

    /// Multiplier for every reachable number of safe reveals, starting at zero.
    pub fn ladder(&self, hazard_count: CellCount, board_size: CellCount) -> Result<Vec<f64>> {
        check_layout(board_size, hazard_count)?;
        (0..=board_size - hazard_count)
            .map(|revealed| self.multiplier_after(revealed, hazard_count, board_size))
            .collect()
    }
}

impl Default for PayoutModel {
    fn default() -> Self {
        Self {
            risk_premium: DEFAULT_RISK_PREMIUM,
        }
    }
}

/// [`PayoutModel::multiplier_after`] with the default risk premium.
pub fn multiplier_after(
    safe_revealed: CellCount,
    hazard_count: CellCount,
    board_size: CellCount,
) -> Result<f64> {
    PayoutModel::default().multiplier_after(safe_revealed, hazard_count, board_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_revealed_pays_even() {
        for hazards in 1..BOARD_SIZE {
            assert_eq!(multiplier_after(0, hazards, BOARD_SIZE), Ok(1.0));
        }
    }

    #[test]
    fn three_hazards_first_reveals() {
        assert!(approx_eq(multiplier_after(1, 3, 25).unwrap(), 1.3));
        assert!(approx_eq(
            multiplier_after(2, 3, 25).unwrap(),
            22.0 / 21.0 * 1.3
        ));
        assert!(approx_eq(multiplier_after(2, 3, 25).unwrap(), 1.361_904_761_904_762));
    }

    #[test]
    fn strictly_increasing_in_reveals() {
        let model = PayoutModel::default();
        for hazards in 1..BOARD_SIZE {
            let ladder = model.ladder(hazards, BOARD_SIZE).unwrap();
            assert_eq!(ladder.len(), usize::from(BOARD_SIZE - hazards) + 1);
            assert!(ladder.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn revealing_every_safe_cell_is_valid() {
        let last = multiplier_after(24, 1, 25).unwrap();
        assert!(last.is_finite());
        assert!(last > 1.0);
    }

    #[test]
    fn too_many_reveals_is_an_invariant_violation() {
        assert!(matches!(
            multiplier_after(23, 3, 25),
            Err(MinesError::InvariantViolation(_))
        ));
    }

    #[test]
    fn premium_is_configurable() {
        let flat = PayoutModel::new(0.0).unwrap();
        assert!(approx_eq(flat.multiplier_after(1, 5, 25).unwrap(), 1.0));
        assert!(approx_eq(flat.multiplier_after(2, 5, 25).unwrap(), 20.0 / 19.0));

        assert!(PayoutModel::new(-0.1).is_err());
        assert!(PayoutModel::new(f64::NAN).is_err());
    }

    #[test]
    fn rejects_invalid_layouts() {
        assert!(matches!(
            multiplier_after(1, 0, 25),
            Err(MinesError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            multiplier_after(1, 25, 25),
            Err(MinesError::InvalidConfiguration(_))
        ));
    }
}
