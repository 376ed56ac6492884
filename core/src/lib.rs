#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use payout::*;
pub use session::*;
pub use store::*;
pub use types::*;
pub use wallet::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod payout;
mod session;
mod store;
mod types;
mod wallet;

/// Table rules shared by every round. Missing fields fall back to the defaults when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_size: CellCount,
    pub min_hazards: CellCount,
    pub max_hazards: CellCount,
    pub risk_premium: f64,
    /// Accept bets larger than the balance, letting it go negative.
    pub allow_negative_balance: bool,
    pub initial_balance: Amount,
    pub default_bet: Amount,
    pub default_hazards: CellCount,
    pub quick_bets: Vec<Amount>,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        use ConfigIssue::*;

        let invalid = |issue| Err(MinesError::InvalidConfiguration(issue));
        let is_amount = |amount: f64| amount.is_finite() && amount >= 0.0;

        if self.board_size < 2 {
            return invalid(BoardSize(self.board_size));
        }
        if self.min_hazards == 0
            || self.min_hazards > self.max_hazards
            || self.max_hazards >= self.board_size
        {
            return invalid(HazardBounds {
                min: self.min_hazards,
                max: self.max_hazards,
                size: self.board_size,
            });
        }
        if !(self.min_hazards..=self.max_hazards).contains(&self.default_hazards) {
            return invalid(HazardCount {
                hazards: self.default_hazards,
                size: self.board_size,
            });
        }
        if !self.risk_premium.is_finite() || self.risk_premium < 0.0 {
            return invalid(RiskPremium);
        }
        if !self.initial_balance.is_finite() {
            return invalid(Amount("initial_balance"));
        }
        if !is_amount(self.default_bet) {
            return invalid(Amount("default_bet"));
        }
        if !self.quick_bets.iter().all(|&bet| is_amount(bet) && bet > 0.0) {
            return invalid(Amount("quick_bets"));
        }
        Ok(())
    }

    pub const fn hazard_bounds(&self) -> (CellCount, CellCount) {
        (self.min_hazards, self.max_hazards)
    }

    pub fn payout_model(&self) -> Result<PayoutModel> {
        PayoutModel::new(self.risk_premium)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            min_hazards: MIN_HAZARDS,
            max_hazards: MAX_HAZARDS,
            risk_premium: DEFAULT_RISK_PREMIUM,
            allow_negative_balance: false,
            initial_balance: DEFAULT_INITIAL_BALANCE,
            default_bet: DEFAULT_BET,
            default_hazards: DEFAULT_HAZARDS,
            quick_bets: DEFAULT_QUICK_BETS.to_vec(),
        }
    }
}

/// Player intents accepted by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    ConfigureBet(Amount),
    ConfigureHazardCount(CellCount),
    StartRound,
    RevealTile(CellId),
    CashOut,
    ResetRound,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Safe cell, the round goes on.
    Safe { multiplier: f64 },
    /// Last safe cell, nothing left to reveal but the round still needs a cash-out.
    Cleared { multiplier: f64 },
    /// Hazard hit, the round is lost and every hazard position is reported at once.
    HitHazard { cell: CellId, hazards: Vec<CellId> },
}

impl RevealOutcome {
    pub const fn is_loss(&self) -> bool {
        matches!(self, Self::HitHazard { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    BetConfigured(Amount),
    HazardCountConfigured(CellCount),
    RoundStarted,
    Revealed(RevealOutcome),
    CashedOut { payout: Amount },
    RoundReset,
}

impl Outcome {
    /// Whether this outcome moved money in or out of the wallet
    pub const fn changes_wallet(&self) -> bool {
        use Outcome::*;
        match self {
            BetConfigured(_) => false,
            HazardCountConfigured(_) => false,
            RoundStarted => true,
            Revealed(_) => false,
            CashedOut { .. } => true,
            RoundReset => false,
        }
    }
}

/// Result of an applied command together with the state it left behind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub outcome: Outcome,
    pub round: Round,
    pub wallet: Wallet,
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    let diff = a - b;
    -1e-9 < diff && diff < 1e-9
}
