use thiserror::Error;

use crate::*;

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum MinesError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
    #[error("Invalid bet: {0}")]
    InvalidBet(BetIssue),
    #[error("Cannot {action} while {phase}")]
    InvalidPhase { action: &'static str, phase: Phase },
    #[error("Cell {0} is not on the board")]
    InvalidCell(CellId),
    #[error("Cell {0} is already revealed")]
    AlreadyRevealed(CellId),
    #[error("Invariant violated: {0}")]
    InvariantViolation(&'static str),
}

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum ConfigIssue {
    #[error("board needs at least 2 cells, got {0}")]
    BoardSize(CellCount),
    #[error("{hazards} hazards do not fit a board of {size} cells")]
    HazardCount { hazards: CellCount, size: CellCount },
    #[error("hazard bounds {min}..={max} do not fit a board of {size} cells")]
    HazardBounds {
        min: CellCount,
        max: CellCount,
        size: CellCount,
    },
    #[error("risk premium must be a finite, non-negative number")]
    RiskPremium,
    #[error("{0} must be a finite, non-negative amount")]
    Amount(&'static str),
    #[error("fixed layout holds {layout} hazards but {requested} were requested")]
    LayoutMismatch {
        layout: CellCount,
        requested: CellCount,
    },
}

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum BetIssue {
    #[error("bet must be a finite number")]
    NotFinite,
    #[error("bet must be greater than zero")]
    NotPositive,
    #[error("bet of {bet:.2} exceeds the balance of {balance:.2}")]
    ExceedsBalance { bet: Amount, balance: Amount },
    #[error("bet of {bet:e} could pay out more than the wallet can hold")]
    Unpayable { bet: Amount },
}

pub type Result<T> = core::result::Result<T, MinesError>;
