/// Position of a cell on the board, counted row-major from `0`.
pub type CellId = u8;

/// Count type used for board sizes, hazard counts and revealed-cell counts.
pub type CellCount = u8;

/// Monetary amount for balances, bets and payouts.
///
/// Plain `f64`: accumulated rounding error is tolerated since balances are play money, not a ledger.
pub type Amount = f64;

/// Default number of cells on the board (5x5).
pub const BOARD_SIZE: CellCount = 25;

/// Default lower bound for the selectable hazard count.
pub const MIN_HAZARDS: CellCount = 1;

/// Default upper bound for the selectable hazard count.
pub const MAX_HAZARDS: CellCount = 20;

/// Default premium added to the multiplier per hazard on the board.
pub const DEFAULT_RISK_PREMIUM: f64 = 0.1;

pub const DEFAULT_INITIAL_BALANCE: Amount = 5000.0;

pub const DEFAULT_BET: Amount = 10.0;

pub const DEFAULT_HAZARDS: CellCount = 3;

pub const DEFAULT_QUICK_BETS: [Amount; 5] = [10.0, 50.0, 100.0, 250.0, 500.0];
