use alloc::vec::Vec;
use core::fmt;
use core::mem;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Betting -> Playing (start a round)
/// - Playing -> GameOver (hit a hazard)
/// - Playing -> Betting (cash out)
/// - GameOver -> Betting (reset)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Betting,
    Playing,
    GameOver,
}

impl Phase {
    pub const fn is_betting(self) -> bool {
        matches!(self, Self::Betting)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::GameOver)
    }

    pub const fn name(self) -> &'static str {
        use Phase::*;
        match self {
            Betting => "betting",
            Playing => "playing",
            GameOver => "game over",
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Betting
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the round fields a shell displays.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub phase: Phase,
    pub bet: Amount,
    pub hazard_count: CellCount,
    pub multiplier: f64,
    pub safe_revealed: CellCount,
}

impl Round {
    /// What a cash-out would pay right now.
    pub fn potential_win(&self) -> Amount {
        self.bet * self.multiplier
    }
}

/// The board only exists while a round is being played or has just been lost.
#[derive(Clone, Debug, PartialEq, Default)]
enum Stage {
    #[default]
    Betting,
    Playing(Board),
    GameOver(Board),
}

impl Stage {
    const fn phase(&self) -> Phase {
        match self {
            Self::Betting => Phase::Betting,
            Self::Playing(_) => Phase::Playing,
            Self::GameOver(_) => Phase::GameOver,
        }
    }

    fn board(&self) -> Option<&Board> {
        match self {
            Self::Betting => None,
            Self::Playing(board) | Self::GameOver(board) => Some(board),
        }
    }

    fn into_game_over(self) -> Self {
        match self {
            Self::Playing(board) => Self::GameOver(board),
            other => other,
        }
    }
}

/// Owns the wallet and the current round, applying one command at a time.
///
/// A rejected command leaves every field untouched.
#[derive(Clone, Debug)]
pub struct RoundEngine<G = RandomBoardGenerator> {
    config: EngineConfig,
    payout: PayoutModel,
    generator: G,
    wallet: Wallet,
    stage: Stage,
    bet: Amount,
    hazard_count: CellCount,
    multiplier: f64,
    safe_revealed: CellCount,
}

impl<G: BoardGenerator> RoundEngine<G> {
    pub fn new(config: EngineConfig, wallet: Wallet, generator: G) -> Result<Self> {
        config.validate()?;
        let payout = config.payout_model()?;
        Ok(Self {
            payout,
            generator,
            wallet,
            stage: Stage::Betting,
            bet: config.default_bet,
            hazard_count: config.default_hazards,
            multiplier: 1.0,
            safe_revealed: 0,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn payout_model(&self) -> PayoutModel {
        self.payout
    }

    pub fn wallet(&self) -> Wallet {
        self.wallet
    }

    pub fn phase(&self) -> Phase {
        self.stage.phase()
    }

    pub fn round(&self) -> Round {
        Round {
            phase: self.phase(),
            bet: self.bet,
            hazard_count: self.hazard_count,
            multiplier: self.multiplier,
            safe_revealed: self.safe_revealed,
        }
    }

    /// Player-visible board; an all-hidden board of the configured size while betting.
    pub fn board_view(&self) -> Vec<CellView> {
        match self.stage.board() {
            Some(board) => board.view(),
            None => (0..self.config.board_size).map(CellView::hidden).collect(),
        }
    }

    /// Multiplier the next safe reveal would pay, if any safe cell is left.
    pub fn next_multiplier(&self) -> Option<f64> {
        let Stage::Playing(board) = &self.stage else {
            return None;
        };
        if self.safe_revealed >= board.safe_count() {
            return None;
        }
        self.payout
            .multiplier_after(self.safe_revealed + 1, board.hazard_count(), board.size())
            .ok()
    }

    pub fn apply(&mut self, command: Command) -> Result<Report> {
        use Command::*;

        let outcome = match command {
            ConfigureBet(amount) => Outcome::BetConfigured(self.configure_bet(amount)?),
            ConfigureHazardCount(count) => {
                Outcome::HazardCountConfigured(self.configure_hazard_count(count)?)
            }
            StartRound => {
                self.start_round()?;
                Outcome::RoundStarted
            }
            RevealTile(id) => Outcome::Revealed(self.reveal_tile(id)?),
            CashOut => Outcome::CashedOut {
                payout: self.cash_out()?,
            },
            ResetRound => {
                self.reset_round()?;
                Outcome::RoundReset
            }
        };

        Ok(Report {
            outcome,
            round: self.round(),
            wallet: self.wallet,
        })
    }

    /// Sets the bet for the next round, negative amounts clamp to zero.
    pub fn configure_bet(&mut self, amount: Amount) -> Result<Amount> {
        self.check_phase(Phase::Betting, "change the bet")?;

        if !amount.is_finite() {
            return Err(MinesError::InvalidBet(BetIssue::NotFinite));
        }

        let bet = amount.max(0.0);
        if bet != amount {
            log::warn!("bet {} clamped to {}", amount, bet);
        }
        self.bet = bet;
        Ok(bet)
    }

    /// Sets the hazard count for the next round, clamped into the configured bounds.
    pub fn configure_hazard_count(&mut self, count: CellCount) -> Result<CellCount> {
        self.check_phase(Phase::Betting, "change the hazard count")?;

        let (min, max) = self.config.hazard_bounds();
        let hazards = count.clamp(min, max);
        if hazards != count {
            log::warn!("hazard count {} clamped to {}", count, hazards);
        }
        self.hazard_count = hazards;
        Ok(hazards)
    }

    pub fn start_round(&mut self) -> Result<()> {
        self.check_phase(Phase::Betting, "start a round")?;
        self.check_bet()?;

        // the wallet is only debited once a board exists
        let board = self
            .generator
            .generate(self.config.board_size, self.hazard_count)?;

        self.wallet.debit(self.bet);
        self.multiplier = 1.0;
        self.safe_revealed = 0;
        self.stage = Stage::Playing(board);

        log::debug!(
            "round started, bet: {}, hazards: {}, balance: {}",
            self.bet,
            self.hazard_count,
            self.wallet.balance()
        );
        Ok(())
    }

    pub fn reveal_tile(&mut self, id: CellId) -> Result<RevealOutcome> {
        let phase = self.phase();
        let Stage::Playing(board) = &mut self.stage else {
            return Err(MinesError::InvalidPhase {
                action: "reveal a tile",
                phase,
            });
        };

        let cell = board.cell(id)?;
        if cell.is_revealed() {
            return Err(MinesError::AlreadyRevealed(id));
        }

        if cell.is_hazard() {
            board.reveal(id);
            let hazards = board.reveal_hazards();
            self.multiplier = 1.0;
            self.stage = mem::take(&mut self.stage).into_game_over();
            log::debug!("hazard at {}, round lost, hazards: {:?}", id, hazards);
            return Ok(RevealOutcome::HitHazard { cell: id, hazards });
        }

        let safe_revealed = self.safe_revealed + 1;
        let multiplier =
            self.payout
                .multiplier_after(safe_revealed, board.hazard_count(), board.size())?;
        let cleared = safe_revealed == board.safe_count();

        board.reveal(id);
        self.safe_revealed = safe_revealed;
        self.multiplier = multiplier;
        log::trace!(
            "safe cell {}, revealed: {}, multiplier: {}",
            id,
            safe_revealed,
            multiplier
        );

        Ok(if cleared {
            log::debug!("every safe cell revealed, waiting for cash out");
            RevealOutcome::Cleared { multiplier }
        } else {
            RevealOutcome::Safe { multiplier }
        })
    }

    /// Banks `bet * multiplier` and returns to betting, yielding the credited amount.
    pub fn cash_out(&mut self) -> Result<Amount> {
        self.check_phase(Phase::Playing, "cash out")?;

        let payout = self.bet * self.multiplier;
        if !(self.wallet.balance() + payout).is_finite() {
            log::error!(
                "cash-out of {} overflows balance {}",
                payout,
                self.wallet.balance()
            );
            return Err(MinesError::InvariantViolation(
                "cash-out would leave a non-finite balance",
            ));
        }
        self.wallet.credit(payout);
        self.clear_round();

        log::debug!(
            "cashed out {}, balance: {}",
            payout,
            self.wallet.balance()
        );
        Ok(payout)
    }

    pub fn reset_round(&mut self) -> Result<()> {
        self.check_phase(Phase::GameOver, "reset the round")?;
        self.clear_round();
        log::debug!("round reset");
        Ok(())
    }

    fn clear_round(&mut self) {
        self.multiplier = 1.0;
        self.safe_revealed = 0;
        self.stage = Stage::Betting;
    }

    fn check_bet(&self) -> Result<()> {
        if self.bet <= 0.0 {
            return Err(MinesError::InvalidBet(BetIssue::NotPositive));
        }
        if !self.config.allow_negative_balance && self.bet > self.wallet.balance() {
            return Err(MinesError::InvalidBet(BetIssue::ExceedsBalance {
                bet: self.bet,
                balance: self.wallet.balance(),
            }));
        }

        // the best possible cash-out must still leave a finite balance
        let size = self.config.board_size;
        let top = self
            .payout
            .multiplier_after(size - self.hazard_count, self.hazard_count, size)?;
        let staked = self.wallet.balance() - self.bet;
        let best = self.bet * top;
        if !staked.is_finite() || !best.is_finite() || !(staked + best).is_finite() {
            return Err(MinesError::InvalidBet(BetIssue::Unpayable { bet: self.bet }));
        }
        Ok(())
    }

    fn check_phase(&self, expected: Phase, action: &'static str) -> Result<()> {
        let phase = self.phase();
        if phase == expected {
            Ok(())
        } else {
            Err(MinesError::InvalidPhase { action, phase })
        }
    }
}
