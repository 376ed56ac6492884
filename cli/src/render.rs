use mines_core::*;
use serde::Serialize;

use crate::config::DisplaySettings;

pub const HELP: &str = "\
commands:
  bet <amount>         set the bet for the next round
  quick <n>            use quick bet preset n
  mines <n>            set how many mines hide on the board
  start                place the bet and start the round
  reveal <id> | <id>   reveal a tile
  cashout              bank bet x multiplier
  reset                new game after hitting a mine
  status               show balance and round
  help                 show this text
  quit                 leave";

/// Everything a shell shows, in one serializable value.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub round: Round,
    pub wallet: Wallet,
    pub potential_win: Amount,
    pub board: &'a [CellView],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Renderer {
    columns: usize,
    currency: String,
}

impl Renderer {
    pub fn new(display: &DisplaySettings) -> Self {
        Self {
            columns: display.columns.max(1),
            currency: display.currency.clone(),
        }
    }

    fn money(&self, amount: Amount) -> String {
        format!("{}{:.2}", self.currency, amount)
    }

    /// Hidden tiles show their id so they can be picked, revealed tiles show what they held.
    pub fn board(&self, view: &[CellView]) -> String {
        let mut out = String::new();
        for row in view.chunks(self.columns) {
            let tiles: Vec<String> = row
                .iter()
                .map(|cell| match cell.tile {
                    TileView::Hidden => format!("{:>2}", cell.id),
                    TileView::Safe => " *".to_string(),
                    TileView::Hazard => " X".to_string(),
                })
                .collect();
            out.push_str(&tiles.join(" "));
            out.push('\n');
        }
        out
    }

    pub fn status(&self, round: &Round, wallet: &Wallet, next: Option<f64>) -> String {
        let mut out = format!(
            "balance {} | bet {} | mines {} | {:.2}x | win {} | safe {} | {}",
            self.money(wallet.balance()),
            self.money(round.bet),
            round.hazard_count,
            round.multiplier,
            self.money(round.potential_win()),
            round.safe_revealed,
            round.phase,
        );
        if let Some(next) = next {
            out.push_str(&format!(" | next {:.2}x", next));
        }
        if wallet.is_negative() {
            out.push_str(" | negative balance!");
        }
        out
    }

    pub fn quick_bets(&self, bets: &[Amount]) -> String {
        bets.iter()
            .enumerate()
            .map(|(index, &bet)| format!("{}) {}", index + 1, self.money(bet)))
            .collect::<Vec<_>>()
            .join("  ")
    }

    pub fn outcome(&self, outcome: &Outcome) -> String {
        use Outcome::*;
        match outcome {
            BetConfigured(bet) => format!("bet set to {}", self.money(*bet)),
            HazardCountConfigured(count) => format!("mines set to {}", count),
            RoundStarted => "round started, pick a tile".to_string(),
            Revealed(RevealOutcome::Safe { multiplier }) => {
                format!("gem! multiplier now {:.2}x", multiplier)
            }
            Revealed(RevealOutcome::Cleared { multiplier }) => format!(
                "every gem found at {:.2}x, cash out to collect",
                multiplier
            ),
            Revealed(RevealOutcome::HitHazard { cell, hazards }) => format!(
                "BOOM! tile {} was a mine, mines were at {:?}",
                cell, hazards
            ),
            CashedOut { payout } => format!("cashed out {}", self.money(*payout)),
            RoundReset => "new game, place your bet".to_string(),
        }
    }
}
