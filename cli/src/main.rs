use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mines_core::{Command, RandomBoardGenerator, Report, Session};
use rand::RngCore;

use crate::command::Input;
use crate::config::Settings;
use crate::file_store::FileStore;
use crate::render::{Renderer, Snapshot};

mod command;
mod config;
mod file_store;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Bet, dig for gems, cash out before you hit a mine", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// TOML settings file with `[table]` and `[display]` sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the balance is saved in
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Accept bets above the balance, letting it go negative
    #[arg(long)]
    allow_negative_balance: bool,

    /// Print reports as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

type GameSession = Session<FileStore, RandomBoardGenerator>;

struct Shell<W> {
    session: GameSession,
    renderer: Renderer,
    json: bool,
    out: W,
}

impl<W: Write> Shell<W> {
    fn show_status(&mut self) -> anyhow::Result<()> {
        let engine = self.session.engine();
        let round = engine.round();
        let wallet = engine.wallet();
        let board = engine.board_view();

        if self.json {
            let snapshot = Snapshot {
                round,
                wallet,
                potential_win: round.potential_win(),
                board: &board,
            };
            writeln!(self.out, "{}", serde_json::to_string(&snapshot)?)?;
        } else {
            let status = self
                .renderer
                .status(&round, &wallet, engine.next_multiplier());
            write!(self.out, "{}", self.renderer.board(&board))?;
            writeln!(self.out, "{}", status)?;
        }
        Ok(())
    }

    fn show_report(&mut self, report: &Report) -> anyhow::Result<()> {
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(report)?)?;
            return Ok(());
        }
        writeln!(self.out, "{}", self.renderer.outcome(&report.outcome))?;
        self.show_status()
    }

    fn show_error(&mut self, err: impl std::fmt::Display) -> anyhow::Result<()> {
        if self.json {
            let error = serde_json::json!({ "error": err.to_string() });
            writeln!(self.out, "{}", error)?;
        } else {
            writeln!(self.out, "! {}", err)?;
        }
        Ok(())
    }

    fn play(&mut self, command: Command) -> anyhow::Result<()> {
        log::debug!("command: {:?}", command);
        match self.session.apply(command) {
            Ok(report) => self.show_report(&report),
            Err(err) => {
                log::debug!("command rejected: {}", err);
                self.show_error(err)
            }
        }
    }

    /// Handles one line of input, returning `false` once the player quits.
    fn handle(&mut self, line: &str) -> anyhow::Result<bool> {
        match command::parse(line) {
            Ok(Input::Play(command)) => self.play(command)?,
            Ok(Input::QuickBet(index)) => {
                let preset = index
                    .checked_sub(1)
                    .and_then(|i| self.session.engine().config().quick_bets.get(i).copied());
                match preset {
                    Some(bet) => self.play(Command::ConfigureBet(bet))?,
                    None => self.show_error(format!("no quick bet #{}", index))?,
                }
            }
            Ok(Input::Status) => self.show_status()?,
            Ok(Input::Help) => {
                let presets = self
                    .renderer
                    .quick_bets(&self.session.engine().config().quick_bets);
                writeln!(self.out, "{}\nquick bets: {}", render::HELP, presets)?;
            }
            Ok(Input::Quit) => return Ok(false),
            Ok(Input::Empty) => {}
            Err(err) => self.show_error(err)?,
        }
        Ok(true)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let Settings {
        table: mut config,
        display,
    } = Settings::load(args.config.as_deref())?;
    if args.allow_negative_balance {
        config.allow_negative_balance = true;
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    log::debug!("seed: {}", seed);

    let store = FileStore::open(&args.data_dir)?;
    let session = Session::open(config, RandomBoardGenerator::from_seed(seed), store)
        .context("could not open the table")?;
    log::info!("Application started");

    let mut shell = Shell {
        session,
        renderer: Renderer::new(&display),
        json: args.json,
        out: io::stdout().lock(),
    };
    shell.show_status()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("could not read input")?;
        if !shell.handle(&line)? {
            break;
        }
        shell.out.flush()?;
    }

    log::debug!(
        "leaving with balance {}",
        shell.session.wallet().balance()
    );
    Ok(())
}
