use crate::*;

/// A [`RoundEngine`] bound to the store its wallet lives in.
///
/// The balance is read exactly once, when the session opens, and written back after every command that moved
/// money. Saves happen inside the same `&mut` call as the command, so nothing can interleave with them.
#[derive(Debug)]
pub struct Session<S, G = RandomBoardGenerator> {
    engine: RoundEngine<G>,
    store: S,
}

impl<S: WalletStore, G: BoardGenerator> Session<S, G> {
    pub fn open(config: EngineConfig, generator: G, store: S) -> Result<Self> {
        let wallet = match Wallet::load(&store) {
            Ok(Some(wallet)) => {
                log::debug!("loaded balance {}", wallet.balance());
                wallet
            }
            Ok(None) => {
                log::info!(
                    "no saved balance, starting with {}",
                    config.initial_balance
                );
                Wallet::new(config.initial_balance)
            }
            Err(err) => {
                log::warn!(
                    "Could not load balance, starting with {}: {}",
                    config.initial_balance,
                    err
                );
                Wallet::new(config.initial_balance)
            }
        };

        let engine = RoundEngine::new(config, wallet, generator)?;
        Ok(Self { engine, store })
    }

    pub fn engine(&self) -> &RoundEngine<G> {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn wallet(&self) -> Wallet {
        self.engine.wallet()
    }

    pub fn round(&self) -> Round {
        self.engine.round()
    }

    pub fn board_view(&self) -> alloc::vec::Vec<CellView> {
        self.engine.board_view()
    }

    pub fn apply(&mut self, command: Command) -> Result<Report> {
        let report = self.engine.apply(command)?;
        if report.outcome.changes_wallet() {
            self.persist();
        }
        Ok(report)
    }

    fn persist(&mut self) {
        if let Err(err) = self.engine.wallet().save(&mut self.store) {
            log::error!("Could not save balance: {}", err);
        }
    }
}
