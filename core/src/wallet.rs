use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    balance: Amount,
}

impl Wallet {
    pub const fn new(balance: Amount) -> Self {
        Self { balance }
    }

    pub const fn balance(&self) -> Amount {
        self.balance
    }

    pub fn is_negative(&self) -> bool {
        self.balance < 0.0
    }

    pub(crate) fn debit(&mut self, amount: Amount) {
        self.balance -= amount;
    }

    pub(crate) fn credit(&mut self, amount: Amount) {
        self.balance += amount;
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_BALANCE)
    }
}

impl StorageKey for Wallet {
    const KEY: &'static str = "mines:balance";
}

/// Stored as a plain decimal string, e.g. `4990.5`.
impl Persist for Wallet {
    fn encode(&self) -> String {
        self.balance.to_string()
    }

    fn decode(raw: &str) -> core::result::Result<Self, StoreError> {
        match raw.trim().parse::<Amount>() {
            Ok(balance) if balance.is_finite() => Ok(Self::new(balance)),
            _ => Err(StoreError::Corrupt {
                key: Self::KEY,
                value: raw.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_plain_decimal() {
        assert_eq!(Wallet::new(5000.0).encode(), "5000");
        assert_eq!(Wallet::new(4990.5).encode(), "4990.5");
        assert_eq!(Wallet::new(-12.25).encode(), "-12.25");
    }

    #[test]
    fn decodes_trimmed_decimals() {
        assert_eq!(Wallet::decode(" 13.619\n"), Ok(Wallet::new(13.619)));
        assert_eq!(Wallet::decode("-4"), Ok(Wallet::new(-4.0)));
    }

    #[test]
    fn rejects_garbage_and_non_finite_values() {
        for raw in ["", "abc", "NaN", "inf", "12,5"] {
            assert!(matches!(
                Wallet::decode(raw),
                Err(StoreError::Corrupt { key: "mines:balance", .. })
            ));
        }
    }

    #[test]
    fn load_and_save_use_the_fixed_key() {
        let mut store = MemoryStore::new();
        assert_eq!(Wallet::load(&store), Ok(None));

        Wallet::new(42.5).save(&mut store).unwrap();

        assert_eq!(store.get(Wallet::KEY), Some("42.5"));
        assert_eq!(Wallet::load(&store), Ok(Some(Wallet::new(42.5))));
    }

    #[test]
    fn negative_balances_are_flagged() {
        assert!(Wallet::new(-0.01).is_negative());
        assert!(!Wallet::new(0.0).is_negative());
    }
}
