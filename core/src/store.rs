use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Stored value under {key} is corrupt: {value:?}")]
    Corrupt { key: &'static str, value: String },
}

/// Key-value backend that persisted state is written to.
pub trait WalletStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Fixed identifier a persisted value is stored under.
pub trait StorageKey {
    const KEY: &'static str;
}

/// Values that can round-trip through a [`WalletStore`] under their [`StorageKey`].
pub trait Persist: StorageKey + Sized {
    fn encode(&self) -> String;

    fn decode(raw: &str) -> Result<Self, StoreError>;

    fn load(store: &impl WalletStore) -> Result<Option<Self>, StoreError> {
        store
            .read(Self::KEY)?
            .map(|raw| Self::decode(&raw))
            .transpose()
    }

    fn save(&self, store: &mut impl WalletStore) -> Result<(), StoreError> {
        store.write(Self::KEY, &self.encode())
    }
}

/// Store that lives only as long as the process, used by tests and embedders without storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl WalletStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: WalletStore + ?Sized> WalletStore for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemoryStore::new().with_entry("a", "1");
        store.write("a", "2").unwrap();

        assert_eq!(store.read("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.read("b").unwrap(), None);
    }
}
