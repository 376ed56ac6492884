use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use mines_core::{StoreError, WalletStore};

/// Keeps every storage key in its own file inside a data directory.
#[derive(Clone, Debug, PartialEq)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("could not create data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        self.dir.join(name)
    }
}

fn unavailable(path: &Path, err: io::Error) -> StoreError {
    StoreError::Unavailable(format!("{}: {}", path.display(), err))
}

impl WalletStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(unavailable(&path, err)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|err| unavailable(&path, err))?;
        log::trace!("saved {} to {}", key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mines_core::{Persist, StorageKey, Wallet};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mines-cli-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = scratch_dir("missing");
        let store = FileStore::open(&dir).unwrap();

        assert_eq!(store.read(Wallet::KEY), Ok(None));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn wallet_round_trips_through_a_plain_file() {
        let dir = scratch_dir("round-trip");
        let mut store = FileStore::open(&dir).unwrap();

        Wallet::new(4990.5).save(&mut store).unwrap();

        assert_eq!(
            fs::read_to_string(dir.join("mines-balance")).unwrap(),
            "4990.5"
        );
        assert_eq!(Wallet::load(&store), Ok(Some(Wallet::new(4990.5))));
        assert!(!dir.join("mines-balance.tmp").exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn reopening_sees_previous_writes() {
        let dir = scratch_dir("reopen");
        FileStore::open(&dir)
            .unwrap()
            .write("mines:balance", "12")
            .unwrap();

        let store = FileStore::open(&dir).unwrap();

        assert_eq!(store.read("mines:balance"), Ok(Some("12".to_string())));
        assert_eq!(store.dir(), dir.as_path());
        fs::remove_dir_all(dir).unwrap();
    }
}
