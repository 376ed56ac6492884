use std::fs;
use std::path::Path;

use anyhow::Context;
use mines_core::EngineConfig;
use serde::Deserialize;

/// Layout of the settings file: `[table]` holds the game rules, `[display]` the terminal output.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub table: EngineConfig,
    pub display: DisplaySettings,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Cells per printed row
    pub columns: usize,
    pub currency: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            columns: 5,
            currency: "€".to_string(),
        }
    }
}

impl Settings {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads the settings file, or the defaults when no file was given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            log::debug!("no settings file, using defaults");
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read settings from {}", path.display()))?;
        let settings = Self::parse(&text)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_means_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn overrides_only_given_fields() {
        let settings = Settings::parse(
            r#"
            [table]
            allow_negative_balance = true
            initial_balance = 250
            quick_bets = [1, 2.5, 5]

            [display]
            currency = "$"
            "#,
        )
        .unwrap();

        assert!(settings.table.allow_negative_balance);
        assert_eq!(settings.table.initial_balance, 250.0);
        assert_eq!(settings.table.quick_bets, vec![1.0, 2.5, 5.0]);
        assert_eq!(settings.table.board_size, 25);
        assert_eq!(settings.display.currency, "$");
        assert_eq!(settings.display.columns, 5);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(Settings::parse("[table]\nboard_size = \"big\"").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("mines-cli-settings-that-do-not-exist.toml");

        assert!(Settings::load(Some(&path)).is_err());
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }
}
