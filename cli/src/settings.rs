use std::fs;
use std::path::Path;

use anyhow::Context;
use pairmatch_core::{Dim, GameConfig, SymbolCatalog, Timing};
use serde::Deserialize;

/// Settings read from an optional TOML file. Command line flags take precedence.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub size: Option<Dim>,
    pub players: Option<u8>,
    pub seed: Option<u64>,
    /// Replaces the stock symbol catalog.
    pub symbols: Option<Vec<String>>,
    pub timing: Timing,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn override_with(&mut self, size: Option<Dim>, players: Option<u8>, seed: Option<u64>) {
        self.size = size.or(self.size);
        self.players = players.or(self.players);
        self.seed = seed.or(self.seed);
    }

    pub fn game_config(&self) -> pairmatch_core::Result<GameConfig> {
        let defaults = GameConfig::default();
        GameConfig::new(
            self.size.unwrap_or(defaults.size.get()),
            self.players.unwrap_or(defaults.players.seats()),
        )
    }

    pub fn catalog(&self) -> pairmatch_core::Result<SymbolCatalog> {
        match &self.symbols {
            Some(symbols) => SymbolCatalog::new(symbols.iter().cloned()),
            None => Ok(SymbolCatalog::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pairmatch_core::{GameError, PlayerCount};

    use super::*;

    #[test]
    fn empty_file_means_defaults() {
        let settings = Settings::parse("").unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.game_config().unwrap(), GameConfig::default());
        assert_eq!(settings.timing, Timing::DEFAULT);
    }

    #[test]
    fn file_values_are_read() {
        let settings = Settings::parse(
            r#"
            size = 6
            players = 2
            symbols = ["sun", "rain", "snow"]

            [timing]
            reveal_delay_ms = 400
            "#,
        )
        .unwrap();

        let config = settings.game_config().unwrap();
        assert_eq!(config.size.get(), 6);
        assert_eq!(config.players, PlayerCount::Duel);
        assert_eq!(settings.timing.reveal_delay_ms, 400);
        assert_eq!(settings.timing.tick_interval_ms, 1000);
        assert_eq!(settings.catalog().unwrap().len(), 3);
    }

    #[test]
    fn flags_override_file() {
        let mut settings = Settings::parse("size = 6\nseed = 1").unwrap();

        settings.override_with(Some(8), None, None);

        assert_eq!(settings.size, Some(8));
        assert_eq!(settings.players, None);
        assert_eq!(settings.seed, Some(1));
    }

    #[test]
    fn invalid_values_surface_as_game_errors() {
        let odd = Settings::parse("size = 5").unwrap();
        assert_eq!(odd.game_config(), Err(GameError::InvalidSize(5)));

        let empty = Settings::parse("symbols = []").unwrap();
        assert_eq!(empty.catalog(), Err(GameError::EmptyCatalog));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::parse("colour = \"red\"").is_err());
    }
}
