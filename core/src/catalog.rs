use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

const DEFAULT_SYMBOLS: [&str; 24] = [
    "anchor", "balloon", "bell", "bicycle", "cactus", "camera", "compass", "crown",
    "diamond", "feather", "flame", "guitar", "hourglass", "key", "kite", "lantern",
    "leaf", "lighthouse", "moon", "mushroom", "paperclip", "rocket", "snowflake", "umbrella",
];

/// Ordered pool of symbol keys a deck is dealt from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCatalog {
    keys: Vec<SymbolKey>,
}

impl SymbolCatalog {
    pub fn new<I, K>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<SymbolKey>,
    {
        let keys: Vec<SymbolKey> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(Self { keys })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[SymbolKey] {
        &self.keys
    }

    /// Takes `count` keys in catalog order, starting over from the first key when the catalog runs out.
    ///
    /// A short catalog means the same symbol backs more than one pair.
    pub fn take_wrapping(&self, count: usize) -> Vec<SymbolKey> {
        if count > self.keys.len() {
            log::warn!(
                "Symbol catalog too small, reusing keys: requested {} but only has {}",
                count,
                self.keys.len()
            );
        }
        self.keys.iter().cycle().take(count).cloned().collect()
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self {
            keys: DEFAULT_SYMBOLS.iter().copied().map(SymbolKey::from).collect(),
        }
    }
}
