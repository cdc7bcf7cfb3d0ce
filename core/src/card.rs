use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::CardId;

/// Opaque identifier of the symbol printed on a card. Hosts map it to whatever asset they like.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolKey(String);

impl SymbolKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SymbolKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for SymbolKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for SymbolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One card of the deck as the engine stores it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: SymbolKey,
    pub revealed: bool,
    pub matched: bool,
}

impl Card {
    pub fn face_down(id: CardId, symbol: SymbolKey) -> Self {
        Self {
            id,
            symbol,
            revealed: false,
            matched: false,
        }
    }

    /// Whether the symbol is visible to players.
    pub const fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }

    /// Whether a reveal request against this card may be accepted.
    pub const fn is_selectable(&self) -> bool {
        !self.is_face_up()
    }

    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.symbol == other.symbol
    }
}
