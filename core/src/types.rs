/// Grid dimension (cards per row and per column).
pub type Dim = u8;

/// Count type used for card ids, card counts and pair counts.
pub type CardCount = u16;

/// Stable identifier of a card, equal to its position in the dealt deck.
pub type CardId = CardCount;

/// Milliseconds on the engine's host-driven clock.
pub type Millis = u64;

/// Session counter, bumped on every new deal.
pub type Generation = u64;

pub const fn mult(a: Dim, b: Dim) -> CardCount {
    let a = a as CardCount;
    let b = b as CardCount;
    a.saturating_mul(b)
}

/// Index of a player seat, either `0` or `1`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PlayerIndex(u8);

impl PlayerIndex {
    pub const FIRST: Self = Self(0);
    pub const SECOND: Self = Self(1);

    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Seat after this one, wrapping around `seats`.
    pub const fn next(self, seats: u8) -> Self {
        Self((self.0 + 1) % seats)
    }
}

impl core::fmt::Display for PlayerIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // players are numbered from one on screen
        write!(f, "Player {}", self.0 + 1)
    }
}
