#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use card::*;
pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use scoring::*;
pub use snapshot::*;
pub use timer::*;
pub use types::*;

mod card;
mod catalog;
mod engine;
mod error;
mod generator;
mod scoring;
mod snapshot;
mod timer;
mod types;

/// Side length of the square grid. Always even and at least two, so the deck splits into pairs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Dim", into = "Dim")]
pub struct GridSize(Dim);

impl GridSize {
    /// Sizes offered by the stock game.
    pub const PRESETS: [GridSize; 3] = [GridSize(4), GridSize(6), GridSize(8)];

    pub const fn new(size: Dim) -> Result<Self> {
        if size >= 2 && size % 2 == 0 {
            Ok(Self(size))
        } else {
            Err(GameError::InvalidSize(size))
        }
    }

    pub const fn get(self) -> Dim {
        self.0
    }

    pub const fn total_cards(self) -> CardCount {
        mult(self.0, self.0)
    }

    pub const fn total_pairs(self) -> CardCount {
        self.total_cards() / 2
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<Dim> for GridSize {
    type Error = GameError;

    fn try_from(size: Dim) -> Result<Self> {
        Self::new(size)
    }
}

impl From<GridSize> for Dim {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerCount {
    /// One player against the clock.
    #[default]
    Solo,
    /// Two players taking turns.
    Duel,
}

impl PlayerCount {
    pub const fn seats(self) -> u8 {
        match self {
            Self::Solo => 1,
            Self::Duel => 2,
        }
    }

    pub const fn is_solo(self) -> bool {
        matches!(self, Self::Solo)
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = GameError;

    fn try_from(count: u8) -> Result<Self> {
        match count {
            1 => Ok(Self::Solo),
            2 => Ok(Self::Duel),
            other => Err(GameError::InvalidPlayerCount(other)),
        }
    }
}

impl From<PlayerCount> for u8 {
    fn from(players: PlayerCount) -> Self {
        players.seats()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: GridSize,
    pub players: PlayerCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: GridSize, players: PlayerCount) -> Self {
        Self { size, players }
    }

    /// Validates raw values coming from a configuration surface.
    pub fn new(size: Dim, players: u8) -> Result<Self> {
        Ok(Self::new_unchecked(
            GridSize::new(size)?,
            PlayerCount::try_from(players)?,
        ))
    }

    pub const fn total_cards(&self) -> CardCount {
        self.size.total_cards()
    }

    pub const fn total_pairs(&self) -> CardCount {
        self.size.total_pairs()
    }
}

/// Timing contract between the engine and its host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// How long both cards of a completed pair stay face-up before the outcome applies.
    pub reveal_delay_ms: Millis,
    /// Period of the solo timer.
    pub tick_interval_ms: Millis,
    /// The solo timer stops counting here.
    pub timer_cap_secs: u8,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        reveal_delay_ms: 800,
        tick_interval_ms: 1000,
        timer_cap_secs: 60,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of a single reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The request was ignored, the session is unchanged.
    Rejected(RejectReason),
    /// First card of the turn is now face-up.
    FirstRevealed,
    /// Second card is face-up, the decision is made and will apply after the reveal delay.
    PairPending(MatchDecision),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    AlreadyRevealed,
    AlreadyMatched,
    Resolving,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchDecision {
    Match,
    Mismatch,
}

/// Final result of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Solo game with every pair found.
    Cleared,
    Winner(PlayerIndex),
    Tie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_rejects_odd_and_tiny() {
        assert_eq!(GridSize::new(0), Err(GameError::InvalidSize(0)));
        assert_eq!(GridSize::new(1), Err(GameError::InvalidSize(1)));
        assert_eq!(GridSize::new(5), Err(GameError::InvalidSize(5)));
        assert_eq!(GridSize::new(2).map(GridSize::get), Ok(2));
    }

    #[test]
    fn presets_count_pairs() {
        let pairs: [CardCount; 3] = GridSize::PRESETS.map(GridSize::total_pairs);
        assert_eq!(pairs, [8, 18, 32]);
    }

    #[test]
    fn player_count_from_raw() {
        assert_eq!(PlayerCount::try_from(1), Ok(PlayerCount::Solo));
        assert_eq!(PlayerCount::try_from(2), Ok(PlayerCount::Duel));
        assert_eq!(
            PlayerCount::try_from(3),
            Err(GameError::InvalidPlayerCount(3))
        );
    }

    #[test]
    fn config_deserializes_from_raw_numbers() {
        let config: GameConfig = serde_json::from_str(r#"{"size":6,"players":2}"#).unwrap();
        assert_eq!(config, GameConfig::new(6, 2).unwrap());

        let bad = serde_json::from_str::<GameConfig>(r#"{"size":5,"players":1}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn timing_fills_missing_fields_with_defaults() {
        let timing: Timing = serde_json::from_str(r#"{"reveal_delay_ms":250}"#).unwrap();
        assert_eq!(timing.reveal_delay_ms, 250);
        assert_eq!(timing.tick_interval_ms, 1000);
        assert_eq!(timing.timer_cap_secs, 60);
    }
}
