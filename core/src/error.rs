use thiserror::Error;

use crate::{CardId, Dim};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid size must be a positive even number, got {0}")]
    InvalidSize(Dim),
    #[error("Player count must be 1 or 2, got {0}")]
    InvalidPlayerCount(u8),
    #[error("No card with id {0} in the current deck")]
    InvalidCardId(CardId),
    #[error("Symbol catalog is empty")]
    EmptyCatalog,
    #[error("Inconsistent session snapshot: {0}")]
    InconsistentSnapshot(&'static str),
}

pub type Result<T> = core::result::Result<T, GameError>;
