use serde::{Deserialize, Serialize};

use crate::*;

/// Whose turn it is and how many pairs each seat has claimed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    scores: [CardCount; 2],
    current: PlayerIndex,
}

impl Scoreboard {
    pub const fn scores(&self) -> [CardCount; 2] {
        self.scores
    }

    pub const fn current(&self) -> PlayerIndex {
        self.current
    }

    pub const fn score_of(&self, player: PlayerIndex) -> CardCount {
        self.scores[player.get()]
    }

    pub fn total(&self) -> CardCount {
        self.scores.iter().sum()
    }

    /// Credits a found pair to the player on turn. The turn stays with them.
    pub fn award(&mut self) {
        let slot = &mut self.scores[self.current.get()];
        *slot = slot.saturating_add(1);
    }

    /// Hands the turn to the next seat. With a single seat this is a no-op.
    pub fn pass_turn(&mut self, players: PlayerCount) {
        self.current = self.current.next(players.seats());
    }

    /// Final verdict once every pair is claimed.
    pub fn outcome(&self, players: PlayerCount) -> GameOutcome {
        use core::cmp::Ordering::*;

        if players.is_solo() {
            return GameOutcome::Cleared;
        }

        let [first, second] = self.scores;
        match first.cmp(&second) {
            Greater => GameOutcome::Winner(PlayerIndex::FIRST),
            Less => GameOutcome::Winner(PlayerIndex::SECOND),
            Equal => GameOutcome::Tie,
        }
    }
}
