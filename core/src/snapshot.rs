use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Read-only picture of a session, handed to whatever renders the game.
///
/// Every snapshot is taken between engine transitions, so a half-applied pair resolution is never visible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub generation: Generation,
    pub config: GameConfig,
    pub cards: Vec<Card>,
    pub pending: SmallVec<[CardId; 2]>,
    pub phase: TurnPhase,
    pub matched_pairs: CardCount,
    pub total_pairs: CardCount,
    pub scores: [CardCount; 2],
    pub current_player: PlayerIndex,
    pub game_over: bool,
    /// Always zero outside solo games.
    pub elapsed_secs: u8,
    pub remaining_secs: Option<u8>,
    pub hint: Option<HintStage>,
    pub outcome: Option<GameOutcome>,
}

impl SessionSnapshot {
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(usize::from(id))
    }

    pub fn score_of(&self, player: PlayerIndex) -> CardCount {
        self.scores[player.get()]
    }

    /// Checks the bookkeeping invariants that must hold between transitions.
    pub fn validate(&self) -> Result<()> {
        use GameError::InconsistentSnapshot as Broken;

        if self.cards.len() != usize::from(self.config.total_cards()) {
            return Err(Broken("card count does not match grid size"));
        }
        if self.total_pairs != self.config.total_pairs() {
            return Err(Broken("pair total does not match grid size"));
        }

        let matched_cards = self.cards.iter().filter(|card| card.matched).count();
        if matched_cards != usize::from(self.matched_pairs) * 2 {
            return Err(Broken("matched cards do not add up to matched pairs"));
        }
        if self.game_over != (self.matched_pairs == self.total_pairs) {
            return Err(Broken("game over flag disagrees with matched pairs"));
        }

        let [first, second] = self.scores;
        let scored = match self.config.players {
            PlayerCount::Solo if second != 0 => {
                return Err(Broken("second seat scored in a solo game"));
            }
            PlayerCount::Solo => first,
            PlayerCount::Duel => first.saturating_add(second),
        };
        if scored != self.matched_pairs {
            return Err(Broken("scores do not add up to matched pairs"));
        }
        if self.config.players.is_solo() && self.current_player != PlayerIndex::FIRST {
            return Err(Broken("turn moved in a solo game"));
        }

        if self.phase != TurnPhase::from_pending(self.pending.len()) {
            return Err(Broken("phase disagrees with pending selection"));
        }
        let pending_face_up = self.pending.iter().all(|&id| {
            self.card(id)
                .is_some_and(|card| card.revealed && !card.matched)
        });
        if !pending_face_up {
            return Err(Broken("pending card is not face-up and unmatched"));
        }

        Ok(())
    }
}
