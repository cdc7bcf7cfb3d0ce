use std::fmt::Write;

use pairmatch_core::{Card, GameOutcome, PlayerCount, SessionSnapshot};

const CELL_WIDTH: usize = 12;

fn cell(card: &Card) -> String {
    let mut label: String = card.symbol.as_str().chars().take(CELL_WIDTH - 2).collect();
    if card.matched {
        label = format!("({label})");
    } else if !card.revealed {
        label = format!("#{:02}", card.id);
    }
    format!("{label:^width$}", width = CELL_WIDTH)
}

pub fn outcome_message(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Cleared => "You win!".to_string(),
        GameOutcome::Winner(player) => format!("{player} wins!"),
        GameOutcome::Tie => "It's a tie!".to_string(),
    }
}

fn status_line(snapshot: &SessionSnapshot) -> String {
    let mut line = format!("Pairs {}/{}", snapshot.matched_pairs, snapshot.total_pairs);
    match snapshot.config.players {
        PlayerCount::Solo => {
            let _ = write!(line, "  Score {}", snapshot.scores[0]);
            let _ = write!(line, "  Time {}s", snapshot.elapsed_secs);
            if let Some(remaining) = snapshot.remaining_secs {
                let _ = write!(line, " ({remaining}s left)");
            }
            if let (Some(hint), false) = (snapshot.hint, snapshot.game_over) {
                let _ = write!(line, "  {}", hint.label());
            }
        }
        PlayerCount::Duel => {
            let [first, second] = snapshot.scores;
            let _ = write!(line, "  Player 1: {first}  Player 2: {second}");
            if !snapshot.game_over {
                let _ = write!(line, "  Turn: {}", snapshot.current_player);
            }
        }
    }
    line
}

/// Draws the board as a grid of fixed-width cells followed by a status line.
pub fn board(snapshot: &SessionSnapshot) -> String {
    let side = usize::from(snapshot.config.size.get());
    let mut out = String::new();
    for row in snapshot.cards.chunks(side) {
        for card in row {
            out.push_str(&cell(card));
        }
        out.push('\n');
    }
    out.push_str(&status_line(snapshot));
    out.push('\n');
    if let Some(outcome) = snapshot.outcome {
        out.push_str(&outcome_message(outcome));
        out.push('\n');
    }
    out
}
