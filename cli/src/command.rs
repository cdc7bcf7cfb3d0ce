use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use pairmatch_core::{CardId, Dim};

pub const HELP: &str = "\
commands:
  <id> | flip <id>          turn a card face-up
  new [size] [players]      deal a new game (keeps current values when omitted)
  show | <enter>            redraw the board
  help                      this text
  quit                      leave";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(CardId),
    New {
        size: Option<Dim>,
        players: Option<u8>,
    },
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Show);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "flip" | "f" | "reveal" => {
                let id = words.next().ok_or_else(|| anyhow!("flip needs a card id"))?;
                Command::Reveal(parse_card(id)?)
            }
            "new" | "n" | "restart" => Command::New {
                size: words
                    .next()
                    .map(str::parse::<Dim>)
                    .transpose()
                    .context("grid size must be a number")?,
                players: words
                    .next()
                    .map(str::parse::<u8>)
                    .transpose()
                    .context("player count must be a number")?,
            },
            "show" | "s" => Command::Show,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other if other.starts_with(|c: char| c.is_ascii_digit()) => {
                Command::Reveal(parse_card(other)?)
            }
            other => bail!("unknown command {other:?}, try `help`"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected {extra:?} after command");
        }
        Ok(command)
    }
}

fn parse_card(word: &str) -> anyhow::Result<CardId> {
    word.parse()
        .with_context(|| format!("{word:?} is not a card id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_flips() {
        assert_eq!("12".parse::<Command>().unwrap(), Command::Reveal(12));
        assert_eq!("flip 3".parse::<Command>().unwrap(), Command::Reveal(3));
        assert_eq!("  F 0 ".parse::<Command>().unwrap(), Command::Reveal(0));
    }

    #[test]
    fn new_takes_optional_values() {
        assert_eq!(
            "new".parse::<Command>().unwrap(),
            Command::New {
                size: None,
                players: None
            }
        );
        assert_eq!(
            "new 6 2".parse::<Command>().unwrap(),
            Command::New {
                size: Some(6),
                players: Some(2)
            }
        );
    }

    #[test]
    fn empty_line_redraws() {
        assert_eq!("".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("   ".parse::<Command>().unwrap(), Command::Show);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("flip".parse::<Command>().is_err());
        assert!("flip x".parse::<Command>().is_err());
        assert!("7x".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
        assert!("new six".parse::<Command>().is_err());
        assert!("quit now".parse::<Command>().is_err());
    }
}
