use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use pairmatch_core::{
    DeckGenerator, GameConfig, MatchDecision, MatchEngine, Millis, RevealOutcome, TurnPhase,
};
use web_time::Instant;

use crate::command::{Command, HELP};
use crate::render;

/// Source of elapsed time for the host loop.
pub trait Clock {
    /// Milliseconds since the previous call.
    fn lap(&mut self) -> Millis;
    fn sleep(&mut self, ms: Millis);
}

pub struct WallClock {
    last: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn lap(&mut self) -> Millis {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_millis().try_into().unwrap_or(Millis::MAX)
    }

    fn sleep(&mut self, ms: Millis) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Text,
    /// One JSON snapshot per line.
    Json,
}

/// Terminal front end: reads commands, feeds them to the engine and prints what the engine reports.
pub struct Host<G, W, C> {
    engine: MatchEngine<G>,
    out: W,
    output: Output,
    clock: C,
}

impl<G: DeckGenerator, W: Write, C: Clock> Host<G, W, C> {
    pub fn new(engine: MatchEngine<G>, out: W, output: Output, clock: C) -> Self {
        Self {
            engine,
            out,
            output,
            clock,
        }
    }

    pub fn engine(&self) -> &MatchEngine<G> {
        &self.engine
    }

    pub fn run(&mut self, input: impl BufRead) -> anyhow::Result<()> {
        if self.output == Output::Text {
            writeln!(self.out, "{HELP}\n")?;
        }
        self.show()?;

        for line in input.lines() {
            let line = line.context("reading command")?;
            self.catch_up();

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(err) => self.notice(&format!("{err:#}"))?,
            }
        }
        Ok(())
    }

    fn handle(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Reveal(id) => self.reveal(id),
            Command::New { size, players } => {
                let current = self.engine.config();
                let config = GameConfig::new(
                    size.unwrap_or(current.size.get()),
                    players.unwrap_or(current.players.seats()),
                );
                match config {
                    Ok(config) => {
                        log::info!("New game: {:?}", config);
                        self.engine.start_game(config);
                        self.show()
                    }
                    Err(err) => self.notice(&err.to_string()),
                }
            }
            Command::Show => self.show(),
            Command::Help => self.notice(HELP),
            Command::Quit => Ok(()),
        }
    }

    fn reveal(&mut self, id: pairmatch_core::CardId) -> anyhow::Result<()> {
        let outcome = match self.engine.reveal(id) {
            Ok(outcome) => outcome,
            Err(err) => return self.notice(&err.to_string()),
        };

        match outcome {
            RevealOutcome::Rejected(reason) => {
                log::debug!("Card {} not flipped: {:?}", id, reason);
                self.notice(&format!("card {id} can't be flipped right now"))
            }
            RevealOutcome::FirstRevealed => self.show(),
            RevealOutcome::PairPending(decision) => {
                self.show()?;
                if self.output == Output::Text {
                    let verdict = match decision {
                        MatchDecision::Match => "It's a match!",
                        MatchDecision::Mismatch => "No match.",
                    };
                    writeln!(self.out, "{verdict}")?;
                }
                self.wait_for_resolution();
                self.show()
            }
        }
    }

    /// Sleeps through the reveal delay so both cards stay on screen, running timer ticks on the way.
    fn wait_for_resolution(&mut self) {
        while self.engine.phase() == TurnPhase::Resolving {
            let Some(wait) = self.engine.next_deadline() else {
                log::warn!("Pair pending without a scheduled resolution");
                break;
            };
            self.clock.sleep(wait);
            self.catch_up();
        }
    }

    fn catch_up(&mut self) {
        let elapsed = self.clock.lap();
        self.engine.advance(elapsed);
    }

    fn show(&mut self) -> anyhow::Result<()> {
        let snapshot = self.engine.snapshot();
        match self.output {
            Output::Text => writeln!(self.out, "{}", render::board(&snapshot))?,
            Output::Json => {
                serde_json::to_writer(&mut self.out, &snapshot)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> anyhow::Result<()> {
        match self.output {
            Output::Text => writeln!(self.out, "{message}")?,
            Output::Json => {
                serde_json::to_writer(&mut self.out, &serde_json::json!({ "notice": message }))?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}
