use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Where the current turn stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No card face-up this turn.
    Idle,
    /// One card face-up, waiting for the second.
    OneRevealed,
    /// Two cards face-up, the outcome applies once the reveal delay elapses.
    Resolving,
}

impl TurnPhase {
    pub const fn from_pending(pending: usize) -> Self {
        match pending {
            0 => Self::Idle,
            1 => Self::OneRevealed,
            _ => Self::Resolving,
        }
    }

    pub const fn accepts_reveals(self) -> bool {
        !matches!(self, Self::Resolving)
    }
}

/// Mutable state of one deal, replaced wholesale by every new game.
#[derive(Clone, Debug, PartialEq)]
struct Session {
    config: GameConfig,
    deck: Vec<Card>,
    pending: SmallVec<[CardId; 2]>,
    matched_pairs: CardCount,
    scoreboard: Scoreboard,
    timer: SoloTimer,
    game_over: bool,
}

impl Session {
    fn new(config: GameConfig, deck: Vec<Card>, timing: Timing) -> Self {
        Self {
            config,
            deck,
            pending: SmallVec::new(),
            matched_pairs: 0,
            scoreboard: Scoreboard::default(),
            timer: SoloTimer::new(timing.timer_cap_secs),
            game_over: false,
        }
    }

    fn phase(&self) -> TurnPhase {
        TurnPhase::from_pending(self.pending.len())
    }

    fn outcome(&self) -> Option<GameOutcome> {
        self.game_over
            .then(|| self.scoreboard.outcome(self.config.players))
    }

    fn card_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.deck[usize::from(id)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum JobKind {
    Resolve {
        pair: [CardId; 2],
        decision: MatchDecision,
    },
    TimerTick,
}

/// Deferred effect, bound to the session that scheduled it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Job {
    generation: Generation,
    kind: JobKind,
}

/// Pending jobs ordered by due time, then by scheduling order.
#[derive(Clone, Debug, Default, PartialEq)]
struct Timeline {
    jobs: BTreeMap<(Millis, u64), Job>,
    next_seq: u64,
}

impl Timeline {
    fn schedule(&mut self, due: Millis, job: Job) {
        self.jobs.insert((due, self.next_seq), job);
        self.next_seq += 1;
    }

    fn pop_due(&mut self, now: Millis) -> Option<(Millis, Job)> {
        let entry = self.jobs.first_entry()?;
        let (due, _) = *entry.key();
        if due > now {
            return None;
        }
        Some((due, entry.remove()))
    }

    fn next_due(&self, generation: Generation) -> Option<Millis> {
        self.jobs
            .iter()
            .find(|(_, job)| job.generation == generation)
            .map(|(&(due, _), _)| due)
    }
}

/// The memory game state machine.
///
/// The engine has no clock of its own: hosts report elapsed time through [`MatchEngine::advance`], which runs
/// every deferred effect that came due, in order.
#[derive(Clone, Debug)]
pub struct MatchEngine<G = RandomDeckGenerator> {
    generator: G,
    timing: Timing,
    session: Session,
    generation: Generation,
    now: Millis,
    timeline: Timeline,
}

impl MatchEngine<RandomDeckGenerator> {
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RandomDeckGenerator::from_seed(seed))
    }
}

impl<G: DeckGenerator> MatchEngine<G> {
    /// Creates an engine and deals the first game.
    pub fn new(config: GameConfig, generator: G) -> Self {
        Self::with_timing(config, generator, Timing::DEFAULT)
    }

    pub fn with_timing(config: GameConfig, mut generator: G, timing: Timing) -> Self {
        let deck = generator.generate(config.size);
        let mut engine = Self {
            generator,
            timing,
            session: Session::new(config, deck, timing),
            generation: 0,
            now: 0,
            timeline: Timeline::default(),
        };
        engine.begin_session();
        engine
    }

    pub fn config(&self) -> GameConfig {
        self.session.config
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Milliseconds reported by the host so far.
    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn phase(&self) -> TurnPhase {
        self.session.phase()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.game_over
    }

    pub fn cards(&self) -> &[Card] {
        &self.session.deck
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.session.deck.get(usize::from(id))
    }

    /// Deals a fresh game, abandoning the current one including any pair still waiting to resolve.
    pub fn start_game(&mut self, config: GameConfig) -> SessionSnapshot {
        let deck = self.generator.generate(config.size);
        self.session = Session::new(config, deck, self.timing);
        self.begin_session();
        self.snapshot()
    }

    /// Deals a fresh game with the current configuration.
    pub fn restart(&mut self) -> SessionSnapshot {
        self.start_game(self.session.config)
    }

    /// Turns a card face-up and reports what happened.
    ///
    /// Only an unknown `id` is an error. Requests the current state cannot honor are ignored and reported as
    /// [`RevealOutcome::Rejected`].
    pub fn reveal(&mut self, id: CardId) -> Result<RevealOutcome> {
        use RejectReason::*;

        let card = self.card(id).ok_or(GameError::InvalidCardId(id))?;

        let rejection = if self.session.game_over {
            Some(GameOver)
        } else if !self.session.phase().accepts_reveals() {
            Some(Resolving)
        } else if card.matched {
            Some(AlreadyMatched)
        } else if card.revealed {
            Some(AlreadyRevealed)
        } else {
            None
        };
        if let Some(reason) = rejection {
            log::trace!("Ignoring reveal of card {}: {:?}", id, reason);
            return Ok(RevealOutcome::Rejected(reason));
        }

        self.session.card_mut(id).revealed = true;
        self.session.pending.push(id);
        log::trace!("Revealed card {}", id);

        let [first, second] = match self.session.pending.as_slice() {
            &[first, second] => [first, second],
            _ => return Ok(RevealOutcome::FirstRevealed),
        };

        let decision = if self.session.deck[usize::from(first)]
            .pairs_with(&self.session.deck[usize::from(second)])
        {
            MatchDecision::Match
        } else {
            MatchDecision::Mismatch
        };
        log::debug!(
            "Cards {} and {} pending, {:?} applies in {}ms",
            first,
            second,
            decision,
            self.timing.reveal_delay_ms
        );
        self.schedule(
            self.timing.reveal_delay_ms,
            JobKind::Resolve {
                pair: [first, second],
                decision,
            },
        );
        Ok(RevealOutcome::PairPending(decision))
    }

    /// [`MatchEngine::reveal`], returning the resulting snapshot.
    pub fn request_reveal(&mut self, id: CardId) -> Result<SessionSnapshot> {
        self.reveal(id)?;
        Ok(self.snapshot())
    }

    /// Moves the clock forward, running every job that falls due on the way.
    pub fn advance(&mut self, elapsed_ms: Millis) -> SessionSnapshot {
        let target = self.now.saturating_add(elapsed_ms);
        while let Some((due, job)) = self.timeline.pop_due(target) {
            self.now = due;
            self.run(job);
        }
        self.now = target;
        self.snapshot()
    }

    /// Time until the next job of the live session, if any is scheduled.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timeline
            .next_due(self.generation)
            .map(|due| due.saturating_sub(self.now))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let session = &self.session;
        let solo = session.config.players.is_solo();
        SessionSnapshot {
            generation: self.generation,
            config: session.config,
            cards: session.deck.clone(),
            pending: session.pending.clone(),
            phase: session.phase(),
            matched_pairs: session.matched_pairs,
            total_pairs: session.config.total_pairs(),
            scores: session.scoreboard.scores(),
            current_player: session.scoreboard.current(),
            game_over: session.game_over,
            elapsed_secs: session.timer.elapsed_secs(),
            remaining_secs: solo.then(|| session.timer.remaining_secs()),
            hint: solo.then(|| session.timer.hint()),
            outcome: session.outcome(),
        }
    }

    fn begin_session(&mut self) {
        self.generation += 1;
        log::debug!(
            "Starting game {}: {}x{} grid, {} player(s)",
            self.generation,
            self.session.config.size.get(),
            self.session.config.size.get(),
            self.session.config.players.seats()
        );
        if self.session.config.players.is_solo() && !self.session.timer.is_capped() {
            self.schedule(self.timing.tick_interval_ms, JobKind::TimerTick);
        }
    }

    fn schedule(&mut self, delay: Millis, kind: JobKind) {
        let job = Job {
            generation: self.generation,
            kind,
        };
        self.timeline.schedule(self.now.saturating_add(delay), job);
    }

    fn run(&mut self, job: Job) {
        if job.generation != self.generation {
            log::debug!(
                "Discarding {:?} from superseded game {}",
                job.kind,
                job.generation
            );
            return;
        }

        match job.kind {
            JobKind::Resolve { pair, decision } => self.resolve(pair, decision),
            JobKind::TimerTick => self.tick_timer(),
        }
    }

    fn resolve(&mut self, pair: [CardId; 2], decision: MatchDecision) {
        let session = &mut self.session;
        if session.pending.as_slice() != pair.as_slice() {
            log::warn!(
                "Resolution for {:?} does not match pending {:?}, skipped",
                pair,
                session.pending
            );
            return;
        }

        match decision {
            MatchDecision::Match => {
                for id in pair {
                    session.card_mut(id).matched = true;
                }
                session.matched_pairs += 1;
                session.scoreboard.award();
                if session.matched_pairs == session.config.total_pairs() {
                    session.game_over = true;
                }
            }
            MatchDecision::Mismatch => {
                for id in pair {
                    session.card_mut(id).revealed = false;
                }
                session.scoreboard.pass_turn(session.config.players);
            }
        }
        session.pending.clear();

        log::debug!(
            "Resolved {:?} on cards {:?}, {} of {} pairs found",
            decision,
            pair,
            session.matched_pairs,
            session.config.total_pairs()
        );
        if let Some(outcome) = session.outcome() {
            log::debug!("Game {} over: {:?}", self.generation, outcome);
        }
    }

    fn tick_timer(&mut self) {
        let session = &mut self.session;
        if !session.config.players.is_solo() || session.game_over {
            return;
        }
        session.timer.tick();
        if !session.timer.is_capped() {
            self.schedule(self.timing.tick_interval_ms, JobKind::TimerTick);
        }
    }
}
