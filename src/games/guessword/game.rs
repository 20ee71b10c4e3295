/// Round engine for the word-dash game: word queue, score, countdown and
/// the edge-triggered round-over / buzz signals the UI reacts to.
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;
use tracing::{info, warn};

use super::words::WordDeck;
use crate::core::countdown::{CountdownEvent, CountdownTimer};
use crate::core::observable::Observable;

/// The round clock moves in whole seconds.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
/// Default round length in seconds.
pub const ROUND_SECONDS: u32 = 60;
/// Default remaining time at which the countdown buzz starts.
pub const PANIC_SECONDS: u32 = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoundConfig {
    pub round_seconds: u32,
    pub panic_seconds: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            panic_seconds: PANIC_SECONDS,
        }
    }
}

/// Which buzz cue the consumer should play. Edge-triggered: a new cue
/// overwrites an unacknowledged one (last write wins), and reading it
/// through `take_feedback` acknowledges it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Buzz {
    #[default]
    None,
    Correct,
    Panic,
    GameOver,
}

impl Buzz {
    /// Vibration-style pattern in milliseconds, pause first.
    pub fn pattern(self) -> &'static [u64] {
        match self {
            Buzz::None => &[0],
            Buzz::Correct => &[100, 100, 100, 100, 100, 100],
            Buzz::Panic => &[0, 200],
            Buzz::GameOver => &[0, 2000],
        }
    }

    /// Total pattern duration, used by the UI to time its cue.
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.pattern().iter().sum())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Over,
}

/// Per-frame snapshot of the observable round state.
#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    pub word: String,
    pub score: i32,
    pub seconds_left: u32,
    pub clock: String,
    pub panic: bool,
    pub round_over: bool,
}

pub struct RoundEngine {
    config: RoundConfig,
    deck: WordDeck,
    timer: Box<dyn CountdownTimer>,
    events: UnboundedSender<CountdownEvent>,
    phase: Phase,
    word: Observable<String>,
    score: Observable<i32>,
    seconds_left: Observable<u32>,
    round_over: Observable<bool>,
    buzz: Observable<Buzz>,
}

impl RoundEngine {
    /// `events` is the sink the countdown delivers into; the consumer owns
    /// the receiving end and routes every event back through
    /// [`RoundEngine::handle_countdown`] so all state mutation stays on one
    /// execution context.
    pub fn new(
        config: RoundConfig,
        deck: WordDeck,
        timer: Box<dyn CountdownTimer>,
        events: UnboundedSender<CountdownEvent>,
    ) -> Self {
        Self {
            deck,
            timer,
            events,
            phase: Phase::Idle,
            word: Observable::new(String::new()),
            score: Observable::new(0),
            seconds_left: Observable::new(config.round_seconds),
            round_over: Observable::new(false),
            buzz: Observable::new(Buzz::None),
            config,
        }
    }

    /// Begin a round: fresh shuffled deck, first word drawn, score zeroed,
    /// clock reset, countdown running. Starting while a round is already
    /// running is a caller error; the prior countdown must be torn down
    /// first.
    pub fn start(&mut self) {
        debug_assert!(
            self.phase != Phase::Running,
            "start() while a round is running; teardown() first"
        );
        if self.phase == Phase::Running {
            warn!("ignoring start() while a round is running");
            return;
        }
        self.timer.cancel();
        self.deck.reset();
        self.word.set(self.deck.draw());
        self.score.set(0);
        self.seconds_left.set(self.config.round_seconds);
        self.round_over.set(false);
        self.buzz.set(Buzz::None);
        self.phase = Phase::Running;
        self.timer.begin(
            TICK_INTERVAL,
            u64::from(self.config.round_seconds),
            self.events.clone(),
        );
        info!(seconds = self.config.round_seconds, "round started");
    }

    /// Pass on the current word: score -1, next word. The clock is
    /// unaffected.
    pub fn skip(&mut self) {
        if !self.expect_running("skip") {
            return;
        }
        self.score.update(|s| *s -= 1);
        self.advance_word();
    }

    /// Word guessed: score +1, buzz, next word.
    pub fn guess_correct(&mut self) {
        if !self.expect_running("guess_correct") {
            return;
        }
        self.score.update(|s| *s += 1);
        self.buzz.set(Buzz::Correct);
        self.advance_word();
    }

    /// Countdown event sink. Events arriving outside a running round (late
    /// deliveries from a cancelled or spent countdown) are discarded.
    pub fn handle_countdown(&mut self, event: CountdownEvent) {
        if self.phase != Phase::Running {
            return;
        }
        match event {
            CountdownEvent::Tick => {
                let left = self.seconds_left.get().saturating_sub(1);
                self.seconds_left.set(left);
                if left == 0 {
                    self.finish_round();
                } else if left <= self.config.panic_seconds {
                    self.buzz.set(Buzz::Panic);
                }
            }
            CountdownEvent::Finished => self.finish_round(),
        }
    }

    /// Reset the round-over flag after reacting to it.
    pub fn acknowledge_round_over(&mut self) {
        self.round_over.set(false);
    }

    /// Clear the pending buzz cue.
    pub fn acknowledge_feedback(&mut self) {
        self.buzz.set(Buzz::None);
    }

    /// Read and acknowledge the pending buzz cue in one step.
    pub fn take_feedback(&mut self) -> Option<Buzz> {
        let buzz = self.buzz.get();
        if buzz == Buzz::None {
            return None;
        }
        self.acknowledge_feedback();
        Some(buzz)
    }

    /// Cancel the countdown and return to idle. Idempotent; safe after the
    /// countdown already finished naturally.
    pub fn teardown(&mut self) {
        self.timer.cancel();
        self.phase = Phase::Idle;
    }

    pub fn word(&self) -> String {
        self.word.get()
    }

    pub fn score(&self) -> i32 {
        self.score.get()
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left.get()
    }

    pub fn is_round_over(&self) -> bool {
        self.round_over.get()
    }

    pub fn pending_feedback(&self) -> Buzz {
        self.buzz.get()
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.seconds_left.get())
    }

    pub fn watch_word(&self) -> watch::Receiver<String> {
        self.word.subscribe()
    }

    pub fn watch_score(&self) -> watch::Receiver<i32> {
        self.score.subscribe()
    }

    pub fn watch_seconds_left(&self) -> watch::Receiver<u32> {
        self.seconds_left.subscribe()
    }

    pub fn watch_round_over(&self) -> watch::Receiver<bool> {
        self.round_over.subscribe()
    }

    pub fn watch_feedback(&self) -> watch::Receiver<Buzz> {
        self.buzz.subscribe()
    }

    pub fn view(&self) -> RoundView {
        let seconds_left = self.seconds_left.get();
        RoundView {
            word: self.word.get(),
            score: self.score.get(),
            seconds_left,
            clock: format_clock(seconds_left),
            panic: seconds_left <= self.config.panic_seconds,
            round_over: self.round_over.get(),
        }
    }

    fn advance_word(&mut self) {
        self.word.set(self.deck.draw());
    }

    fn finish_round(&mut self) {
        self.timer.cancel();
        self.phase = Phase::Over;
        self.round_over.set(true);
        self.buzz.set(Buzz::GameOver);
        info!(score = self.score.get(), "round over");
    }

    fn expect_running(&self, op: &'static str) -> bool {
        debug_assert!(
            self.phase == Phase::Running,
            "{op}() outside a running round"
        );
        if self.phase != Phase::Running {
            warn!(op, "action outside a running round");
            return false;
        }
        true
    }
}

pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
