/// Frame loop that drives the round engine: draws the current screen,
/// polls the keyboard, and routes countdown events and round-over
/// notifications back into the engine on a single execution context.
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::info;

use crate::core::countdown::{CountdownEvent, TokioCountdown};
use crate::games::guessword::game::{Buzz, RoundConfig, RoundEngine};
use crate::games::guessword::renderer::GuessWordRenderer;
use crate::games::guessword::words::WordDeck;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Screen {
    Title,
    Play,
    Results { score: i32 },
}

pub struct App {
    engine: RoundEngine,
    ticks: mpsc::UnboundedReceiver<CountdownEvent>,
    word_count: usize,
    round_seconds: u32,
}

impl App {
    pub fn new(config: RoundConfig, words: Vec<String>) -> Self {
        let (tick_tx, ticks) = mpsc::unbounded_channel();
        let word_count = words.len();
        let round_seconds = config.round_seconds;
        let engine = RoundEngine::new(
            config,
            WordDeck::new(words),
            Box::new(TokioCountdown::default()),
            tick_tx,
        );
        Self {
            engine,
            ticks,
            word_count,
            round_seconds,
        }
    }

    pub async fn run(self, mut terminal: DefaultTerminal) -> Result<()> {
        let Self {
            mut engine,
            mut ticks,
            word_count,
            round_seconds,
        } = self;
        let mut round_over = engine.watch_round_over();
        let mut screen = Screen::Title;
        // Buzz cue currently flashing and when it started.
        let mut cue: Option<(Buzz, Instant)> = None;

        loop {
            if let Some(buzz) = engine.take_feedback() {
                cue = Some((buzz, Instant::now()));
            }
            if let Some((buzz, since)) = cue {
                if since.elapsed() >= buzz.duration() {
                    cue = None;
                }
            }
            let flash = cue.map(|(buzz, _)| buzz);

            terminal.draw(|f| match screen {
                Screen::Title => GuessWordRenderer::render_title(f, word_count, round_seconds),
                Screen::Play => GuessWordRenderer::render_play(f, &engine.view(), flash),
                Screen::Results { score } => GuessWordRenderer::render_results(f, score, flash),
            })?;

            // INPUT (Non-blocking)
            if event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    if !handle_key(&mut engine, &mut screen, key.code) {
                        break;
                    }
                }
            }

            tokio::select! {
                Some(ev) = ticks.recv() => {
                    engine.handle_countdown(ev);
                }

                changed = round_over.changed() => {
                    if changed.is_ok() && *round_over.borrow_and_update() {
                        engine.acknowledge_round_over();
                        let score = engine.score();
                        info!(score, "navigating to results");
                        screen = Screen::Results { score };
                    }
                }

                _ = tokio::time::sleep(FRAME_INTERVAL) => {}
            }
        }

        engine.teardown();
        Ok(())
    }
}

/// Returns false when the player asked to quit.
fn handle_key(engine: &mut RoundEngine, screen: &mut Screen, code: KeyCode) -> bool {
    match *screen {
        Screen::Title | Screen::Results { .. } => match code {
            KeyCode::Enter => {
                engine.start();
                *screen = Screen::Play;
            }
            KeyCode::Esc | KeyCode::Char('q') => return false,
            _ => {}
        },
        Screen::Play => match code {
            KeyCode::Right | KeyCode::Char('y') => engine.guess_correct(),
            KeyCode::Left | KeyCode::Char('n') => engine.skip(),
            KeyCode::Esc => return false,
            _ => {}
        },
    }
    true
}
