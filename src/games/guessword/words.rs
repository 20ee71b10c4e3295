/// Word deck for the guessing rounds
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Built-in vocabulary used when no custom word list is configured.
pub const DEFAULT_WORDS: [&str; 21] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bug",
];

pub fn default_vocabulary() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Shuffled word queue. Each pass deals every vocabulary entry exactly
/// once; a spent pass is reshuffled from the full vocabulary, so the deck
/// never runs dry while the vocabulary is non-empty.
#[derive(Debug)]
pub struct WordDeck {
    vocabulary: Vec<String>,
    queue: Vec<String>,
    rng: StdRng,
}

impl WordDeck {
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self::with_rng(vocabulary, StdRng::from_os_rng())
    }

    /// Deterministic deck for tests.
    pub fn seeded(vocabulary: Vec<String>, seed: u64) -> Self {
        Self::with_rng(vocabulary, StdRng::seed_from_u64(seed))
    }

    fn with_rng(vocabulary: Vec<String>, rng: StdRng) -> Self {
        debug_assert!(!vocabulary.is_empty(), "vocabulary must not be empty");
        Self {
            vocabulary,
            queue: Vec::new(),
            rng,
        }
    }

    /// Discard the current pass so the next draw starts a fresh shuffle.
    pub fn reset(&mut self) {
        self.queue.clear();
    }

    /// Next word, reshuffling a full fresh pass first if this one is spent.
    pub fn draw(&mut self) -> String {
        if self.queue.is_empty() {
            self.queue = self.vocabulary.clone();
            self.queue.shuffle(&mut self.rng);
        }
        self.queue.pop().unwrap_or_default()
    }

    /// Words left in the current pass.
    pub fn remaining_in_pass(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn vocab(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn default_vocabulary_has_21_entries() {
        assert_eq!(default_vocabulary().len(), 21);
    }

    #[test]
    fn one_pass_deals_every_word_once() {
        let mut deck = WordDeck::seeded(default_vocabulary(), 42);
        let mut seen = HashSet::new();
        for _ in 0..21 {
            assert!(seen.insert(deck.draw()), "word repeated within one pass");
        }
        assert_eq!(seen.len(), 21);
    }

    #[test]
    fn exhaustion_reshuffles_instead_of_running_dry() {
        let mut deck = WordDeck::seeded(vocab(&["a", "b"]), 7);
        for _ in 0..10 {
            let word = deck.draw();
            assert!(!word.is_empty());
            assert!(word == "a" || word == "b");
        }
    }

    #[test]
    fn reset_starts_a_fresh_pass() {
        let mut deck = WordDeck::seeded(vocab(&["a", "b", "c"]), 7);
        deck.draw();
        assert_eq!(deck.remaining_in_pass(), 2);
        deck.reset();
        assert_eq!(deck.remaining_in_pass(), 0);
        assert!(!deck.draw().is_empty());
    }
}
