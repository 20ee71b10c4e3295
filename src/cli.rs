use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::games::guessword::game::{RoundConfig, PANIC_SECONDS, ROUND_SECONDS};
use crate::games::guessword::words::default_vocabulary;

#[derive(Parser)]
#[command(name = "wordterm")]
#[command(about = "A word-dash party game for the terminal")]
#[command(version)]
pub struct Cli {
    /// Round length in seconds
    #[arg(long)]
    pub seconds: Option<u32>,

    /// Remaining seconds at which the countdown buzz kicks in
    #[arg(long)]
    pub panic_seconds: Option<u32>,

    /// JSON file with a custom word list (an array of strings)
    #[arg(long)]
    pub words: Option<PathBuf>,

    /// JSON config file: {"seconds": 60, "panic_seconds": 10, "words": [..]}
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    seconds: Option<u32>,
    panic_seconds: Option<u32>,
    words: Option<Vec<String>>,
}

impl Cli {
    /// Merge flags over the optional config file. Explicit flags win.
    pub fn into_game_config(self) -> Result<(RoundConfig, Vec<String>)> {
        let file = match &self.config {
            Some(path) => parse_config_file(&read_file(path)?)
                .with_context(|| format!("parsing config file {}", path.display()))?,
            None => ConfigFile::default(),
        };

        let words = match &self.words {
            Some(path) => parse_word_list(&read_file(path)?)
                .with_context(|| format!("parsing word list {}", path.display()))?,
            None => file.words.unwrap_or_else(default_vocabulary),
        };
        if words.is_empty() {
            bail!("word list is empty");
        }

        let round_seconds = self.seconds.or(file.seconds).unwrap_or(ROUND_SECONDS);
        if round_seconds == 0 {
            bail!("round length must be at least one second");
        }
        let panic_seconds = self
            .panic_seconds
            .or(file.panic_seconds)
            .unwrap_or(PANIC_SECONDS)
            .min(round_seconds);

        Ok((
            RoundConfig {
                round_seconds,
                panic_seconds,
            },
            words,
        ))
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn parse_config_file(raw: &str) -> Result<ConfigFile> {
    Ok(serde_json::from_str(raw)?)
}

fn parse_word_list(raw: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli() -> Cli {
        Cli {
            seconds: None,
            panic_seconds: None,
            words: None,
            config: None,
        }
    }

    #[test]
    fn defaults_to_the_builtin_vocabulary_and_durations() {
        let (config, words) = cli().into_game_config().unwrap();
        assert_eq!(config.round_seconds, 60);
        assert_eq!(config.panic_seconds, 10);
        assert_eq!(words.len(), 21);
    }

    #[test]
    fn panic_threshold_is_clamped_to_the_round_length() {
        let mut args = cli();
        args.seconds = Some(5);
        let (config, _) = args.into_game_config().unwrap();
        assert_eq!(config.panic_seconds, 5);
    }

    #[test]
    fn zero_second_rounds_are_rejected() {
        let mut args = cli();
        args.seconds = Some(0);
        assert!(args.into_game_config().is_err());
    }

    #[test]
    fn parses_a_word_list_file() {
        let words = parse_word_list(r#"["pizza", "llama"]"#).unwrap();
        assert_eq!(words, vec!["pizza", "llama"]);
        assert!(parse_word_list("{}").is_err());
    }

    #[test]
    fn parses_a_config_file() {
        let file = parse_config_file(r#"{"seconds": 20, "words": ["a"]}"#).unwrap();
        assert_eq!(file.seconds, Some(20));
        assert_eq!(file.panic_seconds, None);
        assert_eq!(file.words.as_deref(), Some(&["a".to_string()][..]));
    }
}
