use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GameConfig {
    #[serde(default = "default_game_url")]
    pub url: String,
    /// Rank labels that end the run on an exact (trimmed) match.
    #[serde(default = "default_stop_ranks")]
    pub stop_ranks: Vec<String>,
    /// Text probes checked after the rank label, any visible match stops the run.
    #[serde(default = "default_stop_phrases")]
    pub stop_phrases: Vec<String>,
}

fn default_game_url() -> String {
    "https://www.nytimes.com/puzzles/spelling-bee".to_string()
}

fn default_stop_ranks() -> Vec<String> {
    vec!["Genius".to_string()]
}

fn default_stop_phrases() -> Vec<String> {
    vec!["Queen Bee".to_string()]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            url: default_game_url(),
            stop_ranks: default_stop_ranks(),
            stop_phrases: default_stop_phrases(),
        }
    }
}

/// Delay bounds for humanized input pacing, all in milliseconds.
///
/// These are tunables, not correctness knobs. Min/max pairs are sampled
/// uniformly per event; min == max gives a fixed delay.
#[derive(Debug, Deserialize, Clone)]
pub struct PacingConfig {
    pub char_delay_min_ms: u64,
    pub char_delay_max_ms: u64,
    pub pre_submit_min_ms: u64,
    pub pre_submit_max_ms: u64,
    /// Fixed pause after submit before reading feedback.
    pub settle_ms: u64,
    pub word_gap_min_ms: u64,
    pub word_gap_max_ms: u64,
    /// Pause after a stop condition fires, lets the success animation render.
    pub stop_grace_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            char_delay_min_ms: 200,
            char_delay_max_ms: 500,
            pre_submit_min_ms: 300,
            pre_submit_max_ms: 600,
            settle_ms: 1500,
            word_gap_min_ms: 6000,
            word_gap_max_ms: 7000,
            stop_grace_ms: 3000,
        }
    }
}

impl PacingConfig {
    /// All-zero pacing for deterministic tests.
    pub fn zero() -> Self {
        Self {
            char_delay_min_ms: 0,
            char_delay_max_ms: 0,
            pre_submit_min_ms: 0,
            pre_submit_max_ms: 0,
            settle_ms: 0,
            word_gap_min_ms: 0,
            word_gap_max_ms: 0,
            stop_grace_ms: 0,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses() {
        let config = Config::load(Path::new("config.toml")).unwrap();
        assert!(config.api.base_url.starts_with("https://"));
        assert_eq!(config.game.stop_ranks, vec!["Genius"]);
        assert_eq!(config.game.stop_phrases, vec!["Queen Bee"]);
        assert_eq!(config.pacing.settle_ms, 1500);
        assert!(config.pacing.word_gap_min_ms > config.pacing.settle_ms);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "http://localhost:8080"
            "#,
        )
        .unwrap();
        assert_eq!(config.game.stop_ranks, vec!["Genius"]);
        assert_eq!(config.pacing.char_delay_min_ms, 200);
        assert_eq!(config.pacing.word_gap_max_ms, 7000);
    }

    #[test]
    fn test_zero_pacing_is_all_zero() {
        let pacing = PacingConfig::zero();
        assert_eq!(pacing.char_delay_max_ms, 0);
        assert_eq!(pacing.settle_ms, 0);
        assert_eq!(pacing.word_gap_max_ms, 0);
        assert_eq!(pacing.stop_grace_ms, 0);
    }
}
