use serde::Deserialize;

use crate::error::RevealError;

/// Which page flavour to render once the results are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// Rank, team, problem and tech tags.
    #[default]
    Simple,
    /// Everything in `Simple` plus a display score and a project nickname.
    Full,
}

/// Configuration for the reveal page, provided by the host at init.
///
/// Every field has a default, so a partial JSON object (or none at all)
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Length of a fresh countdown in seconds (default: 30).
    pub countdown_seconds: u32,
    /// Period of the countdown tick in milliseconds (default: 1000).
    pub tick_interval_ms: u32,
    /// The timer turns urgent at or below this many seconds (default: 60).
    pub urgency_threshold_secs: u32,
    /// Results endpoint polled on expiry.
    pub results_url: String,
    /// Endpoint that resets the server-side reveal clock.
    pub restart_url: String,
    /// Card flavour.
    pub variant: PageVariant,
    /// Particles per corner burst (default: 50).
    pub burst_size: usize,
    /// Delay between consecutive card entrances.
    pub card_stagger_ms: u32,
    /// Duration of one card entrance.
    pub card_transition_ms: u32,
    pub typewriter_start_delay_ms: u32,
    pub typewriter_char_interval_ms: u32,
    /// Length of the body flash played on reveal.
    pub flash_duration_ms: u32,
    /// `log` level name for the browser console (default: "info").
    pub log_level: String,
    /// Seed for the confetti RNG.
    pub seed: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: 30,
            tick_interval_ms: 1000,
            urgency_threshold_secs: 60,
            results_url: "/api/top10".to_string(),
            restart_url: "/api/restart".to_string(),
            variant: PageVariant::Simple,
            burst_size: 50,
            card_stagger_ms: 150,
            card_transition_ms: 600,
            typewriter_start_delay_ms: 1000,
            typewriter_char_interval_ms: 150,
            flash_duration_ms: 500,
            log_level: "info".to_string(),
            seed: 42,
        }
    }
}

impl RevealConfig {
    /// Parse a JSON configuration. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, RevealError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// The configured log level, falling back to `Info` on unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_json_is_default() {
        assert_eq!(RevealConfig::from_json("  ").unwrap(), RevealConfig::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = RevealConfig::from_json(r#"{"countdown_seconds": 5, "variant": "full"}"#).unwrap();
        assert_eq!(cfg.countdown_seconds, 5);
        assert_eq!(cfg.variant, PageVariant::Full);
        assert_eq!(cfg.results_url, "/api/top10");
        assert_eq!(cfg.burst_size, 50);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            RevealConfig::from_json("{countdown"),
            Err(RevealError::Decode(_))
        ));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let cfg = RevealConfig { log_level: "chatty".into(), ..RevealConfig::default() };
        assert_eq!(cfg.log_level(), log::Level::Info);
        let cfg = RevealConfig { log_level: "debug".into(), ..RevealConfig::default() };
        assert_eq!(cfg.log_level(), log::Level::Debug);
    }
}
