//! Optional user configuration.
//!
//! Read once at startup from `$PORTFOLIO_TERM_CONFIG`, or from
//! `~/.portfolio-term/config.json` when that variable is unset. A missing
//! file means defaults; a malformed one is a startup error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::output::Prompt;
use crate::reveal::REVEAL_DELAY;

pub const CONFIG_ENV: &str = "PORTFOLIO_TERM_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub user: String,
    pub host: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        let Prompt { user, host } = Prompt::default();
        Self { user, host }
    }
}

impl From<&PromptConfig> for Prompt {
    fn from(cfg: &PromptConfig) -> Self {
        Prompt::new(cfg.user.clone(), cfg.host.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt: PromptConfig,
    /// Delay between revealed lines, in milliseconds.
    pub reveal_delay_ms: u64,
    /// Abort in-flight reveals when the log is cleared.
    pub cancel_stale_reveals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: PromptConfig::default(),
            reveal_delay_ms: REVEAL_DELAY.as_millis() as u64,
            cancel_stale_reveals: false,
        }
    }
}

impl Config {
    /// Never zero; a tick interval needs a period.
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms.max(1))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load_default() -> anyhow::Result<Self> {
        let path = default_config_path();
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = load(&path)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    home.join(".portfolio-term").join("config.json")
}

pub fn load(path: &Path) -> anyhow::Result<Config> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        serde_json::from_str(&raw).with_context(|| format!("Invalid config JSON at {}", path.display()))?;
    if config.reveal_delay_ms == 0 {
        anyhow::bail!("reveal_delay_ms must be at least 1 in {}", path.display());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio-term-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.reveal_delay(), Duration::from_millis(80));
        assert!(!config.cancel_stale_reveals);
        assert_eq!(Prompt::from(&config.prompt), Prompt::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_file("partial.json", r#"{ "prompt": { "user": "guest" } }"#);
        let config = load(&path).unwrap();
        assert_eq!(config.prompt.user, "guest");
        assert_eq!(config.prompt.host, "terminal.prashant.dev");
        assert_eq!(config.reveal_delay_ms, 80);
    }

    #[test]
    fn test_full_file() {
        let path = temp_file(
            "full.json",
            r#"{ "prompt": { "user": "u", "host": "h" }, "reveal_delay_ms": 10, "cancel_stale_reveals": true }"#,
        );
        let config = load(&path).unwrap();
        assert_eq!(Prompt::from(&config.prompt).render(), "u@h:-$ ");
        assert_eq!(config.reveal_delay(), Duration::from_millis(10));
        assert!(config.cancel_stale_reveals);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let path = temp_file("broken.json", "{ not json");
        let err = load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }

    #[test]
    fn test_zero_reveal_delay_is_rejected() {
        let path = temp_file("zero.json", r#"{ "reveal_delay_ms": 0 }"#);
        let err = load(&path).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("reveal_delay_ms"));
        assert!(msg.contains("zero.json"));

        let config = Config { reveal_delay_ms: 0, ..Config::default() };
        assert_eq!(config.reveal_delay(), Duration::from_millis(1));
    }

    #[test]
    fn test_missing_file_is_an_error_for_load() {
        assert!(load(Path::new("/definitely/not/here.json")).is_err());
    }
}
