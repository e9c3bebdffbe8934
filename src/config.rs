use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::typewriter::Script;

const SITE_CONFIG_FILE: &str = "site.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Embedded config file not found: {0}")]
    Missing(&'static str),
    #[error("Couldn't parse site config")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must be greater than zero")]
    ZeroPeriod(&'static str),
    #[error("Loading cap must stay below 100, got {0}")]
    CapOutOfRange(u8),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub tick_ms: u64,
    pub cap: u8,
    pub loaded_delay_ms: u64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            cap: 99,
            loaded_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub limit: usize,
    pub duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            limit: 3,
            duration_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub title: String,
    pub reveal_delay_ms: u64,
    pub char_tick_ms: u64,
    pub line_pause_ms: u64,
    pub script: Vec<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            title: "tamish@portfolio:~".to_string(),
            reveal_delay_ms: 3000,
            char_tick_ms: 30,
            line_pause_ms: 500,
            script: Vec::new(),
        }
    }
}

impl TerminalConfig {
    pub fn script(&self) -> Script {
        Script::new(self.script.iter().cloned())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub loading: LoadingConfig,
    pub toasts: ToastConfig,
    pub terminal: TerminalConfig,
}

impl SiteConfig {
    /// Reads the config embedded from `content/site.json`.
    pub fn load() -> Result<Self, ConfigError> {
        let file = Content::get(SITE_CONFIG_FILE).ok_or(ConfigError::Missing(SITE_CONFIG_FILE))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(raw: &[u8]) -> Result<Self, ConfigError> {
        let config = serde_json::from_slice::<SiteConfig>(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("loading.tick_ms", self.loading.tick_ms),
            ("terminal.char_tick_ms", self.terminal.char_tick_ms),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::ZeroPeriod(*name));
        }
        if self.loading.cap >= 100 {
            return Err(ConfigError::CapOutOfRange(self.loading.cap));
        }
        Ok(())
    }

    /// Falls back to the defaults (and an empty script) when the embedded
    /// config is unusable.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::error!("Using default site config: {e}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = SiteConfig::load().expect("embedded site config should parse");
        assert_eq!(config.loading.cap, 99);
        assert_eq!(config.loading.tick_ms, 30);
        assert_eq!(config.terminal.line_pause_ms, 500);
        assert_eq!(config.terminal.script.len(), 21);
        assert_eq!(
            config.terminal.script().line(0),
            Some("$ ssh tamish@portfolio.com")
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SiteConfig::from_json(br#"{"terminal": {"script": ["$ ls"]}}"#)
            .expect("partial config should parse");
        assert_eq!(config.loading, LoadingConfig::default());
        assert_eq!(config.terminal.char_tick_ms, 30);
        assert_eq!(config.terminal.script, vec!["$ ls".to_string()]);
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = SiteConfig::from_json(br#"{"terminal": {"char_tick_ms": 0}}"#)
            .expect_err("zero tick should be rejected");
        assert!(matches!(err, ConfigError::ZeroPeriod("terminal.char_tick_ms")));
    }

    #[test]
    fn test_cap_must_stay_below_completion() {
        let err = SiteConfig::from_json(br#"{"loading": {"cap": 100}}"#)
            .expect_err("cap of 100 should be rejected");
        assert!(matches!(err, ConfigError::CapOutOfRange(100)));
    }

    #[test]
    fn test_malformed_json() {
        let err = SiteConfig::from_json(b"{ not json").expect_err("should fail to parse");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_default_has_empty_script() {
        let config = SiteConfig::default();
        assert!(config.terminal.script().is_empty());
        assert!(config.validate().is_ok());
    }
}
