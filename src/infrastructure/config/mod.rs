//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub adapters: AdaptersConfig,
    #[serde(default)]
    pub polling: PollingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
    /// Fixed seed for phrase selection; random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrase_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdaptersConfig {
    pub telegram: Option<TelegramConfig>,
    pub console: Option<ConsoleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TelegramConfig {
    pub enabled: bool,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
}

/// Long polling settings for getUpdates
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PollingConfig {
    pub timeout_seconds: i64,
    pub error_backoff_seconds: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            error_backoff_seconds: 5,
        }
    }
}

/// Where replies go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterChoice {
    Telegram { token: String },
    Console,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "WOLF-AI GENESIS".to_string(),
                prefix: "/".to_string(),
                phrase_seed: None,
            },
            adapters: AdaptersConfig {
                telegram: Some(TelegramConfig {
                    enabled: false,
                    token: None,
                }),
                console: Some(ConsoleConfig {
                    enabled: true,
                }),
            },
            polling: PollingConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.polling.timeout_seconds < 0 {
            return Err(ConfigError::InvalidValue(format!(
                "polling.timeout-seconds must not be negative, got {}",
                self.polling.timeout_seconds
            )));
        }
        Ok(())
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Overlay BOT_TOKEN and BOT_PREFIX from the environment
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("BOT_TOKEN") {
            self.set_token(token);
        }

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            self.bot.prefix = prefix;
        }
    }

    fn set_token(&mut self, token: String) {
        let telegram = self.adapters.telegram.get_or_insert(TelegramConfig {
            enabled: true,
            token: None,
        });
        telegram.token = Some(token);
        telegram.enabled = true;
    }

    /// Pick the adapter to run: an explicit token wins, then an enabled Telegram
    /// config with a token, then the console when enabled.
    pub fn adapter(&self, token_override: Option<String>) -> Result<AdapterChoice, ConfigError> {
        if let Some(token) = token_override.filter(|t| !t.trim().is_empty()) {
            return Ok(AdapterChoice::Telegram { token });
        }

        if let Some(telegram) = self.adapters.telegram.as_ref().filter(|t| t.enabled) {
            return match telegram.token.as_ref().filter(|t| !t.trim().is_empty()) {
                Some(token) => Ok(AdapterChoice::Telegram { token: token.clone() }),
                None => Err(ConfigError::MissingField("adapters.telegram.token".to_string())),
            };
        }

        if self.adapters.console.as_ref().map(|c| c.enabled).unwrap_or(false) {
            return Ok(AdapterChoice::Console);
        }

        Err(ConfigError::MissingField("adapters.telegram.token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_console() {
        let config = Config::default();
        assert_eq!(config.adapter(None).expect("adapter"), AdapterChoice::Console);
        assert_eq!(config.polling.timeout_seconds, 30);
    }

    #[test]
    fn test_token_override_wins() {
        let config = Config::default();
        assert_eq!(
            config.adapter(Some("123:abc".to_string())).expect("adapter"),
            AdapterChoice::Telegram { token: "123:abc".to_string() }
        );
        // Blank overrides are ignored
        assert_eq!(config.adapter(Some("  ".to_string())).expect("adapter"), AdapterChoice::Console);
    }

    #[test]
    fn test_enabled_telegram_requires_token() {
        let yaml = "
bot:
  name: wolf
  prefix: /
adapters:
  telegram:
    enabled: true
    token: null
  console:
    enabled: true
";
        let config = Config::from_yaml(yaml).expect("parse");
        assert!(matches!(config.adapter(None), Err(ConfigError::MissingField(_))));
    }

    #[test]
    fn test_yaml_round_trip_keeps_kebab_case() {
        let mut config = Config::default();
        config.bot.phrase_seed = Some(7);
        let yaml = config.to_yaml().expect("yaml");
        assert!(yaml.contains("phrase-seed: 7"));
        assert!(yaml.contains("timeout-seconds: 30"));

        let parsed = Config::from_yaml(&yaml).expect("parse");
        assert_eq!(parsed.bot.phrase_seed, Some(7));
    }

    #[test]
    fn test_missing_polling_uses_defaults() {
        let yaml = "
bot:
  name: wolf
  prefix: '!'
adapters:
  telegram: null
  console: null
";
        let config = Config::from_yaml(yaml).expect("parse");
        assert_eq!(config.polling.error_backoff_seconds, 5);
        assert_eq!(config.bot.prefix, "!");
        assert!(config.adapter(None).is_err());
    }

    #[test]
    fn test_negative_timeout_rejected() {
        let yaml = "
bot:
  name: wolf
  prefix: /
adapters:
  telegram: null
  console: null
polling:
  timeout-seconds: -1
  error-backoff-seconds: 5
";
        assert!(matches!(Config::from_yaml(yaml), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_set_token_enables_telegram() {
        let mut config = Config::default();
        config.adapters.telegram = None;
        config.set_token("999:xyz".to_string());
        assert_eq!(
            config.adapter(None).expect("adapter"),
            AdapterChoice::Telegram { token: "999:xyz".to_string() }
        );
    }
}
