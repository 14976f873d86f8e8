//! Runtime configuration for Kanbot.
//!
//! Configuration can be set via environment variables:
//! - `KANBOT_SIGNAL` - Optional. Leading token that addresses a line to the
//!   bot. Defaults to `!kanban`.
//! - `KANBOT_BOT_NAME` - Optional. Name shown as the board title. Defaults
//!   to `Kanbot`.
//! - `KANBOT_AUTHOR` - Optional. Author reported by the console adapter.
//!   Falls back to `USER`, then `console`.
//! - `KANBOT_OUTPUT` - Optional. `text` or `json`. Defaults to `text`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the signal token.
pub const SIGNAL_VAR: &str = "KANBOT_SIGNAL";
/// Environment variable holding the bot name.
pub const BOT_NAME_VAR: &str = "KANBOT_BOT_NAME";
/// Environment variable holding the console author.
pub const AUTHOR_VAR: &str = "KANBOT_AUTHOR";
/// Environment variable selecting the console output format.
pub const OUTPUT_VAR: &str = "KANBOT_OUTPUT";

const DEFAULT_SIGNAL: &str = "!kanban";
const DEFAULT_BOT_NAME: &str = "Kanbot";
const DEFAULT_AUTHOR: &str = "console";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to an unusable value.
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// How the console adapter writes replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text blocks.
    #[default]
    Text,
    /// One JSON-encoded reply per line.
    Json,
}

impl TryFrom<&str> for OutputFormat {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                name: OUTPUT_VAR,
                value: value.to_owned(),
            }),
        }
    }
}

/// Bot configuration.
///
/// # Examples
///
/// ```
/// use kanbot::config::KanbotConfig;
///
/// let config = KanbotConfig::default();
/// assert_eq!(config.signal, "!kanban");
///
/// let custom = KanbotConfig::default().with_signal("!board");
/// assert_eq!(custom.signal, "!board");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbotConfig {
    /// Leading token that addresses a line to the bot.
    pub signal: String,
    /// Name shown as the board title.
    pub bot_name: String,
    /// Author the console adapter reports for every line.
    pub author: String,
    /// Console output format.
    pub output: OutputFormat,
}

impl Default for KanbotConfig {
    fn default() -> Self {
        Self {
            signal: DEFAULT_SIGNAL.to_owned(),
            bot_name: DEFAULT_BOT_NAME.to_owned(),
            author: DEFAULT_AUTHOR.to_owned(),
            output: OutputFormat::Text,
        }
    }
}

impl KanbotConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable holds an
    /// unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the signal contains
    /// whitespace or the output format is unknown.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(signal) = read(SIGNAL_VAR) {
            if signal.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidValue {
                    name: SIGNAL_VAR,
                    value: signal,
                });
            }
            config.signal = signal;
        }
        if let Some(bot_name) = read(BOT_NAME_VAR) {
            config.bot_name = bot_name;
        }
        if let Some(author) = read(AUTHOR_VAR).or_else(|| read("USER")) {
            config.author = author;
        }
        if let Some(output) = read(OUTPUT_VAR) {
            config.output = OutputFormat::try_from(output.as_str())?;
        }
        Ok(config)
    }

    /// Sets the signal token.
    #[must_use]
    pub fn with_signal(mut self, signal: impl Into<String>) -> Self {
        self.signal = signal.into();
        self
    }

    /// Sets the bot name.
    #[must_use]
    pub fn with_bot_name(mut self, bot_name: impl Into<String>) -> Self {
        self.bot_name = bot_name.into();
        self
    }
}
