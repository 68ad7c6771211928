use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::core::ids::{IdGenerator, SequentialIds, UuidIds};

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: [&str; 5] = [
    "currency_symbol",
    "currency_code",
    "allocated_advance",
    "plain_output",
    "id_strategy",
];

/// User-configurable preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_currency_code")]
    pub currency_code: String,
    /// Advance already paid out against the trip.
    #[serde(default = "Config::default_allocated_advance")]
    pub allocated_advance: f64,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            currency_code: Self::default_currency_code(),
            allocated_advance: Self::default_allocated_advance(),
            accessibility: AccessibilitySettings::default(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_currency_code() -> String {
        "INR".into()
    }

    pub fn default_allocated_advance() -> f64 {
        25_000.0
    }

    pub fn plain_output(&self) -> bool {
        self.accessibility.plain_output
    }

    /// Reads a setting by key for display.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "currency_symbol" => self.currency_symbol.clone(),
            "currency_code" => self.currency_code.clone(),
            "allocated_advance" => format!("{:.2}", self.allocated_advance),
            "plain_output" => self.accessibility.plain_output.to_string(),
            "id_strategy" => self.id_strategy.to_string(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        Ok(value)
    }

    /// Updates a setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let trimmed = value.trim();
        match key {
            "currency_symbol" | "currency_code" if trimmed.is_empty() => {
                return Err(invalid())
            }
            "currency_symbol" => self.currency_symbol = trimmed.to_string(),
            "currency_code" => self.currency_code = trimmed.to_ascii_uppercase(),
            "allocated_advance" => {
                let amount: f64 = trimmed.parse().map_err(|_| invalid())?;
                if !amount.is_finite() || amount < 0.0 {
                    return Err(invalid());
                }
                self.allocated_advance = amount;
            }
            "plain_output" => {
                self.accessibility.plain_output = parse_flag(trimmed).ok_or_else(invalid)?
            }
            "id_strategy" => self.id_strategy = trimmed.parse().map_err(|_| invalid())?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    /// Disables colour and icons in shell output.
    #[serde(default)]
    pub plain_output: bool,
}

/// How new expense ids are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

/// Prefix of ids minted by [`IdStrategy::Sequential`].
pub const SEQUENTIAL_PREFIX: &str = "exp";

impl IdStrategy {
    /// Generator for this strategy that never reissues an id in `existing`.
    pub fn generator<'a>(self, existing: impl IntoIterator<Item = &'a str>) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Box::new(UuidIds),
            IdStrategy::Sequential => {
                Box::new(SequentialIds::continuing(SEQUENTIAL_PREFIX, existing))
            }
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Uuid => f.write_str("uuid"),
            IdStrategy::Sequential => f.write_str("sequential"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "sequential" | "seq" => Ok(IdStrategy::Sequential),
            other => Err(ConfigError::InvalidValue {
                key: "id_strategy".into(),
                value: other.to_string(),
            }),
        }
    }
}
