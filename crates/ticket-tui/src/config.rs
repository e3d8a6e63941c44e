//! Configuration for the ticket terminal.
//!
//! A TOML file supplies the store view the form reads: the trading
//! pair, the account's balances, and the anonymous flag. Example:
//!
//! ```toml
//! anonymous = false
//!
//! [market]
//! base_unit = "btc"
//! quote_unit = "usdt"
//!
//! [[balances]]
//! currency_code = "usdt"
//! balance = "1250.75"
//! locked = "250"
//! ```
//!
//! Missing file → defaults; a present file must parse and name both
//! units.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ticket_core::{BalanceEntry, MarketInfo, Side, StoreView};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid market config: {0}")]
    InvalidMarket(String),
}

/// On-disk shape of the ticket config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketConfig {
    pub market: MarketInfo,

    #[serde(default)]
    pub balances: Vec<BalanceEntry>,

    #[serde(default)]
    pub anonymous: bool,
}

impl Default for TicketConfig {
    fn default() -> Self {
        TicketConfig {
            market: MarketInfo {
                base_unit: "btc".to_string(),
                quote_unit: "usdt".to_string(),
            },
            balances: vec![
                BalanceEntry {
                    currency_code: "usdt".to_string(),
                    balance: "1000".to_string(),
                    locked: "0".to_string(),
                },
                BalanceEntry {
                    currency_code: "btc".to_string(),
                    balance: "0.5".to_string(),
                    locked: "0".to_string(),
                },
            ],
            anonymous: false,
        }
    }
}

impl TicketConfig {
    /// Load from `path`, falling back to defaults when the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(TicketConfig::default());
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml(&text, &path.display().to_string())
    }

    /// Parse from TOML text and validate.
    pub fn from_toml(text: &str, path: &str) -> Result<Self, ConfigError> {
        let config: TicketConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.market.base_unit.is_empty() {
            return Err(ConfigError::InvalidMarket("base_unit is empty".to_string()));
        }
        if self.market.quote_unit.is_empty() {
            return Err(ConfigError::InvalidMarket(
                "quote_unit is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The read-only snapshot handed to the form for a given side.
    pub fn store_view(&self, side: Side) -> StoreView {
        StoreView {
            side,
            market: self.market.clone(),
            balances: self.balances.clone(),
            anonymous: self.anonymous,
        }
    }
}
