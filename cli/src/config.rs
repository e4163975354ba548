//! CLI configuration with TOML file support.

use anyhow::Context;
use coinkey::{Currency, VersionSource};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the `coinkey` tool.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; command-line
/// flags and environment variables override these values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliConfig {
    /// Currency used when none is named on the command line.
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Log level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Print JSON instead of human-readable text.
    #[serde(default)]
    pub json: bool,

    /// Extra currencies, checked before the built-in table.
    #[serde(default)]
    pub currencies: Vec<CurrencyEntry>,
}

/// A currency as seen by the CLI: either a built-in or a config entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyEntry {
    pub name: String,
    pub unit: String,
    pub public_version: u8,
    pub private_version: u8,
    #[serde(default)]
    pub testnet: bool,
}

// ── Defaults ───────────────────────────────────────────────────────────

fn default_currency() -> String {
    Currency::DEFAULT.name.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Find a currency by name or unit, config entries first.
    pub fn currency(&self, query: &str) -> Option<CurrencyEntry> {
        let query = query.trim();
        self.currencies
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(query) || c.unit.eq_ignore_ascii_case(query))
            .cloned()
            .or_else(|| Currency::lookup(query).map(CurrencyEntry::from))
    }

    /// Config entries followed by the built-in table.
    pub fn all_currencies(&self) -> Vec<CurrencyEntry> {
        self.currencies
            .iter()
            .cloned()
            .chain(Currency::all().iter().map(CurrencyEntry::from))
            .collect()
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            log_level: default_log_level(),
            json: false,
            currencies: Vec::new(),
        }
    }
}

impl VersionSource for CurrencyEntry {
    fn public_version(&self) -> u8 {
        self.public_version
    }

    fn private_version(&self) -> u8 {
        self.private_version
    }
}

impl From<&Currency> for CurrencyEntry {
    fn from(c: &Currency) -> Self {
        Self {
            name: c.name.to_string(),
            unit: c.unit.to_string(),
            public_version: c.versions.public,
            private_version: c.versions.private,
            testnet: c.testnet,
        }
    }
}
