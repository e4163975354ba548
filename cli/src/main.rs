//! coinkey: convert between private keys, WIF strings and addresses for
//! Bitcoin-derived currencies.

mod config;
mod output;

use anyhow::{anyhow, Context};
use clap::Parser;
use coinkey::{parse_address, CoinKey, PrivateKey};
use std::path::PathBuf;

use config::{CliConfig, CurrencyEntry};
use output::{emit, AddressReport, CurrencyList, KeyReport};

#[derive(Parser)]
#[command(name = "coinkey", about = "Versioned private key and address codec")]
struct Cli {
    /// Currency name or unit, e.g. "bitcoin", "DOGE", "LTC-TEST".
    /// Defaults to the config file's `default_currency`.
    #[arg(long, global = true, env = "COINKEY_CURRENCY")]
    currency: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true, env = "COINKEY_JSON")]
    json: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "COINKEY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true, env = "COINKEY_CONFIG")]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate a new random key.
    New,

    /// Show the address and WIF for a hex-encoded private key.
    FromHex {
        /// 64 hex characters.
        private_key: String,
    },

    /// Decode a WIF string. Without --currency the public version is
    /// inferred from the private one.
    FromWif { wif: String },

    /// Decode a public address.
    Address { address: String },

    /// List known currencies.
    Currencies,

    /// Print the effective configuration as TOML.
    Config,
}

fn resolve_currency(config: &CliConfig, query: &str) -> anyhow::Result<CurrencyEntry> {
    config
        .currency(query)
        .ok_or_else(|| anyhow!("unknown currency {query:?}; run `coinkey currencies` for the list"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };

    coinkey_utils::init_tracing_with(cli.log_level.as_deref().unwrap_or(&config.log_level));
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let json = cli.json || config.json;
    let currency_query = cli.currency.as_deref().unwrap_or(&config.default_currency);

    match cli.command {
        Command::New => {
            let currency = resolve_currency(&config, currency_query)?;
            tracing::info!(currency = %currency.name, "generating random key");
            let ck = CoinKey::create_random(&currency).context("key generation failed")?;
            emit(&KeyReport::from(&ck), json)
        }
        Command::FromHex { private_key } => {
            let currency = resolve_currency(&config, currency_query)?;
            let key = PrivateKey::from_hex(&private_key).context("invalid private key")?;
            let ck = CoinKey::from_private_key(key, &currency).context("invalid private key")?;
            emit(&KeyReport::from(&ck), json)
        }
        Command::FromWif { wif } => {
            let ck = match cli.currency.as_deref() {
                Some(query) => {
                    let currency = resolve_currency(&config, query)?;
                    CoinKey::from_wif_with_versions(wif.trim(), &currency)
                }
                None => CoinKey::from_wif(wif.trim()),
            }
            .map_err(|e| anyhow!("{e} ({:?} input)", e.remediation()))?;
            emit(&KeyReport::from(&ck), json)
        }
        Command::Address { address } => {
            let address = address.trim();
            let payload = parse_address(address)
                .map_err(|e| anyhow!("{e} ({:?} input)", e.remediation()))?;
            let report = AddressReport::new(address, &payload, &config.all_currencies());
            emit(&report, json)
        }
        Command::Currencies => emit(&CurrencyList(config.all_currencies()), json),
        Command::Config => {
            let mut effective = config.clone();
            effective.default_currency = currency_query.to_string();
            effective.json = json;
            if let Some(ref level) = cli.log_level {
                effective.log_level = level.clone();
            }
            print!("{}", effective.to_toml_string()?);
            Ok(())
        }
    }
}
