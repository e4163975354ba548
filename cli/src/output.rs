//! Command results, printed as text or JSON.

use coinkey::{AddressPayload, CoinKey};
use serde::Serialize;
use std::fmt;

use crate::config::CurrencyEntry;

/// Everything derivable from one key.
#[derive(Debug, Serialize)]
pub struct KeyReport {
    pub address: String,
    pub wif: String,
    pub private_key: String,
    pub public_key: String,
    pub compressed: bool,
    pub public_version: u8,
    pub private_version: u8,
}

impl From<&CoinKey> for KeyReport {
    fn from(ck: &CoinKey) -> Self {
        let versions = ck.versions().get();
        Self {
            address: ck.public_address(),
            wif: ck.private_wif(),
            private_key: ck.private_key_hex(),
            public_key: ck.public_key().to_string(),
            compressed: ck.compressed(),
            public_version: versions.public,
            private_version: versions.private,
        }
    }
}

impl fmt::Display for KeyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "address:     {}", self.address)?;
        writeln!(f, "wif:         {}", self.wif)?;
        writeln!(f, "private key: {}", self.private_key)?;
        writeln!(f, "public key:  {}", self.public_key)?;
        writeln!(f, "compressed:  {}", self.compressed)?;
        write!(
            f,
            "versions:    public=0x{:02x} private=0x{:02x}",
            self.public_version, self.private_version
        )
    }
}

/// What a public address decodes to.
#[derive(Debug, Serialize)]
pub struct AddressReport {
    pub address: String,
    pub version: u8,
    pub hash160: String,
    pub currencies: Vec<String>,
}

impl AddressReport {
    pub fn new(address: &str, payload: &AddressPayload, known: &[CurrencyEntry]) -> Self {
        Self {
            address: address.to_string(),
            version: payload.version,
            hash160: hex::encode(payload.hash),
            currencies: known
                .iter()
                .filter(|c| c.public_version == payload.version)
                .map(|c| c.name.clone())
                .collect(),
        }
    }
}

impl fmt::Display for AddressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "address:    {}", self.address)?;
        writeln!(f, "version:    0x{:02x}", self.version)?;
        writeln!(f, "hash160:    {}", self.hash160)?;
        if self.currencies.is_empty() {
            write!(f, "currencies: (unknown)")
        } else {
            write!(f, "currencies: {}", self.currencies.join(", "))
        }
    }
}

/// The currency table.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CurrencyList(pub Vec<CurrencyEntry>);

impl fmt::Display for CurrencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:<18} {:<10} public=0x{:02x} private=0x{:02x}{}",
                c.name,
                c.unit,
                c.public_version,
                c.private_version,
                if c.testnet { " (testnet)" } else { "" }
            )?;
        }
        Ok(())
    }
}

/// Print `value` to stdout as pretty JSON or via its `Display` impl.
pub fn emit<T: Serialize + fmt::Display>(value: &T, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}
