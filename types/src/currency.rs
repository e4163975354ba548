//! Built-in table of Bitcoin-derived currencies and their version bytes.

use crate::version::{VersionPair, VersionSource};
use serde::Serialize;

/// A named currency and the version bytes its encodings carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// Lower-case display name, e.g. `"dogecoin"`.
    pub name: &'static str,
    /// Ticker, with a `-TEST` suffix for test networks.
    pub unit: &'static str,
    pub testnet: bool,
    pub versions: VersionPair,
}

impl Currency {
    pub const BITCOIN: Self = Self::new("bitcoin", "BTC", false, 0x00, 0x80);

    /// Currency used when no version source is supplied.
    pub const DEFAULT: Self = Self::BITCOIN;

    const fn new(
        name: &'static str,
        unit: &'static str,
        testnet: bool,
        public: u8,
        private: u8,
    ) -> Self {
        Self {
            name,
            unit,
            testnet,
            versions: VersionPair::new(public, private),
        }
    }

    /// Find a currency by name or unit, ignoring ASCII case.
    ///
    /// `"testnet"` is accepted as an alias for the Bitcoin test network.
    pub fn lookup(query: &str) -> Option<&'static Currency> {
        let query = query.trim();
        if query.eq_ignore_ascii_case("testnet") {
            return CURRENCIES.iter().find(|c| c.unit == "BTC-TEST");
        }
        CURRENCIES
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(query) || c.unit.eq_ignore_ascii_case(query))
    }

    /// Every currency whose public version byte equals `version`.
    ///
    /// Several test networks share `0x6f`, so this can return more than one.
    pub fn by_public_version(version: u8) -> impl Iterator<Item = &'static Currency> {
        CURRENCIES
            .iter()
            .filter(move |c| c.versions.public == version)
    }

    pub fn all() -> &'static [Currency] {
        CURRENCIES
    }
}

impl VersionSource for Currency {
    fn public_version(&self) -> u8 {
        self.versions.public
    }

    fn private_version(&self) -> u8 {
        self.versions.private
    }
}

static CURRENCIES: &[Currency] = &[
    Currency::BITCOIN,
    Currency::new("bitcoin testnet", "BTC-TEST", true, 0x6f, 0xef),
    Currency::new("litecoin", "LTC", false, 0x30, 0xb0),
    Currency::new("litecoin testnet", "LTC-TEST", true, 0x6f, 0xef),
    Currency::new("dogecoin", "DOGE", false, 0x1e, 0x9e),
    Currency::new("dogecoin testnet", "DOGE-TEST", true, 0x71, 0xf1),
    Currency::new("dash", "DASH", false, 0x4c, 0xcc),
    Currency::new("dash testnet", "DASH-TEST", true, 0x8c, 0xef),
    Currency::new("namecoin", "NMC", false, 0x34, 0xb4),
    Currency::new("peercoin", "PPC", false, 0x37, 0xb7),
];
