//! Versioned key codec for Bitcoin-derived currencies.
//!
//! Converts a 32-byte secp256k1 private key into the two strings wallets
//! exchange, and back:
//! - the private-key export string (WIF), tagged with the private version byte
//! - the public address, tagged with the public version byte
//!
//! Currencies differ only in those two bytes, held in a shared
//! [`Versions`] registry that can be mutated after a key is built.

pub mod address;
pub mod coin_key;
pub mod key;
pub mod wif;

pub use address::{parse_address, AddressPayload};
pub use coin_key::CoinKey;
pub use key::KeyMaterial;
pub use wif::{decode_wif, encode_wif, WifPayload};

pub use coinkey_types::{
    CoinKeyError, ConstructionError, Currency, DecodeError, PrivateKey, PublicKey, Remediation,
    VersionPair, VersionSource, Versions,
};
