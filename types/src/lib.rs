//! Fundamental types for the coinkey codec.
//!
//! This crate defines the values shared across every other crate in the workspace:
//! version bytes and the shared registry that carries them, the currency table,
//! key material, and error kinds.

pub mod currency;
pub mod error;
pub mod keys;
pub mod version;

pub use currency::Currency;
pub use error::{CoinKeyError, ConstructionError, DecodeError, Remediation};
pub use keys::{PrivateKey, PublicKey, PRIVATE_KEY_LEN};
pub use version::{VersionPair, VersionSource, Versions};
