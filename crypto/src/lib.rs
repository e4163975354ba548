//! Cryptographic primitives for the coinkey codec.
//!
//! - **SHA-256 / RIPEMD-160** for checksums and address hashes
//! - **Base58check** text encoding with a four-byte double-SHA-256 checksum
//! - **secp256k1** scalar validation and public-key derivation
//! - A secure random source for key generation

pub mod base58;
pub mod hash;
pub mod keys;
pub mod random;

pub use base58::{decode_check, encode_check};
pub use hash::{checksum, double_sha256, hash160, ripemd160, sha256};
pub use keys::{derive_public_key, validate_scalar, Scalar};
pub use random::{random_private_key, EntropySource, OsEntropy};
