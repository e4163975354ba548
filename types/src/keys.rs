//! Key material value types.

use crate::error::ConstructionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a secp256k1 private scalar.
pub const PRIVATE_KEY_LEN: usize = 32;
/// Length of a compressed SEC1 public key.
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;
/// Length of an uncompressed SEC1 public key.
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;

/// A 32-byte private scalar, big-endian.
///
/// Only the length is checked here. Curve validity (nonzero, below the group
/// order) is the EC engine's call. This type intentionally does not implement
/// `Debug`, `Serialize`, or `Clone`; bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_LEN]);

impl PrivateKey {
    pub fn new(bytes: [u8; PRIVATE_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy key bytes out of a slice.
    ///
    /// An empty slice means no key was supplied at all and is reported as
    /// `MissingPrivateKey`; any other length is `InvalidPrivateKey`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ConstructionError> {
        if bytes.is_empty() {
            return Err(ConstructionError::MissingPrivateKey);
        }
        let arr: [u8; PRIVATE_KEY_LEN] = bytes.try_into().map_err(|_| {
            ConstructionError::InvalidPrivateKey(format!(
                "expected {PRIVATE_KEY_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// Parse a hex-encoded key, surrounding whitespace ignored.
    pub fn from_hex(text: &str) -> Result<Self, ConstructionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ConstructionError::MissingPrivateKey);
        }
        let mut bytes = hex::decode(text)
            .map_err(|e| ConstructionError::InvalidPrivateKey(format!("not hex: {e}")))?;
        let key = Self::from_slice(&bytes);
        bytes.zeroize();
        key
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for PrivateKey {}

/// A SEC1-serialized secp256k1 public key, 33 bytes compressed or 65 bytes
/// uncompressed.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    /// Wrap serialized point bytes. The caller vouches for the encoding;
    /// only the two legal lengths are accepted.
    pub fn from_sec1(bytes: Vec<u8>) -> Option<Self> {
        match bytes.len() {
            COMPRESSED_PUBLIC_KEY_LEN | UNCOMPRESSED_PUBLIC_KEY_LEN => Some(Self(bytes)),
            _ => None,
        }
    }

    pub fn compressed(bytes: [u8; COMPRESSED_PUBLIC_KEY_LEN]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn uncompressed(bytes: [u8; UNCOMPRESSED_PUBLIC_KEY_LEN]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_compressed(&self) -> bool {
        self.0.len() == COMPRESSED_PUBLIC_KEY_LEN
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(&self.0))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}
