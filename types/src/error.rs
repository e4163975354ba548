//! Error types shared across crates.
//!
//! Three kinds of failure map to three different things a user has to do:
//! supply a key at all, fix a malformed one, or find an uncorrupted copy.

use thiserror::Error;

/// Building key material failed.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("no privateKey supplied")]
    MissingPrivateKey,

    #[error("invalid privateKey: {0}")]
    InvalidPrivateKey(String),

    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),
}

/// Decoding a base58check string failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("checksum mismatch: expected {expected:02x?}, found {actual:02x?}")]
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },

    #[error("invalid payload length: expected {expected}, got {actual}")]
    InvalidLength { expected: &'static str, actual: usize },

    #[error("invalid compression marker 0x{0:02x}, expected 0x01")]
    InvalidCompressionMarker(u8),
}

/// What a caller has to do about a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Remediation {
    /// Nothing was supplied.
    Missing,
    /// Input was supplied but does not have the right shape.
    Malformed,
    /// Input has the right shape but fails its integrity check.
    Corrupted,
    /// The environment could not provide what the operation needs.
    Unavailable,
}

impl ConstructionError {
    pub fn remediation(&self) -> Remediation {
        match self {
            Self::MissingPrivateKey => Remediation::Missing,
            Self::InvalidPrivateKey(_) => Remediation::Malformed,
            Self::EntropyUnavailable(_) => Remediation::Unavailable,
        }
    }
}

impl DecodeError {
    pub fn remediation(&self) -> Remediation {
        match self {
            Self::ChecksumMismatch { .. } => Remediation::Corrupted,
            Self::InvalidCharacter { .. }
            | Self::InvalidLength { .. }
            | Self::InvalidCompressionMarker(_) => Remediation::Malformed,
        }
    }
}

/// Top-level error for key codec operations.
#[derive(Debug, Error)]
pub enum CoinKeyError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl CoinKeyError {
    pub fn remediation(&self) -> Remediation {
        match self {
            Self::Construction(e) => e.remediation(),
            Self::Decode(e) => e.remediation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_names_private_key() {
        let msg = ConstructionError::MissingPrivateKey.to_string();
        assert!(msg.contains("privateKey"));
    }

    #[test]
    fn remediation_classes() {
        let missing: CoinKeyError = ConstructionError::MissingPrivateKey.into();
        let malformed: CoinKeyError = DecodeError::InvalidCompressionMarker(2).into();
        let corrupted: CoinKeyError = DecodeError::ChecksumMismatch {
            expected: [0; 4],
            actual: [1; 4],
        }
        .into();
        assert_eq!(missing.remediation(), Remediation::Missing);
        assert_eq!(malformed.remediation(), Remediation::Malformed);
        assert_eq!(corrupted.remediation(), Remediation::Corrupted);
    }
}
