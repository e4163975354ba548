//! Public addresses: `version(1) || hash160(public_key)(20)`, base58check encoded.

use coinkey_crypto::{decode_check, encode_check, hash160};
use coinkey_types::{Currency, DecodeError, PublicKey};
use std::fmt;

const PAYLOAD_LEN: usize = 21;

/// The fields carried by a public address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressPayload {
    pub version: u8,
    pub hash: [u8; 20],
}

impl AddressPayload {
    pub fn from_public_key(version: u8, public_key: &PublicKey) -> Self {
        Self {
            version,
            hash: hash160(public_key.as_bytes()),
        }
    }

    pub fn encode(&self) -> String {
        let mut payload = [0u8; PAYLOAD_LEN];
        payload[0] = self.version;
        payload[1..].copy_from_slice(&self.hash);
        encode_check(&payload)
    }

    /// Known currencies whose public version matches this address.
    pub fn currencies(&self) -> impl Iterator<Item = &'static Currency> {
        Currency::by_public_version(self.version)
    }
}

impl fmt::Debug for AddressPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressPayload(0x{:02x}, {})", self.version, hex::encode(self.hash))
    }
}

impl fmt::Display for AddressPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Encode the address of `public_key` under `version`.
pub fn encode_address(version: u8, public_key: &PublicKey) -> String {
    AddressPayload::from_public_key(version, public_key).encode()
}

/// Parse a public address back into its version byte and hash.
pub fn parse_address(text: &str) -> Result<AddressPayload, DecodeError> {
    let payload = decode_check(text)?;
    if payload.len() != PAYLOAD_LEN {
        return Err(DecodeError::InvalidLength {
            expected: "21 bytes",
            actual: payload.len(),
        });
    }
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload[1..]);
    Ok(AddressPayload {
        version: payload[0],
        hash,
    })
}
