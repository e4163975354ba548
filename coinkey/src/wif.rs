//! Wallet Import Format: the private-key export string.
//!
//! Payload: `version(1) || private_key(32) || [0x01 if compressed]`,
//! base58check encoded.

use coinkey_crypto::{decode_check, encode_check};
use coinkey_types::{DecodeError, PrivateKey, PRIVATE_KEY_LEN};
use zeroize::{Zeroize, Zeroizing};

/// Trailing byte marking a WIF whose public key is compressed.
pub const COMPRESSION_MARKER: u8 = 0x01;

const UNCOMPRESSED_LEN: usize = 1 + PRIVATE_KEY_LEN;
const COMPRESSED_LEN: usize = UNCOMPRESSED_LEN + 1;

/// The fields carried by a WIF string.
pub struct WifPayload {
    pub version: u8,
    pub private_key: PrivateKey,
    pub compressed: bool,
}

pub fn encode_wif(version: u8, private_key: &PrivateKey, compressed: bool) -> String {
    let mut payload = Zeroizing::new(Vec::with_capacity(COMPRESSED_LEN));
    payload.push(version);
    payload.extend_from_slice(private_key.as_bytes());
    if compressed {
        payload.push(COMPRESSION_MARKER);
    }
    encode_check(&payload)
}

/// Decode a WIF string. Curve validity of the key is not checked here.
pub fn decode_wif(text: &str) -> Result<WifPayload, DecodeError> {
    let mut payload = decode_check(text)?;
    let result = split_payload(&payload);
    payload.zeroize();
    result
}

fn split_payload(payload: &[u8]) -> Result<WifPayload, DecodeError> {
    let compressed = match payload.len() {
        UNCOMPRESSED_LEN => false,
        COMPRESSED_LEN => match payload[COMPRESSED_LEN - 1] {
            COMPRESSION_MARKER => true,
            other => return Err(DecodeError::InvalidCompressionMarker(other)),
        },
        actual => {
            return Err(DecodeError::InvalidLength {
                expected: "33 or 34 bytes",
                actual,
            })
        }
    };

    let mut key = [0u8; PRIVATE_KEY_LEN];
    key.copy_from_slice(&payload[1..UNCOMPRESSED_LEN]);
    let private_key = PrivateKey::new(key);
    key.zeroize();

    Ok(WifPayload {
        version: payload[0],
        private_key,
        compressed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [0x11; 32];

    #[test]
    fn compressed_roundtrip() {
        let text = encode_wif(0x80, &PrivateKey::new(KEY), true);
        let decoded = decode_wif(&text).unwrap();
        assert_eq!(decoded.version, 0x80);
        assert!(decoded.compressed);
        assert_eq!(decoded.private_key.as_bytes(), &KEY);
    }

    #[test]
    fn uncompressed_roundtrip() {
        let text = encode_wif(0xef, &PrivateKey::new(KEY), false);
        let decoded = decode_wif(&text).unwrap();
        assert_eq!(decoded.version, 0xef);
        assert!(!decoded.compressed);
    }

    #[test]
    fn wrong_marker_rejected() {
        let mut payload = vec![0x80];
        payload.extend_from_slice(&KEY);
        payload.push(0x02);
        let text = encode_check(&payload);
        assert!(matches!(
            decode_wif(&text),
            Err(DecodeError::InvalidCompressionMarker(0x02))
        ));
    }

    #[test]
    fn wrong_length_rejected() {
        for len in [0usize, 21, 32, 35] {
            let text = encode_check(&vec![0x80; len]);
            assert_eq!(
                decode_wif(&text).err(),
                Some(DecodeError::InvalidLength {
                    expected: "33 or 34 bytes",
                    actual: len
                })
            );
        }
    }
}
