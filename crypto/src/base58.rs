//! Base58check: base58 text with a four-byte double-SHA-256 checksum.
//!
//! Alphabet: `123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz`
//! (no `0`, `O`, `I`, `l`). Each leading zero byte of the input is written as
//! a leading `1`, so leading zeros survive the round trip.
//!
//! Encoded form: base58(payload || checksum(payload)).

use crate::hash::{checksum, CHECKSUM_LEN};
use coinkey_types::DecodeError;

/// Encode `payload` with a trailing checksum.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    bs58::encode(data).into_string()
}

/// Decode base58check text and return the payload with its checksum stripped.
pub fn decode_check(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut data = bs58::decode(text)
        .into_vec()
        .map_err(|e| map_bs58_error(text, e))?;

    if data.len() < CHECKSUM_LEN {
        return Err(DecodeError::InvalidLength {
            expected: "at least 4 bytes",
            actual: data.len(),
        });
    }

    let split = data.len() - CHECKSUM_LEN;
    let mut actual = [0u8; CHECKSUM_LEN];
    actual.copy_from_slice(&data[split..]);
    data.truncate(split);

    let expected = checksum(&data);
    if expected != actual {
        return Err(DecodeError::ChecksumMismatch { expected, actual });
    }
    Ok(data)
}

fn map_bs58_error(text: &str, err: bs58::decode::Error) -> DecodeError {
    let (character, index) = match err {
        bs58::decode::Error::InvalidCharacter { character, index } => (character, index),
        bs58::decode::Error::NonAsciiCharacter { index } => {
            let character = text
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            (character, index)
        }
        // Remaining variants only arise from fixed-size output buffers or the
        // crate's own check mode, neither of which is used here.
        other => {
            tracing::warn!(error = %other, "unexpected base58 decode failure");
            (char::REPLACEMENT_CHARACTER, 0)
        }
    };
    DecodeError::InvalidCharacter { character, index }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_encodes_checksum_only() {
        assert_eq!(encode_check(&[]), "3QJmnh");
        assert_eq!(decode_check("3QJmnh").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn leading_zeros_become_ones() {
        let encoded = encode_check(&[0, 0, 1]);
        assert_eq!(encoded, "11BwW2qR");
        assert_eq!(decode_check(&encoded).unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn ambiguous_characters_rejected() {
        for bad in ['0', 'O', 'I', 'l'] {
            let text = format!("3QJ{bad}nh");
            assert_eq!(
                decode_check(&text),
                Err(DecodeError::InvalidCharacter {
                    character: bad,
                    index: 3
                })
            );
        }
    }

    #[test]
    fn non_ascii_rejected() {
        assert_eq!(
            decode_check("3QJé"),
            Err(DecodeError::InvalidCharacter {
                character: 'é',
                index: 3
            })
        );
    }

    #[test]
    fn checksum_mismatch_detected() {
        // "3QJmnh" with the last character changed.
        assert!(matches!(
            decode_check("3QJmni"),
            Err(DecodeError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn too_short_for_checksum() {
        assert_eq!(
            decode_check(""),
            Err(DecodeError::InvalidLength {
                expected: "at least 4 bytes",
                actual: 0
            })
        );
        assert!(matches!(
            decode_check("11"),
            Err(DecodeError::InvalidLength { actual: 2, .. })
        ));
    }
}
