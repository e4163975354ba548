//! SHA-256 and RIPEMD-160 hashing for checksums and address payloads.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Length of the base58check checksum.
pub const CHECKSUM_LEN: usize = 4;

/// Compute the SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// `RIPEMD160(SHA256(data))`, the hash committed to by a public address.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// First four bytes of `SHA256(SHA256(payload))`.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = double_sha256(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}
