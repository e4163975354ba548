//! Secure random source for key generation.

use coinkey_types::{ConstructionError, PrivateKey, PRIVATE_KEY_LEN};
use zeroize::Zeroizing;

/// A source of cryptographically secure random bytes.
///
/// Implementations must fail rather than hand back predictable output.
pub trait EntropySource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), ConstructionError>;
}

/// The operating system's CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), ConstructionError> {
        getrandom::getrandom(dest)
            .map_err(|e| ConstructionError::EntropyUnavailable(e.to_string()))
    }
}

/// Draw 32 fresh bytes from `source` as a private key. Curve validity is not
/// checked here.
pub fn random_private_key<E: EntropySource + ?Sized>(
    source: &E,
) -> Result<PrivateKey, ConstructionError> {
    let mut buf = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
    source.fill(&mut buf[..])?;
    Ok(PrivateKey::new(*buf))
}
