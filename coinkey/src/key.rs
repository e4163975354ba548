//! Private key material plus the compression flag.

use coinkey_crypto::Scalar;
use coinkey_types::{ConstructionError, PrivateKey, PublicKey};

/// Owns a validated private key and whether its public key is serialized
/// compressed.
///
/// The public key is derived on every call and never cached.
pub struct KeyMaterial {
    private_key: PrivateKey,
    scalar: Scalar,
    compressed: bool,
}

impl KeyMaterial {
    /// Build compressed key material from raw bytes.
    ///
    /// Fails with `MissingPrivateKey` for an empty slice and with
    /// `InvalidPrivateKey` for the wrong length or an out-of-range scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConstructionError> {
        Self::new(PrivateKey::from_slice(bytes)?)
    }

    /// Build compressed key material from an owned key.
    pub fn new(private_key: PrivateKey) -> Result<Self, ConstructionError> {
        Self::with_compression(private_key, true)
    }

    pub(crate) fn with_compression(
        private_key: PrivateKey,
        compressed: bool,
    ) -> Result<Self, ConstructionError> {
        let scalar = Scalar::new(&private_key)?;
        Ok(Self {
            private_key,
            scalar,
            compressed,
        })
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn compressed(&self) -> bool {
        self.compressed
    }

    /// 33 bytes when compressed, 65 otherwise.
    pub fn derive_public_key(&self) -> PublicKey {
        self.scalar.public_key(self.compressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_compressed() {
        let key = KeyMaterial::from_bytes(&[7u8; 32]).unwrap();
        assert!(key.compressed());
        assert_eq!(key.derive_public_key().as_bytes().len(), 33);
    }

    #[test]
    fn uncompressed_derivation() {
        let key = KeyMaterial::with_compression(PrivateKey::new([7u8; 32]), false).unwrap();
        assert_eq!(key.derive_public_key().as_bytes().len(), 65);
    }

    #[test]
    fn missing_and_invalid() {
        assert!(matches!(
            KeyMaterial::from_bytes(&[]),
            Err(ConstructionError::MissingPrivateKey)
        ));
        assert!(matches!(
            KeyMaterial::from_bytes(b"?!"),
            Err(ConstructionError::InvalidPrivateKey(_))
        ));
        assert!(matches!(
            KeyMaterial::from_bytes(&[0u8; 32]),
            Err(ConstructionError::InvalidPrivateKey(_))
        ));
    }
}
