//! secp256k1 scalar validation and public-key derivation.

use coinkey_types::{ConstructionError, PrivateKey, PublicKey};
use secp256k1::{PublicKey as SecpPublicKey, Secp256k1, SecretKey};

/// A private key that has passed curve validation.
///
/// Public-key derivation from a `Scalar` cannot fail. The inner secret is
/// erased on drop.
pub struct Scalar(SecretKey);

impl Scalar {
    /// Validate `private` as a secp256k1 scalar: nonzero and strictly less
    /// than the group order.
    pub fn new(private: &PrivateKey) -> Result<Self, ConstructionError> {
        SecretKey::from_slice(private.as_bytes())
            .map(Self)
            .map_err(|_| {
                ConstructionError::InvalidPrivateKey(
                    "scalar is zero or not below the curve order".into(),
                )
            })
    }

    /// SEC1 serialization of `scalar * G`: 33 bytes when `compressed`,
    /// 65 bytes otherwise.
    pub fn public_key(&self, compressed: bool) -> PublicKey {
        let secp = Secp256k1::signing_only();
        let point = SecpPublicKey::from_secret_key(&secp, &self.0);
        if compressed {
            PublicKey::compressed(point.serialize())
        } else {
            PublicKey::uncompressed(point.serialize_uncompressed())
        }
    }

    pub fn to_private_key(&self) -> PrivateKey {
        PrivateKey::new(self.0.secret_bytes())
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        self.0.non_secure_erase();
    }
}

/// Check that a private key is a usable secp256k1 scalar.
pub fn validate_scalar(private: &PrivateKey) -> Result<(), ConstructionError> {
    Scalar::new(private).map(|_| ())
}

/// Validate `private` and derive its public key in one step.
pub fn derive_public_key(
    private: &PrivateKey,
    compressed: bool,
) -> Result<PublicKey, ConstructionError> {
    Ok(Scalar::new(private)?.public_key(compressed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP_ORDER: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
        0x41, 0x41,
    ];

    fn scalar_one() -> PrivateKey {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        PrivateKey::new(bytes)
    }

    #[test]
    fn zero_scalar_rejected() {
        assert!(matches!(
            validate_scalar(&PrivateKey::new([0u8; 32])),
            Err(ConstructionError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn group_order_rejected() {
        assert!(validate_scalar(&PrivateKey::new(GROUP_ORDER)).is_err());
    }

    #[test]
    fn order_minus_one_accepted() {
        let mut bytes = GROUP_ORDER;
        bytes[31] -= 1;
        assert!(validate_scalar(&PrivateKey::new(bytes)).is_ok());
    }

    #[test]
    fn generator_point_serializations() {
        let compressed = derive_public_key(&scalar_one(), true).unwrap();
        let uncompressed = derive_public_key(&scalar_one(), false).unwrap();
        assert!(compressed.is_compressed());
        assert_eq!(compressed.as_bytes().len(), 33);
        assert_eq!(uncompressed.as_bytes().len(), 65);
        assert_eq!(
            compressed.to_string(),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(uncompressed.as_bytes()[0], 0x04);
        assert_eq!(uncompressed.as_bytes()[1..33], compressed.as_bytes()[1..]);
    }

    #[test]
    fn scalar_roundtrips_private_bytes() {
        let scalar = Scalar::new(&scalar_one()).unwrap();
        assert!(scalar.to_private_key() == scalar_one());
    }
}
