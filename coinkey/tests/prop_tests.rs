use proptest::prelude::*;

use coinkey::{parse_address, CoinKey, DecodeError, VersionPair, Versions};

/// Scalars comfortably inside the curve order: the top byte stays below 0xff.
fn valid_scalar() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
        .prop_filter("nonzero", |b| b != &[0u8; 32])
        .prop_map(|mut b| {
            b[0] &= 0x7f;
            b
        })
}

fn version_pair() -> impl Strategy<Value = VersionPair> {
    (any::<u8>(), any::<u8>()).prop_map(|(public, private)| VersionPair::new(public, private))
}

proptest! {
    /// WIF round trip keeps key bytes, compression flag and private version.
    #[test]
    fn compressed_wif_roundtrip(key in valid_scalar(), versions in version_pair()) {
        let ck = CoinKey::with_versions(&key, versions).unwrap();
        let decoded = CoinKey::from_wif(&ck.private_wif()).unwrap();
        prop_assert_eq!(decoded.private_key().as_bytes(), &key);
        prop_assert!(decoded.compressed());
        prop_assert_eq!(decoded.versions().private(), versions.private);
    }

    /// Uncompressed keys survive a second round trip unchanged.
    #[test]
    fn uncompressed_wif_roundtrip(key in valid_scalar(), private in any::<u8>()) {
        let mut payload = vec![private];
        payload.extend_from_slice(&key);
        let wif = coinkey_crypto::encode_check(&payload);
        let decoded = CoinKey::from_wif(&wif).unwrap();
        prop_assert!(!decoded.compressed());
        prop_assert_eq!(decoded.private_wif(), wif);
        let again = CoinKey::from_wif(&decoded.private_wif()).unwrap();
        prop_assert_eq!(again.private_key().as_bytes(), &key);
        prop_assert!(!again.compressed());
    }

    /// Supplying the public version on decode restores the full pair.
    #[test]
    fn wif_roundtrip_with_public_version(key in valid_scalar(), versions in version_pair()) {
        let ck = CoinKey::with_versions(&key, versions).unwrap();
        let decoded = CoinKey::from_wif_with_versions(
            &ck.private_wif(),
            VersionPair::new(versions.public, 0),
        )
        .unwrap();
        prop_assert_eq!(decoded.versions().get(), versions);
        prop_assert_eq!(decoded.public_address(), ck.public_address());
    }

    /// The address carries the public version and the key's hash160.
    #[test]
    fn address_payload_matches_key(key in valid_scalar(), versions in version_pair()) {
        let ck = CoinKey::with_versions(&key, versions).unwrap();
        let parsed = parse_address(&ck.public_address()).unwrap();
        prop_assert_eq!(parsed.version, versions.public);
        prop_assert_eq!(parsed.hash, ck.public_hash());
        prop_assert!(ck.matches_address(&ck.public_address()));
    }

    /// A mutation on the shared registry shows up on the next read.
    #[test]
    fn registry_mutation_observed(key in valid_scalar(), a in version_pair(), b in version_pair()) {
        let versions = Versions::new(a);
        let ck = CoinKey::with_versions(&key, versions.clone()).unwrap();
        versions.set(b);
        let fresh = CoinKey::with_versions(&key, b).unwrap();
        prop_assert_eq!(ck.public_address(), fresh.public_address());
        prop_assert_eq!(ck.private_wif(), fresh.private_wif());
    }

    /// Changing one character of a WIF never decodes to a different key.
    #[test]
    fn corrupted_wif_rejected(
        key in valid_scalar(),
        position in any::<prop::sample::Index>(),
    ) {
        let ck = CoinKey::new(&key).unwrap();
        let mut chars: Vec<char> = ck.private_wif().chars().collect();
        let pos = position.index(chars.len());
        chars[pos] = if chars[pos] == 'z' { 'y' } else { 'z' };
        let corrupted: String = chars.into_iter().collect();
        match CoinKey::from_wif(&corrupted) {
            Err(coinkey::CoinKeyError::Decode(DecodeError::ChecksumMismatch { .. }))
            | Err(coinkey::CoinKeyError::Decode(DecodeError::InvalidCharacter { .. })) => {}
            other => prop_assert!(false, "unexpected result {:?}", other),
        }
    }
}
