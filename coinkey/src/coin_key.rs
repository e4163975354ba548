//! `CoinKey`: one private key, its compression flag, and a shared version
//! registry, with the address and WIF views derived from them on demand.

use crate::address::{encode_address, parse_address, AddressPayload};
use crate::key::KeyMaterial;
use crate::wif::{decode_wif, encode_wif};
use coinkey_crypto::{hash160, random_private_key, EntropySource, OsEntropy};
use coinkey_types::{
    CoinKeyError, ConstructionError, PrivateKey, PublicKey, VersionPair, Versions,
};
use std::fmt;

/// A private key bound to a currency's version bytes.
///
/// Nothing derived is stored. [`CoinKey::public_address`] and
/// [`CoinKey::private_wif`] recompute from the current key, compression flag
/// and version registry on every call, so a change made through any clone of
/// the [`Versions`] handle shows up on the next read.
///
/// `CoinKey` is `Send` and `Sync`; its registry handle may be cloned into
/// other threads.
pub struct CoinKey {
    key: KeyMaterial,
    versions: Versions,
}

impl CoinKey {
    /// Build a compressed key from raw bytes with the default currency's
    /// versions.
    pub fn new(private_key: &[u8]) -> Result<Self, ConstructionError> {
        Self::with_versions(private_key, Versions::default())
    }

    /// Build a compressed key from raw bytes.
    ///
    /// `versions` is an existing [`Versions`] handle (shared with the caller),
    /// a [`VersionPair`], or a reference to any
    /// [`VersionSource`](coinkey_types::VersionSource) such as a
    /// [`Currency`](coinkey_types::Currency).
    pub fn with_versions(
        private_key: &[u8],
        versions: impl Into<Versions>,
    ) -> Result<Self, ConstructionError> {
        Ok(Self::from_material(
            KeyMaterial::from_bytes(private_key)?,
            versions.into(),
        ))
    }

    /// Build a compressed key from an owned [`PrivateKey`].
    pub fn from_private_key(
        private_key: PrivateKey,
        versions: impl Into<Versions>,
    ) -> Result<Self, ConstructionError> {
        Ok(Self::from_material(
            KeyMaterial::new(private_key)?,
            versions.into(),
        ))
    }

    /// Generate a compressed key from the operating system's secure random
    /// source with the default currency's versions.
    pub fn random() -> Result<Self, ConstructionError> {
        Self::create_random(Versions::default())
    }

    /// Generate a key from the operating system's secure random source.
    pub fn create_random(versions: impl Into<Versions>) -> Result<Self, ConstructionError> {
        Self::create_random_with(&OsEntropy, versions)
    }

    /// Generate a key from `entropy`. Fails if the source fails; there is no
    /// fallback to a weaker generator.
    pub fn create_random_with<E: EntropySource + ?Sized>(
        entropy: &E,
        versions: impl Into<Versions>,
    ) -> Result<Self, ConstructionError> {
        Self::from_private_key(random_private_key(entropy)?, versions)
    }

    /// Decode a WIF string.
    ///
    /// The private version and compression flag come from the string. The
    /// public version is not carried by a WIF; it is inferred as
    /// `private - 0x80`, which restores the default currency's pair for a
    /// Bitcoin mainnet WIF.
    pub fn from_wif(text: &str) -> Result<Self, CoinKeyError> {
        let payload = decode_wif(text)?;
        let versions = Versions::new(VersionPair::from_private(payload.version));
        Self::from_wif_payload(payload.private_key, payload.compressed, versions)
    }

    /// Decode a WIF string, taking the public version from `versions`.
    ///
    /// The registry's private byte is overwritten with the decoded one. When
    /// `versions` is a shared handle, every holder sees that write. A string
    /// that fails to decode, or carries an invalid key, leaves the registry
    /// untouched.
    pub fn from_wif_with_versions(
        text: &str,
        versions: impl Into<Versions>,
    ) -> Result<Self, CoinKeyError> {
        let payload = decode_wif(text)?;
        let key = KeyMaterial::with_compression(payload.private_key, payload.compressed)?;
        let versions = versions.into();
        versions.set_private(payload.version);
        Ok(Self::from_decoded(key, versions))
    }

    fn from_wif_payload(
        private_key: PrivateKey,
        compressed: bool,
        versions: Versions,
    ) -> Result<Self, CoinKeyError> {
        let key = KeyMaterial::with_compression(private_key, compressed)?;
        Ok(Self::from_decoded(key, versions))
    }

    fn from_decoded(key: KeyMaterial, versions: Versions) -> Self {
        tracing::debug!(
            compressed = key.compressed(),
            versions = %versions.get(),
            "decoded WIF"
        );
        Self { key, versions }
    }

    fn from_material(key: KeyMaterial, versions: Versions) -> Self {
        tracing::debug!(
            compressed = key.compressed(),
            versions = %versions.get(),
            "coin key constructed"
        );
        Self { key, versions }
    }

    pub fn private_key(&self) -> &PrivateKey {
        self.key.private_key()
    }

    pub fn private_key_hex(&self) -> String {
        self.key.private_key().to_hex()
    }

    pub fn compressed(&self) -> bool {
        self.key.compressed()
    }

    /// The registry this key reads its version bytes from. Mutating it
    /// affects this key and every other holder of the same handle.
    pub fn versions(&self) -> &Versions {
        &self.versions
    }

    /// Swap in a different registry.
    pub fn set_versions(&mut self, versions: impl Into<Versions>) {
        self.versions = versions.into();
        tracing::debug!(versions = %self.versions.get(), "coin key versions replaced");
    }

    pub fn public_key(&self) -> PublicKey {
        self.key.derive_public_key()
    }

    /// `RIPEMD160(SHA256(public_key))`.
    pub fn public_hash(&self) -> [u8; 20] {
        hash160(self.public_key().as_bytes())
    }

    /// The private-key export string under the current private version.
    pub fn private_wif(&self) -> String {
        encode_wif(
            self.versions.private(),
            self.key.private_key(),
            self.key.compressed(),
        )
    }

    /// The public address under the current public version.
    pub fn public_address(&self) -> String {
        encode_address(self.versions.public(), &self.public_key())
    }

    pub fn address_payload(&self) -> AddressPayload {
        AddressPayload::from_public_key(self.versions.public(), &self.public_key())
    }

    /// Whether `address` is this key's address under the current versions.
    /// Addresses that fail to decode never match.
    pub fn matches_address(&self, address: &str) -> bool {
        parse_address(address).is_ok_and(|parsed| parsed == self.address_payload())
    }
}

impl fmt::Display for CoinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.public_address())
    }
}

impl fmt::Debug for CoinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoinKey")
            .field("private_key", &"<redacted>")
            .field("compressed", &self.compressed())
            .field("versions", &self.versions.get())
            .field("address", &self.public_address())
            .finish()
    }
}
