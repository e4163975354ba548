//! Currency version bytes and the shared registry handle that carries them.
//!
//! Every encoded string starts with a single version byte that tags it as
//! belonging to one currency. A [`Versions`] handle is shared, not copied:
//! every key built from the same handle sees mutations made through any clone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

/// The two one-byte markers that distinguish one Bitcoin-derived currency
/// from another.
///
/// No relation between the two fields is enforced. Any combination is
/// accepted, including pairs that belong to no real currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionPair {
    /// Prefix byte of the public address payload.
    pub public: u8,
    /// Prefix byte of the private-key export (WIF) payload.
    pub private: u8,
}

impl VersionPair {
    /// Bitcoin mainnet, the default currency.
    pub const BITCOIN: Self = Self::new(0x00, 0x80);

    /// Offset between the private and public version of most currencies.
    pub const PRIVATE_OFFSET: u8 = 0x80;

    pub const fn new(public: u8, private: u8) -> Self {
        Self { public, private }
    }

    /// Infer a pair from a private version alone, using the `public + 0x80`
    /// convention shared by most Bitcoin-derived currencies.
    pub const fn from_private(private: u8) -> Self {
        Self {
            public: private.wrapping_sub(Self::PRIVATE_OFFSET),
            private,
        }
    }
}

impl VersionPair {
    const fn pack(self) -> u16 {
        ((self.public as u16) << 8) | self.private as u16
    }

    const fn unpack(bits: u16) -> Self {
        Self::new((bits >> 8) as u8, bits as u8)
    }
}

impl Default for VersionPair {
    fn default() -> Self {
        Self::BITCOIN
    }
}

impl fmt::Display for VersionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "public=0x{:02x} private=0x{:02x}", self.public, self.private)
    }
}

/// Anything that can supply a public and a private version byte.
///
/// Constructors accept any implementor, so a currency lookup result, an
/// explicit pair, or a caller's own config type all work the same way.
pub trait VersionSource {
    fn public_version(&self) -> u8;
    fn private_version(&self) -> u8;

    fn version_pair(&self) -> VersionPair {
        VersionPair::new(self.public_version(), self.private_version())
    }
}

impl VersionSource for VersionPair {
    fn public_version(&self) -> u8 {
        self.public
    }

    fn private_version(&self) -> u8 {
        self.private
    }
}

impl VersionSource for (u8, u8) {
    fn public_version(&self) -> u8 {
        self.0
    }

    fn private_version(&self) -> u8 {
        self.1
    }
}

/// A shared, mutable version registry.
///
/// Cloning the handle shares the underlying pair. Writes through any clone
/// are visible to every holder on its next read. Both bytes live in one
/// atomic word, so a read never sees half of a [`Versions::set`]. There is
/// no lock: a caller that needs several keys to observe a sequence of writes
/// in a particular order across threads orders those writes itself.
#[derive(Clone)]
pub struct Versions(Arc<AtomicU16>);

impl Versions {
    pub fn new(pair: VersionPair) -> Self {
        Self(Arc::new(AtomicU16::new(pair.pack())))
    }

    /// Current value of the pair.
    pub fn get(&self) -> VersionPair {
        VersionPair::unpack(self.0.load(Ordering::Relaxed))
    }

    pub fn public(&self) -> u8 {
        self.get().public
    }

    pub fn private(&self) -> u8 {
        self.get().private
    }

    /// Replace both bytes at once.
    pub fn set(&self, pair: VersionPair) {
        tracing::debug!(%pair, "version registry replaced");
        self.0.store(pair.pack(), Ordering::Relaxed);
    }

    pub fn set_public(&self, public: u8) {
        self.update(|pair| VersionPair { public, ..pair });
    }

    pub fn set_private(&self, private: u8) {
        self.update(|pair| VersionPair { private, ..pair });
    }

    /// Whether two handles refer to the same registry (identity, not value).
    pub fn shares_with(&self, other: &Versions) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    // A single-field write must not clobber a concurrent write to the other
    // field, so it goes through a compare-and-swap loop.
    fn update(&self, f: impl Fn(VersionPair) -> VersionPair) {
        let mut current = self.0.load(Ordering::Relaxed);
        loop {
            let next = f(VersionPair::unpack(current));
            match self.0.compare_exchange_weak(
                current,
                next.pack(),
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => {
                    tracing::debug!(pair = %next, "version registry updated");
                    return;
                }
                Err(actual) => current = actual,
            }
        }
    }
}

impl Default for Versions {
    fn default() -> Self {
        Self::new(VersionPair::default())
    }
}

impl fmt::Debug for Versions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Versions").field(&self.get()).finish()
    }
}

impl PartialEq for Versions {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for Versions {}

impl PartialEq<VersionPair> for Versions {
    fn eq(&self, other: &VersionPair) -> bool {
        self.get() == *other
    }
}

impl From<VersionPair> for Versions {
    fn from(pair: VersionPair) -> Self {
        Self::new(pair)
    }
}

/// Build a fresh registry from any version source. The source is read once;
/// later changes to it are not tracked.
impl<S: VersionSource + ?Sized> From<&S> for Versions {
    fn from(source: &S) -> Self {
        Self::new(source.version_pair())
    }
}
