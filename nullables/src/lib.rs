//! Nullable infrastructure for deterministic testing.
//!
//! Follows the nullable-infrastructure style: swap the real thing for a
//! controllable stand-in. The one external dependency of the codec that is
//! not a pure function, the secure random source, sits behind a trait. This
//! crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be made to fail on demand
//!
//! Usage: pass a nullable to `CoinKey::create_random_with` in tests.

pub mod random;

pub use random::{FailingEntropy, NullEntropy};
