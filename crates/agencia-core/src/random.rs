//! Injectable random-bytes source
//!
//! Identifier and certificate minting both draw from a [`RandomSource`]
//! rather than an ambient RNG, so tests can substitute a deterministic
//! source and assert exact derivations.

use rand::rngs::OsRng;
use rand::RngCore;

/// A provider of cryptographically secure random bytes.
///
/// # Object Safety
///
/// This trait is object-safe and can be used with `dyn RandomSource`.
pub trait RandomSource: Send + Sync {
    /// Fill `buf` entirely with random bytes.
    fn fill(&self, buf: &mut [u8]);
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}
