// src/crypto/rng.rs
//! Shared randomness source for encryptor builds.
//!
//! A [`SecureRandom`] is cheap to clone: every clone draws from the same
//! underlying generator. Draws are serialized by a mutex, so encryptors may be
//! built from one builder on several threads at once.

use crate::error::PgpError;
use rand::{rngs::OsRng, CryptoRng, RngCore, TryRngCore};
use std::fmt;
use std::sync::{Arc, Mutex};

enum Source {
    Os,
    Custom(Box<dyn CryptoRng + Send>),
}

#[derive(Clone)]
pub struct SecureRandom {
    source: Arc<Mutex<Source>>,
}

impl SecureRandom {
    /// Operating-system randomness.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: Arc::new(Mutex::new(Source::Os)),
        }
    }

    /// Wrap a caller-supplied cryptographic generator (e.g. a seeded `StdRng`
    /// for reproducible tests).
    #[must_use]
    pub fn from_rng<R>(rng: R) -> Self
    where
        R: CryptoRng + Send + 'static,
    {
        Self {
            source: Arc::new(Mutex::new(Source::Custom(Box::new(rng)))),
        }
    }

    /// Fill `dest` with random octets.
    pub fn fill(&self, dest: &mut [u8]) -> Result<(), PgpError> {
        let mut source = self
            .source
            .lock()
            .map_err(|_| PgpError::Random("randomness source lock poisoned".into()))?;
        match &mut *source {
            Source::Os => OsRng
                .try_fill_bytes(dest)
                .map_err(|e| PgpError::Random(e.to_string())),
            Source::Custom(rng) => {
                rng.fill_bytes(dest);
                Ok(())
            }
        }
    }

    /// `true` if both handles draw from the same generator.
    #[must_use]
    pub fn same_source(&self, other: &SecureRandom) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecureRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureRandom").finish_non_exhaustive()
    }
}
