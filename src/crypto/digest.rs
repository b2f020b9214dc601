//! Integrity digest handed to callers of integrity-protected legacy packets.
//!
//! The encryptor only decides whether a calculator is needed. The caller feeds
//! it the random prefix and plaintext, then appends the trailer.

use crate::algorithms::HashAlgorithm;
use crate::aliases::Sha1Digest20;
use sha1::{Digest, Sha1};
use std::io::{self, Write};

#[derive(Clone, Default)]
pub struct DigestCalculator {
    hasher: Sha1,
}

impl DigestCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha1
    }

    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Digest of everything fed so far; the calculator is reset.
    pub fn finish(&mut self) -> Sha1Digest20 {
        self.hasher.finalize_reset().into()
    }
}

impl Write for DigestCalculator {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for DigestCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestCalculator")
            .field("algorithm", &self.algorithm())
            .finish()
    }
}
