//! src/crypto/backend.rs
//! Primitive backend seam.
//!
//! The encryptors never name a concrete cryptography library. They ask a
//! [`CipherBackend`] for unkeyed primitive handles and drive them through the
//! traits below. [`RustCryptoBackend`](crate::crypto::RustCryptoBackend) is the
//! default; tests substitute recording fakes.

use crate::algorithms::{AeadAlgorithm, SymmetricAlgorithm};
use crate::error::PgpError;

/// Factory for primitive handles, looked up by algorithm identifier.
pub trait CipherBackend: Send + Sync {
    /// Stream cipher for the legacy packets. `with_integrity` selects plain
    /// CFB (integrity-protected packets) instead of OpenPGP CFB with
    /// resynchronisation.
    fn create_stream_cipher(
        &self,
        algorithm: SymmetricAlgorithm,
        with_integrity: bool,
    ) -> Result<Box<dyn StreamCipher>, PgpError>;

    /// Chunk-level authenticated encryption for AEAD packets.
    fn create_aead_cipher(
        &self,
        algorithm: SymmetricAlgorithm,
        aead: AeadAlgorithm,
    ) -> Result<Box<dyn AeadCipher>, PgpError>;
}

/// A streaming block-cipher transform in encrypt mode.
pub trait StreamCipher: Send {
    fn block_size(&self) -> usize;

    /// Key the cipher. `iv = None` uses the algorithm-defined default vector.
    ///
    /// Fails with [`PgpError::InvalidKey`] on a wrong key length or an invalid
    /// vector.
    fn init(&mut self, key: &[u8], iv: Option<&[u8]>) -> Result<(), PgpError>;

    /// Encrypt `data` in place, continuing the stream.
    fn process(&mut self, data: &mut [u8]) -> Result<(), PgpError>;
}

/// A single-shot AEAD primitive. Each call to [`seal`](AeadCipher::seal) is
/// independent; the caller supplies a fresh nonce every time.
pub trait AeadCipher: Send {
    fn block_size(&self) -> usize;

    /// Authentication tag length appended by [`seal`](AeadCipher::seal).
    fn tag_len(&self) -> usize;

    /// Validate key material without sealing anything.
    fn check_key(&self, key: &[u8]) -> Result<(), PgpError>;

    /// Returns `ciphertext || tag`.
    fn seal(
        &self,
        key: &[u8],
        nonce: &[u8],
        associated_data: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, PgpError>;
}
