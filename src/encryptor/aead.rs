//! src/encryptor/aead.rs
//! AEAD data encryptor: owns the key copy, the random starting nonce and the
//! chunk-size policy; [`wrap_output`](DataEncryptor::wrap_output) turns them
//! into an [`AeadOutputStream`].

use crate::algorithms::{AeadAlgorithm, SymmetricAlgorithm};
use crate::aliases::KeyMaterial;
use crate::consts::MIN_CHUNK_SIZE_EXPONENT;
use crate::crypto::{AeadCipher, CipherBackend, DigestCalculator, SecureRandom};
use crate::encryptor::legacy::key_rejected;
use crate::encryptor::stream::AeadOutputStream;
use crate::encryptor::DataEncryptor;
use crate::error::PgpError;
use crate::header::AeadHeader;
use std::fmt;
use std::io::Write;
use zeroize::Zeroizing;

pub struct AeadDataEncryptor {
    algorithm: SymmetricAlgorithm,
    aead: AeadAlgorithm,
    chunk_size: u8,
    cipher: Box<dyn AeadCipher>,
    key: KeyMaterial,
    iv: Vec<u8>,
}

impl AeadDataEncryptor {
    pub(crate) fn new(
        backend: &dyn CipherBackend,
        algorithm: SymmetricAlgorithm,
        aead: AeadAlgorithm,
        chunk_size: u8,
        key: &[u8],
        random: &SecureRandom,
    ) -> Result<Self, PgpError> {
        let cipher = backend.create_aead_cipher(algorithm, aead)?;
        cipher
            .check_key(key)
            .map_err(|e| key_rejected(algorithm, e))?;

        let mut iv = vec![0u8; aead.iv_len()];
        random.fill(&mut iv)?;

        Ok(Self {
            algorithm,
            aead,
            chunk_size,
            cipher,
            key: Zeroizing::new(key.to_vec()),
            iv,
        })
    }

    #[must_use]
    pub const fn algorithm(&self) -> SymmetricAlgorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn aead_algorithm(&self) -> AeadAlgorithm {
        self.aead
    }

    /// Wire-level chunk-size octet (`exponent - 6`), not an octet count.
    #[must_use]
    pub const fn chunk_size(&self) -> u8 {
        self.chunk_size
    }

    /// Chunk length in octets: `2^(chunk_size + 6)`.
    #[must_use]
    pub const fn chunk_len(&self) -> u64 {
        1u64 << (self.chunk_size + MIN_CHUNK_SIZE_EXPONENT)
    }

    /// Copy of the starting nonce, for the packet header.
    #[must_use]
    pub fn iv(&self) -> Vec<u8> {
        self.iv.clone()
    }

    #[must_use]
    pub fn tag_len(&self) -> usize {
        self.cipher.tag_len()
    }

    #[must_use]
    pub const fn header(&self) -> AeadHeader {
        AeadHeader::new(self.algorithm, self.aead, self.chunk_size)
    }
}

impl fmt::Debug for AeadDataEncryptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AeadDataEncryptor")
            .field("algorithm", &self.algorithm)
            .field("aead", &self.aead)
            .field("chunk_size", &self.chunk_size)
            .finish_non_exhaustive()
    }
}

impl DataEncryptor for AeadDataEncryptor {
    type Writer<W: Write> = AeadOutputStream<W>;

    fn wrap_output<W: Write>(self, sink: W) -> AeadOutputStream<W> {
        let header = self.header();
        let chunk_len = self.chunk_len();
        tracing::debug!(
            algorithm = %self.algorithm,
            aead = %self.aead,
            chunk_len,
            "starting AEAD stream"
        );
        AeadOutputStream::new(sink, self.cipher, self.key, self.iv, header, chunk_len)
    }

    /// Integrity is intrinsic to AEAD; there is never a separate digest.
    fn integrity_calculator(&self) -> Option<DigestCalculator> {
        None
    }

    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }
}
