//! src/builders/data_encryptor_builder.rs
//! Data encryptor builder: validates configuration, then builds a legacy or
//! AEAD encryptor from session-key bytes.

use crate::algorithms::{AeadAlgorithm, SymmetricAlgorithm};
use crate::consts::{
    MAX_CHUNK_SIZE_EXPONENT, MAX_INTEROPERABLE_CHUNK_SIZE_EXPONENT, MIN_CHUNK_SIZE_EXPONENT,
};
use crate::crypto::{CipherBackend, RustCryptoBackend, SecureRandom};
use crate::encryptor::{AeadDataEncryptor, LegacyDataEncryptor, PgpDataEncryptor};
use crate::error::PgpError;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Builder for [`PgpDataEncryptor`]s.
///
/// Defaults: no integrity packet, no AEAD, [`RustCryptoBackend`], operating
/// system randomness created on first use.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). [`build`](Self::build) takes
/// `&self`, so one builder may build encryptors on several threads; they all
/// draw their starting nonces from the same [`SecureRandom`].
///
/// # Example
///
/// ```
/// use pgp_encryptor::algorithms::{AeadAlgorithm, SymmetricAlgorithm};
/// use pgp_encryptor::{DataEncryptor, PgpDataEncryptorBuilder};
/// use std::io::Write;
///
/// let builder = PgpDataEncryptorBuilder::new(SymmetricAlgorithm::Aes128)?
///     .with_aead(AeadAlgorithm::Ocb, 6)?;
/// let encryptor = builder.build(&[0x42; 16])?;
///
/// let mut out = encryptor.wrap_output(Vec::new());
/// out.write_all(b"hello")?;
/// let ciphertext = out.finish()?;
///
/// // one 5-octet chunk + tag, then the closing tag
/// assert_eq!(ciphertext.len(), 5 + 16 + 16);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct PgpDataEncryptorBuilder {
    algorithm: SymmetricAlgorithm,
    with_integrity_packet: bool,
    aead_algorithm: Option<AeadAlgorithm>,
    chunk_size: u8,
    backend: Arc<dyn CipherBackend>,
    random: OnceLock<SecureRandom>,
}

impl PgpDataEncryptorBuilder {
    /// Builder for `algorithm`. The null cipher is rejected.
    pub fn new(algorithm: SymmetricAlgorithm) -> Result<Self, PgpError> {
        if algorithm == SymmetricAlgorithm::Null {
            return Err(PgpError::Config("null cipher specified".into()));
        }
        Ok(Self {
            algorithm,
            with_integrity_packet: false,
            aead_algorithm: None,
            chunk_size: 0,
            backend: Arc::new(RustCryptoBackend::new()),
            random: OnceLock::new(),
        })
    }

    /// Whether legacy output is followed by an integrity packet. Ignored once
    /// AEAD is enabled.
    #[must_use]
    pub fn with_integrity_packet(mut self, with_integrity_packet: bool) -> Self {
        self.with_integrity_packet = with_integrity_packet;
        self
    }

    /// Switch to chunked AEAD with chunks of `2^chunk_size_exponent` octets.
    ///
    /// # Errors
    ///
    /// [`PgpError::Config`] if the cipher is not AES-128/192/256, or the
    /// exponent is below 6 or above 62.
    pub fn with_aead(
        mut self,
        aead_algorithm: AeadAlgorithm,
        chunk_size_exponent: u8,
    ) -> Result<Self, PgpError> {
        if !self.algorithm.supports_aead() {
            return Err(PgpError::Config(format!(
                "AEAD algorithms can only be used with AES, not {}",
                self.algorithm
            )));
        }
        if chunk_size_exponent < MIN_CHUNK_SIZE_EXPONENT {
            return Err(PgpError::Config(format!(
                "minimum chunk size exponent is {MIN_CHUNK_SIZE_EXPONENT}, got {chunk_size_exponent}"
            )));
        }
        if chunk_size_exponent > MAX_CHUNK_SIZE_EXPONENT {
            return Err(PgpError::Config(format!(
                "maximum chunk size exponent is {MAX_CHUNK_SIZE_EXPONENT}, got {chunk_size_exponent}"
            )));
        }
        if chunk_size_exponent > MAX_INTEROPERABLE_CHUNK_SIZE_EXPONENT {
            tracing::warn!(
                chunk_size_exponent,
                limit = MAX_INTEROPERABLE_CHUNK_SIZE_EXPONENT,
                "chunk size exceeds what other implementations accept"
            );
        }

        self.aead_algorithm = Some(aead_algorithm);
        self.chunk_size = chunk_size_exponent - MIN_CHUNK_SIZE_EXPONENT;
        Ok(self)
    }

    /// Source primitives from `backend` instead of [`RustCryptoBackend`].
    #[must_use]
    pub fn with_backend(mut self, backend: Arc<dyn CipherBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Use a caller-supplied randomness source. Without one, operating system
    /// randomness is created on first use.
    #[must_use]
    pub fn with_secure_random(mut self, random: SecureRandom) -> Self {
        self.random = OnceLock::from(random);
        self
    }

    #[must_use]
    pub const fn algorithm(&self) -> SymmetricAlgorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn integrity_packet(&self) -> bool {
        self.with_integrity_packet
    }

    #[must_use]
    pub const fn aead_algorithm(&self) -> Option<AeadAlgorithm> {
        self.aead_algorithm
    }

    /// Wire-level chunk-size octet (`exponent - 6`). Meaningful only with AEAD.
    #[must_use]
    pub const fn chunk_size(&self) -> u8 {
        self.chunk_size
    }

    /// The shared randomness source, created on first call if none was set.
    pub fn secure_random(&self) -> &SecureRandom {
        self.random.get_or_init(SecureRandom::new)
    }

    /// Build an encryptor keyed with `key`.
    ///
    /// # Errors
    ///
    /// - [`PgpError::InvalidKey`] if the backend rejects the key
    /// - [`PgpError::UnsupportedAlgorithm`] if the backend lacks the algorithm
    /// - [`PgpError::Random`] if the starting nonce cannot be drawn
    pub fn build(&self, key: &[u8]) -> Result<PgpDataEncryptor, PgpError> {
        match self.aead_algorithm {
            Some(aead) => {
                tracing::debug!(
                    algorithm = %self.algorithm,
                    aead = %aead,
                    chunk_size = self.chunk_size,
                    "building AEAD data encryptor"
                );
                AeadDataEncryptor::new(
                    self.backend.as_ref(),
                    self.algorithm,
                    aead,
                    self.chunk_size,
                    key,
                    self.secure_random(),
                )
                .map(PgpDataEncryptor::Aead)
            }
            None => {
                tracing::debug!(
                    algorithm = %self.algorithm,
                    integrity = self.with_integrity_packet,
                    "building legacy data encryptor"
                );
                LegacyDataEncryptor::new(
                    self.backend.as_ref(),
                    self.algorithm,
                    self.with_integrity_packet,
                    key,
                )
                .map(PgpDataEncryptor::Legacy)
            }
        }
    }
}

impl fmt::Debug for PgpDataEncryptorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgpDataEncryptorBuilder")
            .field("algorithm", &self.algorithm)
            .field("with_integrity_packet", &self.with_integrity_packet)
            .field("aead_algorithm", &self.aead_algorithm)
            .field("chunk_size", &self.chunk_size)
            .finish_non_exhaustive()
    }
}
