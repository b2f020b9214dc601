//! src/encryptor/legacy.rs
//! Legacy (pre-AEAD) data encryptor: block cipher in OpenPGP CFB mode.
//!
//! - without integrity: OpenPGP CFB with resync, default vector, no trailer
//! - with integrity: plain CFB over an all-zero vector, plus a SHA-1
//!   [`DigestCalculator`] the caller uses for the trailer
//!
//! The random prefix and the trailer itself are written by the caller.

use crate::algorithms::SymmetricAlgorithm;
use crate::aliases::PlaintextBuffer;
use crate::crypto::{CipherBackend, DigestCalculator, StreamCipher};
use crate::encryptor::write::write_octets;
use crate::encryptor::{DataEncryptor, StreamState};
use crate::error::PgpError;
use crate::utils::reserve_zeroizing;
use std::fmt;
use std::io::{self, Write};
use zeroize::{Zeroize, Zeroizing};

pub struct LegacyDataEncryptor {
    algorithm: SymmetricAlgorithm,
    cipher: Box<dyn StreamCipher>,
    integrity: Option<DigestCalculator>,
}

impl LegacyDataEncryptor {
    pub(crate) fn new(
        backend: &dyn CipherBackend,
        algorithm: SymmetricAlgorithm,
        with_integrity: bool,
        key: &[u8],
    ) -> Result<Self, PgpError> {
        let mut cipher = backend.create_stream_cipher(algorithm, with_integrity)?;

        let keyed = if with_integrity {
            let iv = vec![0u8; cipher.block_size()];
            cipher.init(key, Some(&iv))
        } else {
            cipher.init(key, None)
        };
        keyed.map_err(|e| key_rejected(algorithm, e))?;

        Ok(Self {
            algorithm,
            cipher,
            integrity: with_integrity.then(DigestCalculator::new),
        })
    }

    #[must_use]
    pub const fn algorithm(&self) -> SymmetricAlgorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn with_integrity(&self) -> bool {
        self.integrity.is_some()
    }
}

impl fmt::Debug for LegacyDataEncryptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyDataEncryptor")
            .field("algorithm", &self.algorithm)
            .field("with_integrity", &self.with_integrity())
            .finish_non_exhaustive()
    }
}

/// Keying failures are always reported as key rejections, whatever the backend
/// called them.
pub(crate) fn key_rejected(algorithm: SymmetricAlgorithm, err: PgpError) -> PgpError {
    match err {
        PgpError::InvalidKey { .. } => err,
        other => PgpError::InvalidKey {
            algorithm,
            reason: other.to_string(),
        },
    }
}

impl DataEncryptor for LegacyDataEncryptor {
    type Writer<W: Write> = LegacyOutputStream<W>;

    fn wrap_output<W: Write>(self, sink: W) -> LegacyOutputStream<W> {
        LegacyOutputStream {
            sink,
            cipher: self.cipher,
            scratch: Zeroizing::new(Vec::new()),
            state: StreamState::Streaming,
        }
    }

    fn integrity_calculator(&self) -> Option<DigestCalculator> {
        self.integrity.clone()
    }

    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }
}

/// Streaming CFB transform. Ciphertext length always equals plaintext length.
pub struct LegacyOutputStream<W: Write> {
    sink: W,
    cipher: Box<dyn StreamCipher>,
    scratch: PlaintextBuffer,
    state: StreamState,
}

impl<W: Write> LegacyOutputStream<W> {
    fn encrypt_and_forward(&mut self, buf: &[u8]) -> Result<(), PgpError> {
        self.scratch.clear();
        reserve_zeroizing(&mut self.scratch, buf.len(), buf.len());
        self.scratch.extend_from_slice(buf);
        self.cipher.process(&mut self.scratch)?;
        write_octets(&mut self.sink, &self.scratch)?;
        self.scratch.zeroize();
        Ok(())
    }

    /// Poison the stream. The keystream position is lost, so nothing written
    /// so far can be continued.
    fn fault(&mut self, err: PgpError) -> PgpError {
        self.state = StreamState::Failed;
        self.scratch.zeroize();
        let err = match err {
            PgpError::Io(io) => PgpError::Io(io),
            other => PgpError::StreamFault {
                chunk_index: 0,
                reason: other.to_string(),
            },
        };
        tracing::error!(error = %err, "legacy stream failed");
        err
    }

    /// Flush the sink and refuse further writes. No trailer is written.
    pub fn close(&mut self) -> Result<(), PgpError> {
        match self.state {
            StreamState::Closed => Ok(()),
            StreamState::Failed => Err(PgpError::StreamClosed),
            StreamState::Streaming => {
                self.state = StreamState::Closed;
                self.sink.flush().map_err(PgpError::Io)
            }
        }
    }

    pub fn finish(mut self) -> Result<W, PgpError> {
        self.close()?;
        Ok(self.sink)
    }

    #[must_use]
    pub fn state(&self) -> StreamState {
        self.state
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.sink
    }
}

impl<W: Write> Write for LegacyOutputStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.state != StreamState::Streaming {
            return Err(PgpError::StreamClosed.into_io());
        }
        if let Err(err) = self.encrypt_and_forward(buf) {
            return Err(self.fault(err).into_io());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
