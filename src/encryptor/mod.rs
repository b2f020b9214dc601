// src/encryptor/mod.rs

//! Data encryptors.
//!
//! [`PgpDataEncryptorBuilder::build`](crate::PgpDataEncryptorBuilder::build)
//! returns a [`PgpDataEncryptor`]: either a [`LegacyDataEncryptor`] (CFB,
//! optional integrity digest) or an [`AeadDataEncryptor`] (chunked AEAD).
//! Both implement [`DataEncryptor`]. The variant is decided once at build time.
//!
//! `wrap_output` consumes the encryptor, so one starting nonce (or one CFB
//! state) can only ever drive a single stream.

pub(crate) mod aead;
pub(crate) mod legacy;
pub(crate) mod stream;
pub(crate) mod write;

pub use aead::AeadDataEncryptor;
pub use legacy::{LegacyDataEncryptor, LegacyOutputStream};
pub use stream::AeadOutputStream;

use crate::crypto::DigestCalculator;
use crate::error::PgpError;
use std::fmt;
use std::io::{self, Write};

/// Lifecycle of an encrypting output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Accepting plaintext.
    Streaming,
    /// Finalized; no further writes accepted.
    Closed,
    /// A primitive or sink failure aborted the stream. Output must be discarded.
    Failed,
}

/// Capability shared by both encryptor variants.
pub trait DataEncryptor {
    type Writer<W: Write>: Write;

    /// Wrap `sink` in the encrypting transform. Plaintext written to the
    /// returned writer reaches `sink` as ciphertext.
    fn wrap_output<W: Write>(self, sink: W) -> Self::Writer<W>;

    /// Digest the caller must use for the integrity trailer, if one is needed.
    fn integrity_calculator(&self) -> Option<DigestCalculator>;

    /// Block size of the underlying cipher.
    fn block_size(&self) -> usize;
}

/// The encryptor selected by the builder.
pub enum PgpDataEncryptor {
    Legacy(LegacyDataEncryptor),
    Aead(AeadDataEncryptor),
}

impl PgpDataEncryptor {
    #[must_use]
    pub fn is_aead(&self) -> bool {
        matches!(self, Self::Aead(_))
    }

    #[must_use]
    pub fn as_aead(&self) -> Option<&AeadDataEncryptor> {
        match self {
            Self::Aead(aead) => Some(aead),
            Self::Legacy(_) => None,
        }
    }

    #[must_use]
    pub fn as_legacy(&self) -> Option<&LegacyDataEncryptor> {
        match self {
            Self::Legacy(legacy) => Some(legacy),
            Self::Aead(_) => None,
        }
    }
}

impl fmt::Debug for PgpDataEncryptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy(legacy) => f.debug_tuple("Legacy").field(legacy).finish(),
            Self::Aead(aead) => f.debug_tuple("Aead").field(aead).finish(),
        }
    }
}

impl DataEncryptor for PgpDataEncryptor {
    type Writer<W: Write> = EncryptingWriter<W>;

    fn wrap_output<W: Write>(self, sink: W) -> EncryptingWriter<W> {
        match self {
            Self::Legacy(legacy) => EncryptingWriter::Legacy(legacy.wrap_output(sink)),
            Self::Aead(aead) => EncryptingWriter::Aead(aead.wrap_output(sink)),
        }
    }

    fn integrity_calculator(&self) -> Option<DigestCalculator> {
        match self {
            Self::Legacy(legacy) => legacy.integrity_calculator(),
            Self::Aead(aead) => aead.integrity_calculator(),
        }
    }

    fn block_size(&self) -> usize {
        match self {
            Self::Legacy(legacy) => legacy.block_size(),
            Self::Aead(aead) => aead.block_size(),
        }
    }
}

/// Output stream returned by [`PgpDataEncryptor::wrap_output`].
pub enum EncryptingWriter<W: Write> {
    Legacy(LegacyOutputStream<W>),
    Aead(AeadOutputStream<W>),
}

impl<W: Write> EncryptingWriter<W> {
    /// Finalize the stream (for AEAD: last partial chunk and closing tag).
    /// Closing an already closed stream is a no-op.
    pub fn close(&mut self) -> Result<(), PgpError> {
        match self {
            Self::Legacy(w) => w.close(),
            Self::Aead(w) => w.close(),
        }
    }

    /// Close and hand back the sink.
    pub fn finish(self) -> Result<W, PgpError> {
        match self {
            Self::Legacy(w) => w.finish(),
            Self::Aead(w) => w.finish(),
        }
    }

    #[must_use]
    pub fn state(&self) -> StreamState {
        match self {
            Self::Legacy(w) => w.state(),
            Self::Aead(w) => w.state(),
        }
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        match self {
            Self::Legacy(w) => w.get_ref(),
            Self::Aead(w) => w.get_ref(),
        }
    }
}

impl<W: Write> Write for EncryptingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Legacy(w) => w.write(buf),
            Self::Aead(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Legacy(w) => w.flush(),
            Self::Aead(w) => w.flush(),
        }
    }
}
