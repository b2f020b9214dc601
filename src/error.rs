//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, PgpError>`](PgpError).
//!
//! Writers implement [`std::io::Write`], so faults raised while streaming are
//! carried inside an [`std::io::Error`]; use [`PgpError::from_io`] to get the
//! typed error back.

use crate::algorithms::SymmetricAlgorithm;
use thiserror::Error;

/// The error type for all encryptor operations.
#[derive(Error, Debug)]
pub enum PgpError {
    /// I/O error raised by the wrapped sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration: a caller programming error.
    ///
    /// Raised synchronously while configuring the builder, for example:
    /// - the null cipher was requested
    /// - AEAD was requested for a non-AES cipher
    /// - the chunk-size exponent is below the protocol minimum
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The backend refused the key material or cipher parameters at build time.
    #[error("invalid key for {algorithm}: {reason}")]
    InvalidKey {
        algorithm: SymmetricAlgorithm,
        reason: String,
    },

    /// The backend has no implementation for the requested algorithm.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A cryptographic primitive failed.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Encryption failed partway through the stream. The output written so
    /// far must be discarded.
    #[error("encryption failed at chunk {chunk_index}, discard the output: {reason}")]
    StreamFault { chunk_index: u64, reason: String },

    /// A write or close was attempted on a stream that is already finalized
    /// or has failed.
    #[error("stream is closed")]
    StreamClosed,

    /// The randomness source could not produce bytes.
    #[error("random source failure: {0}")]
    Random(String),
}

impl PgpError {
    /// Recover a [`PgpError`] that was raised through a [`std::io::Write`] call.
    ///
    /// Plain I/O errors from the sink are returned as [`PgpError::Io`].
    pub fn from_io(err: std::io::Error) -> Self {
        if !err.get_ref().is_some_and(|inner| inner.is::<PgpError>()) {
            return PgpError::Io(err);
        }
        match err.into_inner().map(|inner| inner.downcast::<PgpError>()) {
            Some(Ok(pgp)) => *pgp,
            Some(Err(other)) => PgpError::Io(std::io::Error::other(other)),
            None => PgpError::Crypto("empty I/O error".into()),
        }
    }

    pub(crate) fn into_io(self) -> std::io::Error {
        match self {
            PgpError::Io(err) => err,
            other => std::io::Error::other(other),
        }
    }
}
