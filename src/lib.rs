// src/lib.rs

pub mod algorithms;
pub mod aliases;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod utils;

// High-level API: builder in, encrypting writer out
pub use builders::PgpDataEncryptorBuilder;
pub use encryptor::{
    AeadDataEncryptor, AeadOutputStream, DataEncryptor, EncryptingWriter, LegacyDataEncryptor,
    LegacyOutputStream, PgpDataEncryptor, StreamState,
};
pub use error::PgpError;

// Backend seam: implement `CipherBackend` to swap the primitive provider
pub use crypto::{
    AeadCipher, CipherBackend, DigestCalculator, RustCryptoBackend, SecureRandom, StreamCipher,
};

pub use algorithms::{AeadAlgorithm, HashAlgorithm, SymmetricAlgorithm};
