// src/crypto/mod.rs

//! Primitive layer.
//!
//! The [`CipherBackend`] trait is the seam the encryptors depend on;
//! [`RustCryptoBackend`] is the default implementation. Randomness and the
//! legacy integrity digest live here too.

pub mod backend;
pub mod cfb;
pub mod digest;
pub mod rng;
pub mod rust_crypto;

pub use backend::{AeadCipher, CipherBackend, StreamCipher};
pub use digest::DigestCalculator;
pub use rng::SecureRandom;
pub use rust_crypto::RustCryptoBackend;
