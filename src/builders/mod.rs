//! # Builders
//!
//! This module provides the builder that validates encryptor configuration.
//!
//! ## Modules
//!
//! - [`data_encryptor_builder`] - Builder for legacy and AEAD data encryptors
//!
//! ## Usage
//!
//! Configuration errors are raised by the `with_*` methods themselves, never
//! deferred to stream-write time.

pub mod data_encryptor_builder;

pub use data_encryptor_builder::PgpDataEncryptorBuilder;
