//! tests/common.rs
//! Common constants, fakes and helpers shared across test files

#![allow(dead_code)] // Used across multiple test files

use pgp_encryptor::{
    AeadAlgorithm, AeadCipher, CipherBackend, PgpError, SecureRandom, StreamCipher,
    SymmetricAlgorithm,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

/// Session key for AES-128 tests
pub const TEST_KEY_128: [u8; 16] = [0x42; 16];

/// Session key for AES-256 tests
pub const TEST_KEY_256: [u8; 32] = [0x24; 32];

/// Smallest legal chunk exponent (64-octet chunks)
pub const MIN_EXPONENT: u8 = 6;

/// Tag length for every AEAD mode
pub const TAG_LEN: usize = 16;

pub const TEST_DATA: &[u8] = b"test data";

/// Deterministic randomness for reproducible nonces
pub fn seeded_random(seed: u64) -> SecureRandom {
    SecureRandom::from_rng(StdRng::seed_from_u64(seed))
}

/// Plaintext of `len` octets with a recognisable pattern
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording fake backend
// ─────────────────────────────────────────────────────────────────────────────

/// Mask applied by the fake primitives so ciphertext differs from plaintext
pub const FAKE_MASK: u8 = 0x5A;

/// Tag octet appended by the fake AEAD
pub const FAKE_TAG: u8 = 0xEE;

#[derive(Debug, Clone)]
pub struct SealCall {
    pub nonce: Vec<u8>,
    pub ad: Vec<u8>,
    pub plaintext: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct InitCall {
    pub with_integrity: bool,
    pub key: Vec<u8>,
    pub iv: Option<Vec<u8>>,
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub seals: Vec<SealCall>,
    pub inits: Vec<InitCall>,
}

/// Backend whose primitives record every call. `fail_seal_at` makes the
/// n-th seal (0-based) fail; `fail_process` makes every stream-cipher
/// `process` fail; `reject_keys` makes keying fail with a non-key error so
/// the encryptor's mapping can be checked.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    pub log: Arc<Mutex<Recorder>>,
    pub fail_seal_at: Option<usize>,
    pub fail_process: bool,
    pub reject_keys: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seals(&self) -> Vec<SealCall> {
        self.log.lock().unwrap().seals.clone()
    }

    pub fn inits(&self) -> Vec<InitCall> {
        self.log.lock().unwrap().inits.clone()
    }
}

struct FakeStream {
    log: Arc<Mutex<Recorder>>,
    with_integrity: bool,
    fail_process: bool,
    reject_keys: bool,
    block_size: usize,
}

impl StreamCipher for FakeStream {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn init(&mut self, key: &[u8], iv: Option<&[u8]>) -> Result<(), PgpError> {
        self.log.lock().unwrap().inits.push(InitCall {
            with_integrity: self.with_integrity,
            key: key.to_vec(),
            iv: iv.map(<[u8]>::to_vec),
        });
        if self.reject_keys {
            return Err(PgpError::Crypto("fake backend rejects every key".into()));
        }
        Ok(())
    }

    fn process(&mut self, data: &mut [u8]) -> Result<(), PgpError> {
        if self.fail_process {
            return Err(PgpError::Crypto("injected process failure".into()));
        }
        data.iter_mut().for_each(|b| *b ^= FAKE_MASK);
        Ok(())
    }
}

struct FakeAead {
    log: Arc<Mutex<Recorder>>,
    fail_seal_at: Option<usize>,
    reject_keys: bool,
}

impl AeadCipher for FakeAead {
    fn block_size(&self) -> usize {
        16
    }

    fn tag_len(&self) -> usize {
        TAG_LEN
    }

    fn check_key(&self, _key: &[u8]) -> Result<(), PgpError> {
        if self.reject_keys {
            return Err(PgpError::Crypto("fake backend rejects every key".into()));
        }
        Ok(())
    }

    fn seal(
        &self,
        _key: &[u8],
        nonce: &[u8],
        associated_data: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, PgpError> {
        let mut log = self.log.lock().unwrap();
        let call_index = log.seals.len();
        log.seals.push(SealCall {
            nonce: nonce.to_vec(),
            ad: associated_data.to_vec(),
            plaintext: plaintext.to_vec(),
        });
        if self.fail_seal_at == Some(call_index) {
            return Err(PgpError::Crypto("injected seal failure".into()));
        }
        let mut out: Vec<u8> = plaintext.iter().map(|b| b ^ FAKE_MASK).collect();
        out.extend_from_slice(&[FAKE_TAG; TAG_LEN]);
        Ok(out)
    }
}

impl CipherBackend for RecordingBackend {
    fn create_stream_cipher(
        &self,
        algorithm: SymmetricAlgorithm,
        with_integrity: bool,
    ) -> Result<Box<dyn StreamCipher>, PgpError> {
        Ok(Box::new(FakeStream {
            log: Arc::clone(&self.log),
            with_integrity,
            fail_process: self.fail_process,
            reject_keys: self.reject_keys,
            block_size: algorithm.block_size(),
        }))
    }

    fn create_aead_cipher(
        &self,
        _algorithm: SymmetricAlgorithm,
        _aead: AeadAlgorithm,
    ) -> Result<Box<dyn AeadCipher>, PgpError> {
        Ok(Box::new(FakeAead {
            log: Arc::clone(&self.log),
            fail_seal_at: self.fail_seal_at,
            reject_keys: self.reject_keys,
        }))
    }
}
