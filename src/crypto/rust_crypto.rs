//! src/crypto/rust_crypto.rs
//! Default primitive backend built on the RustCrypto block-cipher and AEAD crates.

use crate::algorithms::{AeadAlgorithm, SymmetricAlgorithm};
use crate::crypto::backend::{AeadCipher, CipherBackend, StreamCipher};
use crate::crypto::cfb::{BlockEncryptor, CfbEncryptor};
use crate::error::PgpError;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use aes_gcm::aead::consts::{U12, U15};
use aes_gcm::aead::generic_array::{typenum::Unsigned, GenericArray};
use aes_gcm::aead::{Aead, AeadCore, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};
use eax::Eax;
use ocb3::Ocb3;

/// Backend over `aes`, `camellia`, `twofish`, `cast5`, `blowfish`, `des`,
/// `eax`, `ocb3` and `aes-gcm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoBackend;

impl RustCryptoBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CipherBackend for RustCryptoBackend {
    fn create_stream_cipher(
        &self,
        algorithm: SymmetricAlgorithm,
        with_integrity: bool,
    ) -> Result<Box<dyn StreamCipher>, PgpError> {
        // resolve support now so an unsupported id fails before keying
        match algorithm {
            SymmetricAlgorithm::Null => {
                return Err(PgpError::Config("null cipher specified".into()))
            }
            SymmetricAlgorithm::Idea => {
                return Err(PgpError::UnsupportedAlgorithm(algorithm.to_string()))
            }
            _ => {}
        }
        Ok(Box::new(CfbStreamCipher {
            algorithm,
            resync: !with_integrity,
            engine: None,
        }))
    }

    fn create_aead_cipher(
        &self,
        algorithm: SymmetricAlgorithm,
        aead: AeadAlgorithm,
    ) -> Result<Box<dyn AeadCipher>, PgpError> {
        if !algorithm.supports_aead() {
            return Err(PgpError::UnsupportedAlgorithm(format!(
                "{aead} over {algorithm}"
            )));
        }
        Ok(Box::new(RustCryptoAead { algorithm, aead }))
    }
}

fn check_key_len(algorithm: SymmetricAlgorithm, key: &[u8]) -> Result<(), PgpError> {
    if key.len() != algorithm.key_len() {
        return Err(PgpError::InvalidKey {
            algorithm,
            reason: format!(
                "expected {} key octets, got {}",
                algorithm.key_len(),
                key.len()
            ),
        });
    }
    Ok(())
}

fn keyed<C>(algorithm: SymmetricAlgorithm, key: &[u8]) -> Result<Box<dyn BlockEncryptor>, PgpError>
where
    C: BlockEncrypt + KeyInit + Send + 'static,
{
    C::new_from_slice(key)
        .map(|cipher| Box::new(cipher) as Box<dyn BlockEncryptor>)
        .map_err(|e| PgpError::InvalidKey {
            algorithm,
            reason: e.to_string(),
        })
}

fn block_encryptor(
    algorithm: SymmetricAlgorithm,
    key: &[u8],
) -> Result<Box<dyn BlockEncryptor>, PgpError> {
    check_key_len(algorithm, key)?;
    match algorithm {
        SymmetricAlgorithm::TripleDes => keyed::<des::TdesEde3>(algorithm, key),
        SymmetricAlgorithm::Cast5 => keyed::<cast5::Cast5>(algorithm, key),
        SymmetricAlgorithm::Blowfish => keyed::<blowfish::Blowfish>(algorithm, key),
        SymmetricAlgorithm::Aes128 => keyed::<Aes128>(algorithm, key),
        SymmetricAlgorithm::Aes192 => keyed::<Aes192>(algorithm, key),
        SymmetricAlgorithm::Aes256 => keyed::<Aes256>(algorithm, key),
        SymmetricAlgorithm::Twofish => keyed::<twofish::Twofish>(algorithm, key),
        SymmetricAlgorithm::Camellia128 => keyed::<camellia::Camellia128>(algorithm, key),
        SymmetricAlgorithm::Camellia192 => keyed::<camellia::Camellia192>(algorithm, key),
        SymmetricAlgorithm::Camellia256 => keyed::<camellia::Camellia256>(algorithm, key),
        SymmetricAlgorithm::Null | SymmetricAlgorithm::Idea => {
            Err(PgpError::UnsupportedAlgorithm(algorithm.to_string()))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Legacy stream cipher
// ─────────────────────────────────────────────────────────────────────────────

struct CfbStreamCipher {
    algorithm: SymmetricAlgorithm,
    resync: bool,
    engine: Option<CfbEncryptor>,
}

impl StreamCipher for CfbStreamCipher {
    fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    fn init(&mut self, key: &[u8], iv: Option<&[u8]>) -> Result<(), PgpError> {
        let cipher = block_encryptor(self.algorithm, key)?;
        let bs = cipher.width();
        let engine = match iv {
            Some(iv) if iv.len() != bs => {
                return Err(PgpError::InvalidKey {
                    algorithm: self.algorithm,
                    reason: format!("expected {bs} IV octets, got {}", iv.len()),
                })
            }
            Some(iv) if self.resync => {
                // resync mode is defined over a zero vector only
                if iv.iter().any(|&b| b != 0) {
                    return Err(PgpError::InvalidKey {
                        algorithm: self.algorithm,
                        reason: "OpenPGP CFB requires the default vector".into(),
                    });
                }
                CfbEncryptor::new_resync(cipher)
            }
            Some(iv) => CfbEncryptor::new(cipher, iv),
            None if self.resync => CfbEncryptor::new_resync(cipher),
            None => CfbEncryptor::new(cipher, &vec![0u8; bs]),
        };
        self.engine = Some(engine);
        Ok(())
    }

    fn process(&mut self, data: &mut [u8]) -> Result<(), PgpError> {
        let engine = self
            .engine
            .as_mut()
            .ok_or_else(|| PgpError::Crypto("stream cipher used before init".into()))?;
        engine.process(data);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AEAD
// ─────────────────────────────────────────────────────────────────────────────

type Aes192Gcm = AesGcm<Aes192, U12>;

type SealFn = fn(SymmetricAlgorithm, &[u8], &[u8], &[u8], &[u8]) -> Result<Vec<u8>, PgpError>;

struct RustCryptoAead {
    algorithm: SymmetricAlgorithm,
    aead: AeadAlgorithm,
}

fn seal_with<A>(
    algorithm: SymmetricAlgorithm,
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, PgpError>
where
    A: Aead + KeyInit,
{
    if nonce.len() != <A as AeadCore>::NonceSize::USIZE {
        return Err(PgpError::Crypto(format!(
            "nonce must be {} octets, got {}",
            <A as AeadCore>::NonceSize::USIZE,
            nonce.len()
        )));
    }
    let cipher = A::new_from_slice(key).map_err(|e| PgpError::InvalidKey {
        algorithm,
        reason: e.to_string(),
    })?;
    cipher
        .encrypt(
            GenericArray::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad: associated_data,
            },
        )
        .map_err(|_| PgpError::Crypto("AEAD encrypt failed".into()))
}

impl AeadCipher for RustCryptoAead {
    fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    fn tag_len(&self) -> usize {
        self.aead.tag_len()
    }

    fn check_key(&self, key: &[u8]) -> Result<(), PgpError> {
        check_key_len(self.algorithm, key)
    }

    fn seal(
        &self,
        key: &[u8],
        nonce: &[u8],
        associated_data: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, PgpError> {
        self.check_key(key)?;
        let seal: SealFn = match (self.aead, self.algorithm) {
            (AeadAlgorithm::Eax, SymmetricAlgorithm::Aes128) => seal_with::<Eax<Aes128>>,
            (AeadAlgorithm::Eax, SymmetricAlgorithm::Aes192) => seal_with::<Eax<Aes192>>,
            (AeadAlgorithm::Eax, SymmetricAlgorithm::Aes256) => seal_with::<Eax<Aes256>>,
            (AeadAlgorithm::Ocb, SymmetricAlgorithm::Aes128) => seal_with::<Ocb3<Aes128, U15>>,
            (AeadAlgorithm::Ocb, SymmetricAlgorithm::Aes192) => seal_with::<Ocb3<Aes192, U15>>,
            (AeadAlgorithm::Ocb, SymmetricAlgorithm::Aes256) => seal_with::<Ocb3<Aes256, U15>>,
            (AeadAlgorithm::Gcm, SymmetricAlgorithm::Aes128) => seal_with::<Aes128Gcm>,
            (AeadAlgorithm::Gcm, SymmetricAlgorithm::Aes192) => seal_with::<Aes192Gcm>,
            (AeadAlgorithm::Gcm, SymmetricAlgorithm::Aes256) => seal_with::<Aes256Gcm>,
            (aead, algorithm) => {
                return Err(PgpError::UnsupportedAlgorithm(format!(
                    "{aead} over {algorithm}"
                )))
            }
        };
        seal(self.algorithm, key, nonce, associated_data, plaintext)
    }
}
