//! # AEAD Packet Header
//!
//! The fixed header that prefixes every AEAD associated-data block, and the
//! per-chunk / final-tag associated data derived from it.

use crate::algorithms::{AeadAlgorithm, SymmetricAlgorithm};
use crate::aliases::{ChunkAd13, FinalAd21};
use crate::consts::{AEAD_HEADER_LEN, AEAD_PACKET_HEADER, AEAD_PACKET_VERSION, CHUNK_AD_LEN};

/// Associated-data header of an AEAD Encrypted Data packet.
///
/// # Header Format
///
/// | octet | value                                  |
/// |-------|----------------------------------------|
/// | 0     | `0xD4` (new-format packet tag 20)      |
/// | 1     | packet version `0x01`                  |
/// | 2     | symmetric algorithm id                 |
/// | 3     | AEAD algorithm id                      |
/// | 4     | chunk-size octet (`exponent - 6`)      |
///
/// # Thread Safety
///
/// This type is `Copy` and holds only public values.
///
/// # Example
///
/// ```
/// use pgp_encryptor::algorithms::{AeadAlgorithm, SymmetricAlgorithm};
/// use pgp_encryptor::header::AeadHeader;
///
/// let header = AeadHeader::new(SymmetricAlgorithm::Aes128, AeadAlgorithm::Ocb, 10);
/// assert_eq!(header.to_bytes(), [0xD4, 0x01, 7, 2, 10]);
///
/// let ad = header.chunk_ad(1);
/// assert_eq!(&ad[5..], &[0, 0, 0, 0, 0, 0, 0, 1]);
///
/// let fin = header.final_ad(2, 300);
/// assert_eq!(&fin[13..], &300u64.to_be_bytes());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AeadHeader {
    algorithm: SymmetricAlgorithm,
    aead: AeadAlgorithm,
    chunk_size: u8,
}

impl AeadHeader {
    /// `chunk_size` is the wire-level octet, i.e. the exponent minus 6.
    #[must_use]
    pub const fn new(algorithm: SymmetricAlgorithm, aead: AeadAlgorithm, chunk_size: u8) -> Self {
        Self {
            algorithm,
            aead,
            chunk_size,
        }
    }

    #[must_use]
    pub const fn to_bytes(&self) -> [u8; AEAD_HEADER_LEN] {
        [
            AEAD_PACKET_HEADER,
            AEAD_PACKET_VERSION,
            self.algorithm.id(),
            self.aead.id(),
            self.chunk_size,
        ]
    }

    /// Associated data of chunk `chunk_index`: header `||` index (u64 BE).
    #[must_use]
    pub fn chunk_ad(&self, chunk_index: u64) -> ChunkAd13 {
        let mut ad = [0u8; CHUNK_AD_LEN];
        ad[..AEAD_HEADER_LEN].copy_from_slice(&self.to_bytes());
        ad[AEAD_HEADER_LEN..].copy_from_slice(&chunk_index.to_be_bytes());
        ad
    }

    /// Associated data of the closing tag: chunk associated data for the
    /// next unused index `||` total plaintext octets (u64 BE).
    #[must_use]
    pub fn final_ad(&self, chunk_index: u64, total_octets: u64) -> FinalAd21 {
        let mut ad = [0u8; crate::consts::FINAL_AD_LEN];
        ad[..CHUNK_AD_LEN].copy_from_slice(&self.chunk_ad(chunk_index));
        ad[CHUNK_AD_LEN..].copy_from_slice(&total_octets.to_be_bytes());
        ad
    }
}
