//! # Constants
//!
//! Wire-format constants for the OpenPGP symmetrically encrypted data packets
//! produced by this crate.

/// Smallest chunk-size exponent accepted for AEAD streams (2^6 = 64 octets).
pub const MIN_CHUNK_SIZE_EXPONENT: u8 = 6;

/// Largest chunk-size exponent the wire format allows for interoperable
/// messages (chunk-size octet 16, 4 MiB chunks).
pub const MAX_INTEROPERABLE_CHUNK_SIZE_EXPONENT: u8 = 22;

/// Largest chunk-size exponent this crate accepts. The chunk length must fit
/// in a `u64`.
pub const MAX_CHUNK_SIZE_EXPONENT: u8 = 62;

/// First octet of the AEAD associated data: new-format packet header for tag 20
/// (AEAD Encrypted Data), i.e. `0xC0 | 20`.
pub const AEAD_PACKET_HEADER: u8 = 0xD4;

/// Version octet of the AEAD Encrypted Data packet.
pub const AEAD_PACKET_VERSION: u8 = 0x01;

/// Length of the fixed associated-data header:
/// packet header, version, cipher id, AEAD id, chunk-size octet.
pub const AEAD_HEADER_LEN: usize = 5;

/// Per-chunk associated data: header followed by the u64 chunk index.
pub const CHUNK_AD_LEN: usize = AEAD_HEADER_LEN + 8;

/// Final-tag associated data: chunk associated data followed by the u64 total
/// plaintext octet count.
pub const FINAL_AD_LEN: usize = CHUNK_AD_LEN + 8;

/// Authentication tag length shared by EAX, OCB and GCM.
pub const AEAD_TAG_LEN: usize = 16;

/// Initial chunk-buffer capacity; the buffer grows on demand up to the chunk
/// size so large exponents do not allocate up front.
pub const INITIAL_CHUNK_BUFFER: usize = 64 * 1024;
