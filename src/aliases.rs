//! # Secret Buffer Aliases
//!
//! Type aliases for buffers holding secret material. All `Zeroizing` types
//! wipe their contents on drop, on every exit path (normal close, fault or
//! early drop).
//!
//! ## Type Categories
//!
//! ### Dynamic secrets
//! - [`KeyMaterial`] - session key bytes handed to [`build`](crate::PgpDataEncryptorBuilder::build)
//! - [`PlaintextBuffer`] - buffered plaintext of the chunk being assembled
//! - [`Keystream`] - CFB feedback register and keystream block
//!
//! ### Wire-level buffers
//! - [`ChunkAd13`] - associated data of one AEAD chunk
//! - [`FinalAd21`] - associated data of the closing AEAD tag
//! - [`Sha1Digest20`] - legacy integrity digest output

use crate::consts::{CHUNK_AD_LEN, FINAL_AD_LEN};
use zeroize::Zeroizing;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type KeyMaterial = Zeroizing<Vec<u8>>;
pub type PlaintextBuffer = Zeroizing<Vec<u8>>;
pub type Keystream = Zeroizing<Vec<u8>>;

// ─────────────────────────────────────────────────────────────────────────────
// Wire-level buffers (public values)
// ─────────────────────────────────────────────────────────────────────────────
pub type ChunkAd13 = [u8; CHUNK_AD_LEN];
pub type FinalAd21 = [u8; FINAL_AD_LEN];
pub type Sha1Digest20 = [u8; 20];
