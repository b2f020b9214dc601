//! src/crypto/cfb.rs
//! OpenPGP CFB over any block cipher.
//!
//! Two variants share one engine:
//! - plain CFB with a caller-supplied vector (integrity-protected packets)
//! - OpenPGP CFB: zero vector, resynchronised after the first
//!   `block_size + 2` octets (the random prefix and its check octets)

use crate::aliases::Keystream;
use aes::cipher::{generic_array::GenericArray, BlockEncrypt, BlockSizeUser};
use zeroize::Zeroizing;

/// Object-safe view of a keyed block cipher in encrypt direction.
pub trait BlockEncryptor: Send {
    fn width(&self) -> usize;
    fn encrypt_in_place(&self, block: &mut [u8]);
}

impl<C> BlockEncryptor for C
where
    C: BlockEncrypt + Send,
{
    #[inline(always)]
    fn width(&self) -> usize {
        <C as BlockSizeUser>::block_size()
    }

    #[inline(always)]
    fn encrypt_in_place(&self, block: &mut [u8]) {
        self.encrypt_block(GenericArray::from_mut_slice(block));
    }
}

pub struct CfbEncryptor {
    cipher: Box<dyn BlockEncryptor>,
    // ciphertext of the block being assembled
    feedback: Keystream,
    keystream: Keystream,
    pos: usize,
    // first `bs + 2` ciphertext octets, held until the resync point
    prefix: Option<Zeroizing<Vec<u8>>>,
}

impl CfbEncryptor {
    /// Plain CFB starting from `iv`.
    pub fn new(cipher: Box<dyn BlockEncryptor>, iv: &[u8]) -> Self {
        let bs = cipher.width();
        debug_assert_eq!(iv.len(), bs);
        let mut keystream = Zeroizing::new(iv.to_vec());
        cipher.encrypt_in_place(&mut keystream);
        Self {
            cipher,
            feedback: Zeroizing::new(vec![0u8; bs]),
            keystream,
            pos: 0,
            prefix: None,
        }
    }

    /// OpenPGP CFB with resynchronisation.
    pub fn new_resync(cipher: Box<dyn BlockEncryptor>) -> Self {
        let bs = cipher.width();
        let mut this = Self::new(cipher, &vec![0u8; bs]);
        this.prefix = Some(Zeroizing::new(Vec::with_capacity(bs + 2)));
        this
    }

    #[must_use]
    pub fn block_size(&self) -> usize {
        self.feedback.len()
    }

    pub fn process(&mut self, data: &mut [u8]) {
        let bs = self.block_size();
        for byte in data.iter_mut() {
            *byte ^= self.keystream[self.pos];
            self.feedback[self.pos] = *byte;
            self.pos += 1;

            if let Some(prefix) = self.prefix.as_mut() {
                prefix.push(*byte);
                if prefix.len() == bs + 2 {
                    // FR = C[2..bs+2], FRE = E(FR)
                    self.keystream.copy_from_slice(&prefix[2..]);
                    self.cipher.encrypt_in_place(&mut self.keystream);
                    self.pos = 0;
                    self.prefix = None;
                    continue;
                }
            }

            if self.pos == bs {
                self.keystream.copy_from_slice(&self.feedback);
                self.cipher.encrypt_in_place(&mut self.keystream);
                self.pos = 0;
            }
        }
    }
}
