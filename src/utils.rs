//! Utility functions used across the library.

use zeroize::Zeroizing;

/// XORs `counter` (big-endian) into the last 8 octets of `nonce`.
///
/// This is the AEAD per-chunk nonce schedule: chunk `i` of a stream uses the
/// starting nonce with its low-order 8 octets XORed with `i`. Distinct
/// counters always give distinct nonces for the same starting nonce.
///
/// # Panics (by contract)
///
/// Panics if `nonce.len() < 8`. Every AEAD IV length is at least 12.
#[inline(always)]
pub fn xor_counter_into_nonce(nonce: &mut [u8], counter: u64) {
    let offset = nonce.len() - 8;
    for (byte, ctr) in nonce[offset..].iter_mut().zip(counter.to_be_bytes()) {
        *byte ^= ctr;
    }
}

/// Returns `starting_nonce` with `counter` folded in, leaving the input intact.
#[inline]
pub fn derive_chunk_nonce(starting_nonce: &[u8], counter: u64) -> Vec<u8> {
    let mut nonce = starting_nonce.to_vec();
    xor_counter_into_nonce(&mut nonce, counter);
    nonce
}

/// Makes room for `additional` more octets in a secret buffer without letting
/// `Vec` reallocate behind the `Zeroizing` wrapper.
///
/// When the capacity is too small the contents move into a fresh allocation
/// (doubling, capped at `limit` unless more is needed) and the old allocation
/// is wiped as it drops.
pub(crate) fn reserve_zeroizing(
    buf: &mut Zeroizing<Vec<u8>>,
    additional: usize,
    limit: usize,
) {
    let needed = buf.len().saturating_add(additional);
    if needed <= buf.capacity() {
        return;
    }
    let capacity = buf.capacity().saturating_mul(2).min(limit).max(needed);
    let mut grown = Zeroizing::new(Vec::with_capacity(capacity));
    grown.extend_from_slice(buf);
    *buf = grown;
}
