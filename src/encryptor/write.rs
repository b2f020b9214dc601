//! src/encryptor/write.rs
//! Sink write helpers shared by the legacy and AEAD output streams.

use crate::error::PgpError;
use std::io::Write;

#[inline]
pub(crate) fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<(), PgpError> {
    writer.write_all(data).map_err(PgpError::Io)
}

/// Write one sealed AEAD unit (`ciphertext || tag`). The tag must never be
/// shortened, so the unit is checked to be at least `tag_len` long.
#[inline]
pub(crate) fn write_sealed_unit<W: Write>(
    writer: &mut W,
    unit: &[u8],
    tag_len: usize,
) -> Result<(), PgpError> {
    if unit.len() < tag_len {
        return Err(PgpError::Crypto(format!(
            "sealed unit of {} octets is shorter than the {tag_len}-octet tag",
            unit.len()
        )));
    }
    write_octets(writer, unit)
}
