//! src/encryptor/stream.rs
//! Chunked AEAD output stream.
//!
//! Plaintext is buffered into chunks of `2^(chunk_size + 6)` octets. Each full
//! chunk is sealed as soon as it fills:
//!
//! ```text
//! unit(i) = seal(key, nonce(i), header || i, chunk_i)          = ct || tag
//! final   = seal(key, nonce(n), header || n || total, "")       = tag
//! ```
//!
//! where `nonce(i)` is the starting nonce with `i` XORed into its last 8
//! octets and `n` is the index after the last emitted chunk. A trailing
//! partial chunk is sealed like any other chunk; only the closing tag carries
//! the total octet count.

use crate::aliases::{KeyMaterial, PlaintextBuffer};
use crate::consts::INITIAL_CHUNK_BUFFER;
use crate::crypto::AeadCipher;
use crate::encryptor::write::write_sealed_unit;
use crate::encryptor::StreamState;
use crate::error::PgpError;
use crate::header::AeadHeader;
use crate::utils::{derive_chunk_nonce, reserve_zeroizing};
use std::io::{self, Write};
use zeroize::{Zeroize, Zeroizing};

pub struct AeadOutputStream<W: Write> {
    sink: W,
    cipher: Box<dyn AeadCipher>,
    key: KeyMaterial,
    starting_nonce: Vec<u8>,
    header: AeadHeader,
    chunk_len: u64,
    buffer: PlaintextBuffer,
    chunk_index: u64,
    total_octets: u64,
    state: StreamState,
}

impl<W: Write> AeadOutputStream<W> {
    pub(crate) fn new(
        sink: W,
        cipher: Box<dyn AeadCipher>,
        key: KeyMaterial,
        starting_nonce: Vec<u8>,
        header: AeadHeader,
        chunk_len: u64,
    ) -> Self {
        let capacity = usize::try_from(chunk_len)
            .unwrap_or(usize::MAX)
            .min(INITIAL_CHUNK_BUFFER);
        Self {
            sink,
            cipher,
            key,
            starting_nonce,
            header,
            chunk_len,
            buffer: Zeroizing::new(Vec::with_capacity(capacity)),
            chunk_index: 0,
            total_octets: 0,
            state: StreamState::Streaming,
        }
    }

    /// Seal and write the buffered chunk.
    fn emit_chunk(&mut self) -> Result<(), PgpError> {
        let ad = self.header.chunk_ad(self.chunk_index);
        let nonce = derive_chunk_nonce(&self.starting_nonce, self.chunk_index);
        let unit = self
            .cipher
            .seal(&self.key, &nonce, &ad, &self.buffer)
            .map_err(|e| self.fault(e))?;
        write_sealed_unit(&mut self.sink, &unit, self.cipher.tag_len())
            .map_err(|e| self.fault(e))?;

        tracing::trace!(
            chunk_index = self.chunk_index,
            octets = self.buffer.len(),
            "sealed AEAD chunk"
        );
        self.total_octets += self.buffer.len() as u64;
        self.chunk_index += 1;
        self.buffer.zeroize();
        Ok(())
    }

    /// Seal the closing tag over the total octet count.
    fn emit_final_tag(&mut self) -> Result<(), PgpError> {
        let ad = self.header.final_ad(self.chunk_index, self.total_octets);
        let nonce = derive_chunk_nonce(&self.starting_nonce, self.chunk_index);
        let tag = self
            .cipher
            .seal(&self.key, &nonce, &ad, &[])
            .map_err(|e| self.fault(e))?;
        write_sealed_unit(&mut self.sink, &tag, self.cipher.tag_len())
            .map_err(|e| self.fault(e))?;
        tracing::trace!(
            chunk_index = self.chunk_index,
            total_octets = self.total_octets,
            "sealed AEAD final tag"
        );
        Ok(())
    }

    /// Poison the stream and wrap `err` with the chunk it happened at.
    fn fault(&mut self, err: PgpError) -> PgpError {
        self.state = StreamState::Failed;
        self.key.zeroize();
        self.buffer.zeroize();
        let err = match err {
            PgpError::Io(io) => PgpError::Io(io),
            other => PgpError::StreamFault {
                chunk_index: self.chunk_index,
                reason: other.to_string(),
            },
        };
        tracing::error!(chunk_index = self.chunk_index, error = %err, "AEAD stream failed");
        err
    }

    fn buffer_plaintext(&mut self, mut buf: &[u8]) -> Result<(), PgpError> {
        while !buf.is_empty() {
            let room = self.chunk_len - self.buffer.len() as u64;
            let take = usize::try_from(room).map_or(buf.len(), |room| room.min(buf.len()));
            let limit = usize::try_from(self.chunk_len).unwrap_or(usize::MAX);
            reserve_zeroizing(&mut self.buffer, take, limit);
            self.buffer.extend_from_slice(&buf[..take]);
            buf = &buf[take..];
            if self.buffer.len() as u64 == self.chunk_len {
                self.emit_chunk()?;
            }
        }
        Ok(())
    }

    /// Seal the trailing partial chunk (if any) and the closing tag, then
    /// flush the sink. The key is wiped afterwards.
    ///
    /// Closing an already closed stream is a no-op; closing a failed stream
    /// reports [`PgpError::StreamClosed`].
    pub fn close(&mut self) -> Result<(), PgpError> {
        match self.state {
            StreamState::Closed => return Ok(()),
            StreamState::Failed => return Err(PgpError::StreamClosed),
            StreamState::Streaming => {}
        }
        if !self.buffer.is_empty() {
            self.emit_chunk()?;
        }
        self.emit_final_tag()?;
        self.state = StreamState::Closed;
        self.key.zeroize();
        self.sink.flush().map_err(PgpError::Io)
    }

    pub fn finish(mut self) -> Result<W, PgpError> {
        self.close()?;
        Ok(self.sink)
    }

    #[must_use]
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Index of the next chunk to be sealed.
    #[must_use]
    pub fn chunk_index(&self) -> u64 {
        self.chunk_index
    }

    /// Plaintext octets sealed so far (excludes the buffered partial chunk).
    #[must_use]
    pub fn total_octets(&self) -> u64 {
        self.total_octets
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.sink
    }
}

impl<W: Write> Write for AeadOutputStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.state != StreamState::Streaming {
            return Err(PgpError::StreamClosed.into_io());
        }
        self.buffer_plaintext(buf).map_err(PgpError::into_io)?;
        Ok(buf.len())
    }

    /// Flushes the sink only; buffered plaintext stays until its chunk fills
    /// or the stream is closed.
    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
