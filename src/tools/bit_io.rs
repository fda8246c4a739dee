//! Bit-at-a-time adapters over a byte-oriented stream.
//!
//! The wire format has no length prefix. Instead the last byte of the
//! stream is a framing byte whose value (1-8) says how many high-order
//! bits of the byte before it are real payload; an empty payload is a
//! single framing byte holding 8. `BitWriter` produces that framing byte
//! on `finish`; `BitReader` reads it up front (seeking to the end) so it
//! knows exactly where the real bits stop.

use bit_vec::BitVec;
use std::io::{Read, Seek, SeekFrom, Write};

use crate::Error;

/// Packs bits MSB-first into bytes and writes them to `W`.
pub struct BitWriter<W: Write> {
    writer: W,
    buf: u8,
    free_bits: u8,
    bytes_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(writer: W) -> Self {
        BitWriter { writer, buf: 0, free_bits: 8, bytes_written: 0 }
    }

    pub fn write_bit(&mut self, bit: bool) -> Result<(), Error> {
        if bit {
            self.buf |= 1 << (self.free_bits - 1);
        }
        self.free_bits -= 1;
        if self.free_bits == 0 {
            self.writer.write_all(&[self.buf])?;
            self.bytes_written += 1;
            self.buf = 0;
            self.free_bits = 8;
        }
        Ok(())
    }

    pub fn write_bits(&mut self, bits: &BitVec) -> Result<(), Error> {
        for bit in bits.iter() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        for i in (0..8).rev() {
            self.write_bit((byte >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Flushes any partial byte and appends the trailing framing byte.
    /// Consumes `self` since nothing may be written after this. Returns
    /// the inner writer along with the total byte count handed to it.
    pub fn finish(mut self) -> Result<(W, u64), Error> {
        let valid_bits = if self.free_bits < 8 {
            let valid_bits = 8 - self.free_bits;
            self.writer.write_all(&[self.buf])?;
            self.bytes_written += 1;
            valid_bits
        } else {
            8
        };
        log::debug!("finishing bit stream, {} valid bits in final payload byte", valid_bits);
        self.writer.write_all(&[valid_bits])?;
        self.bytes_written += 1;
        Ok((self.writer, self.bytes_written))
    }
}

/// Reads bits MSB-first from `R`, stopping exactly at the boundary
/// recorded by the stream's trailing framing byte.
pub struct BitReader<R: Read + Seek> {
    reader: R,
    buf: u8,
    bits_left: u8,
    bytes_read: u64,
    /// number of payload bytes, i.e. file length minus the framing byte
    payload_len: u64,
    /// valid bit count (1..=8) in the last payload byte
    tail_valid_bits: u8,
}

impl<R: Read + Seek> BitReader<R> {
    pub fn new(mut reader: R) -> Result<Self, Error> {
        let file_len = reader.seek(SeekFrom::End(0))?;
        let payload_len = file_len.saturating_sub(1);
        reader.seek(SeekFrom::Start(payload_len))?;
        let mut tail = [0u8; 1];
        reader.read_exact(&mut tail)?;
        let tail_valid_bits = tail[0];
        reader.seek(SeekFrom::Start(0))?;
        log::debug!(
            "opened bit stream: {} payload byte(s), {} valid bits in the last one",
            payload_len, tail_valid_bits
        );
        Ok(BitReader {
            reader,
            buf: 0,
            bits_left: 0,
            bytes_read: 0,
            payload_len,
            tail_valid_bits,
        })
    }

    /// Returns the next bit, or `None` at a clean end of stream. Whether an
    /// end here is legitimate (a fresh symbol boundary) or a truncation is
    /// for the caller to judge: this reader only knows where the bits stop.
    pub fn read_bit(&mut self) -> Result<Option<bool>, Error> {
        if self.bits_left == 0 {
            if self.bytes_read >= self.payload_len {
                return Ok(None);
            }
            let mut byte = [0u8; 1];
            self.reader.read_exact(&mut byte)?;
            self.buf = byte[0];
            self.bytes_read += 1;
            self.bits_left = 8;
        }
        if self.tail_valid_bits != 8
            && self.bytes_read == self.payload_len
            && self.bits_left <= 8 - self.tail_valid_bits
        {
            return Ok(None);
        }
        self.bits_left -= 1;
        Ok(Some((self.buf >> self.bits_left) & 1 == 1))
    }

    /// Total length of the underlying stream, payload plus framing byte.
    pub fn file_len(&self) -> u64 {
        self.payload_len + 1
    }

    /// Reads a raw byte. `Ok(None)` only if the very first bit of it is a
    /// clean end of stream; an end partway through is `Error::Truncated`.
    pub fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        let mut result: u8 = 0;
        for i in 0..8 {
            match self.read_bit()? {
                Some(bit) => result = (result << 1) | (bit as u8),
                None if i == 0 => return Ok(None),
                None => return Err(Error::Truncated),
            }
        }
        Ok(Some(result))
    }
}
