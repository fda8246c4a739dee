//! Top-level adaptive Huffman encode/decode, driving a [`Tree`] and the
//! bit-level adapters in [`crate::tools::bit_io`] over generic streams.

use std::io::{BufReader, BufWriter, Cursor, Read, Seek, Write};

use crate::tools::bit_io::{BitReader, BitWriter};
use crate::tools::huffman_tree::Tree;
use crate::Error;

/// Encodes `input` into `output`, returning `(in_size, out_size)` in bytes.
///
/// The first occurrence of a byte value is written as the current NYT code
/// followed by the raw byte; every later occurrence is written as the
/// (shrinking) code for its now-known leaf. No length or symbol table is
/// ever written: the decoder rebuilds the same tree as it reads.
pub fn encode<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<(u64, u64), Error> {
    let mut reader = BufReader::new(input);
    let mut writer = BitWriter::new(BufWriter::new(output));
    let mut tree = Tree::new();

    let mut in_size: u64 = 0;
    let mut byte = [0u8; 1];
    loop {
        let n = reader.read(&mut byte)?;
        if n == 0 {
            break;
        }
        let b = byte[0];
        in_size += 1;
        match tree.lookup(b) {
            Some(leaf) => {
                let code = tree.code_of(leaf);
                log::trace!("symbol {:#04x}: known, {} bit code", b, code.len());
                writer.write_bits(&code)?;
                tree.update(leaf);
            }
            None => {
                let nyt_code = tree.code_of(tree.nyt());
                log::trace!("symbol {:#04x}: first occurrence, {} bit NYT prefix", b, nyt_code.len());
                writer.write_bits(&nyt_code)?;
                writer.write_byte(b)?;
                let internal = tree.introduce_symbol(b);
                tree.update(internal);
            }
        }
    }

    let (mut sink, out_size) = writer.finish()?;
    sink.flush()?;
    log::debug!("encoded {} byte(s) into {} byte(s)", in_size, out_size);
    Ok((in_size, out_size))
}

/// Decodes `input` (produced by [`encode`]) into `output`, returning
/// `(in_size, out_size)` in bytes.
pub fn decode<R: Read + Seek, W: Write>(input: &mut R, output: &mut W) -> Result<(u64, u64), Error> {
    let mut reader = BitReader::new(input)?;
    let in_size = reader.file_len();
    let mut writer = BufWriter::new(output);
    let mut tree = Tree::new();

    let mut out_size: u64 = 0;
    loop {
        let mut node = tree.root();
        let mut bits_seen = 0u32;
        let symbol = loop {
            if !tree.is_leaf(node) {
                match reader.read_bit()? {
                    Some(false) => node = tree.left(node).expect("internal node has left child"),
                    Some(true) => node = tree.right(node).expect("internal node has right child"),
                    None if bits_seen == 0 => break None,
                    None => return Err(Error::Truncated),
                }
                bits_seen += 1;
                continue;
            }
            if tree.is_nyt(node) {
                let raw = match bits_seen {
                    0 => reader.read_byte()?,
                    _ => Some(reader.read_byte()?.ok_or(Error::Truncated)?),
                };
                break raw.map(|c| (c, true));
            } else {
                break Some((tree.symbol(node).expect("leaf carries a symbol"), false));
            }
        };

        let (c, first_occurrence) = match symbol {
            Some(pair) => pair,
            None => break,
        };

        writer.write_all(&[c])?;
        out_size += 1;
        if first_occurrence {
            let internal = tree.introduce_symbol(c);
            tree.update(internal);
        } else {
            let leaf = tree.lookup(c).expect("symbol was just looked up via the tree walk");
            tree.update(leaf);
        }
    }

    writer.flush()?;
    log::debug!("decoded {} byte(s) into {} byte(s)", in_size, out_size);
    Ok((in_size, out_size))
}

/// Convenience wrapper, encodes a byte slice into a freshly allocated `Vec`.
pub fn encode_slice(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut src = Cursor::new(data);
    let mut dst: Cursor<Vec<u8>> = Cursor::new(Vec::new());
    encode(&mut src, &mut dst)?;
    Ok(dst.into_inner())
}

/// Convenience wrapper, decodes a byte slice into a freshly allocated `Vec`.
pub fn decode_slice(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut src = Cursor::new(data);
    let mut dst: Cursor<Vec<u8>> = Cursor::new(Vec::new());
    decode(&mut src, &mut dst)?;
    Ok(dst.into_inner())
}
