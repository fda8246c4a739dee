//! # fgkhuff
//!
//! Adaptive (FGK) Huffman coding over arbitrary byte streams.
//!
//! Unlike a static Huffman coder, there is no header and no precomputed
//! symbol table: the encoder and decoder each grow an identical Huffman
//! tree, one symbol at a time, starting from nothing.  A single
//! "not-yet-transmitted" node stands in for every symbol that has not
//! appeared yet; the first time a byte value is seen it is written out
//! raw, and from then on the tree knows about it.
//!
//! * `tools::huffman_tree` is the adaptive tree itself.
//! * `tools::bit_io` adapts a byte stream to bit-at-a-time reading and writing.
//! * `codec` drives the two together to implement `encode`/`decode`.
//!
//! The coding functions are generics that operate on trait objects with
//! bounds `Read` / `Write` (`decode` additionally needs `Seek` on its
//! source, to find the trailing framing byte up front).  There are
//! convenience functions for working directly with buffers.
//!
//! ## File Example
//!
//! ```rs
//! use fgkhuff::codec;
//! let mut in_file = std::fs::File::open("some_input_path").expect("open failed");
//! let mut out_file = std::fs::File::create("some_output_path").expect("create failed");
//! let (in_size,out_size) = codec::encode(&mut in_file,&mut out_file).expect("encoding failed");
//! eprintln!("encoded {} into {}",in_size,out_size);
//! ```
//!
//! ## Buffer Example
//!
//! ```rs
//! use fgkhuff::codec;
//! let test_data = "the chaunt of the priests of Mung".as_bytes();
//! let compressed = codec::encode_slice(test_data).expect("encoding failed");
//! ```

pub mod tools;
pub mod codec;

/// Errors that can arise while encoding or decoding.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("compressed stream ended before the encoded symbol was complete")]
    Truncated,
}
