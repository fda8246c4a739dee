//! Supporting pieces for the codec: the adaptive tree and the bit-level
//! stream adapters that sit between it and a byte-oriented `Read`/`Write`.

pub mod huffman_tree;
pub mod bit_io;
