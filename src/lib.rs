//! Forward error correction for byte streams based on the (24, 12, 8) extended binary
//! Golay code.
//!
//! Payload bytes are framed into 12-bit symbols, each symbol is encoded to a 24-bit
//! codeword, and the codewords are packed into the output as consecutive 3-byte groups.
//! Decoding corrects up to 3 flipped bits in each codeword and reports the total number
//! of bits corrected across the stream.

mod util;

pub mod bits;
pub mod codec;
pub mod coding;
pub mod consts;

pub use self::codec::{decode, encode, Decoded, Encoded};
