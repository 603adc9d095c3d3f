//! Streaming encode/decode of byte payloads as sequences of Golay codewords.

use collect_slice::CollectSlice;

use crate::bits::{CodewordBytes, Codewords, Symbol, SymbolBytes, Symbols};
use crate::coding::golay;
use crate::consts::{CODEWORD_BYTES, SYMBOL_BITS};
use crate::util::div_ceil;

/// Buffer of encoded codewords along with its logical length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    /// Codeword bytes, 3 for each 12-bit symbol of the source payload.
    pub bytes: Vec<u8>,
    /// Number of meaningful bytes in `bytes`, always the whole buffer here.
    pub len: usize,
}

/// Recovered payload along with the number of corrected bit errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Payload bytes, including any zero padding added when the payload was framed
    /// into symbols.
    pub bytes: Vec<u8>,
    /// Total number of bit errors corrected across all codewords.
    pub errors: usize,
}

/// Encode the given payload into a stream of codewords, 3 bytes for each 12 bits of
/// payload.
///
/// Any payload length is accepted, including empty; the final symbol is zero-padded in
/// its low bits if the payload isn't a whole number of symbols.
pub fn encode(payload: &[u8]) -> Encoded {
    let symbols = div_ceil(payload.len() * 8, SYMBOL_BITS);
    let mut bytes = vec![0; symbols * CODEWORD_BYTES];

    CodewordBytes::new(
        Symbols::new(payload.iter().cloned())
            .map(|s| golay::extended::encode(s.bits()))
    ).collect_slice_checked(&mut bytes[..]);

    let len = bytes.len();

    Encoded { bytes, len }
}

/// Decode the given stream of codewords back into payload bytes, correcting up to 3
/// flipped bits in each 3-byte codeword.
///
/// Trailing bytes that don't fill a codeword are discarded. The recovered payload keeps
/// the zero padding added at encode time, so it may run one byte past the original
/// payload; callers that need exact-length round-tripping must track the original
/// length out of band. A codeword with more than 3 flipped bits is silently
/// miscorrected, so callers that must detect that case need an outer integrity check.
pub fn decode(encoded: &[u8]) -> Decoded {
    let words = encoded.len() / CODEWORD_BYTES;
    let mut bytes = vec![0; words * SYMBOL_BITS / 8];
    let mut errors = 0;

    SymbolBytes::new(
        Codewords::new(encoded.iter().cloned())
            .map(|w| {
                let (data, err) = golay::extended::decode(w);
                errors += err;
                Symbol::new(data)
            })
    ).collect_slice_checked(&mut bytes[..]);

    Decoded { bytes, errors }
}
