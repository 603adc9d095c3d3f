/// Number of data bits protected by each codeword.
pub const SYMBOL_BITS: usize = 12;
/// Number of bits in a codeword.
pub const CODEWORD_BITS: usize = 24;
/// Number of bytes each codeword occupies in a coded stream.
pub const CODEWORD_BYTES: usize = CODEWORD_BITS / 8;
