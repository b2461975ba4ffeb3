//! Index arithmetic mapping a global bit index onto the word array.
//!
//! All three functions are `const fn` so callers can size static storage
//! from them. They share the LSB-first convention of [`atomic_word`]: bit
//! `WORD_BITS` is the `1 << 0` position of word 1.

use atomic_word::WORD_BITS;

/// Number of words needed to hold `bits` bits. `word_count(0) == 0`.
#[inline(always)]
pub const fn word_count(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Index of the word holding global bit `index`.
#[inline(always)]
pub const fn word_of(index: usize) -> usize {
    index / WORD_BITS
}

/// Position of global bit `index` within its word.
#[inline(always)]
pub const fn bit_of(index: usize) -> usize {
    index % WORD_BITS
}
