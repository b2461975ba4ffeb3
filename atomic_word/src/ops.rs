//! The five word-scope bit operations and their ordering contract.
//!
//! `test_and_set_bit` and `test_and_clear_bit` are full barriers: they form
//! a single total order with every other operation on the same word.
//! `set_bit` and `clear_bit` guarantee atomicity but no ordering; a caller
//! relying on visibility around them inserts [`full_barrier`] explicitly.
//! `test_bit` is a plain load and promises only a value that was current at
//! some point during the call.

use crate::word::{AtomicWord, Ordering};

/// Bit width of [`AtomicWord`].
pub const WORD_BITS: usize = usize::BITS as usize;

/// Single-bit mask for position `nr`.
#[inline(always)]
pub const fn mask(nr: usize) -> usize {
    1 << nr
}

/// Atomically OR bit `nr` into the word. No barrier implied.
#[inline]
pub fn set_bit(word: &AtomicWord, nr: usize) {
    debug_assert!(nr < WORD_BITS, "bit {nr} out of range for word");
    word.fetch_or(mask(nr), Ordering::Relaxed);
}

/// Atomically clear bit `nr` of the word. No barrier implied.
#[inline]
pub fn clear_bit(word: &AtomicWord, nr: usize) {
    debug_assert!(nr < WORD_BITS, "bit {nr} out of range for word");
    word.fetch_and(!mask(nr), Ordering::Relaxed);
}

/// Whether bit `nr` is set. Plain load, no ordering guarantee; callers
/// needing an ordered read use [`test_and_set_bit`] or
/// [`test_and_clear_bit`] and discard the result.
#[inline]
pub fn test_bit(word: &AtomicWord, nr: usize) -> bool {
    debug_assert!(nr < WORD_BITS, "bit {nr} out of range for word");
    word.load(Ordering::Relaxed) & mask(nr) != 0
}

/// Atomically set bit `nr` and return its prior value. Full barrier.
#[inline]
pub fn test_and_set_bit(word: &AtomicWord, nr: usize) -> bool {
    debug_assert!(nr < WORD_BITS, "bit {nr} out of range for word");
    word.fetch_or(mask(nr), Ordering::SeqCst) & mask(nr) != 0
}

/// Atomically clear bit `nr` and return its prior value. Full barrier.
#[inline]
pub fn test_and_clear_bit(word: &AtomicWord, nr: usize) -> bool {
    debug_assert!(nr < WORD_BITS, "bit {nr} out of range for word");
    word.fetch_and(!mask(nr), Ordering::SeqCst) & mask(nr) != 0
}

/// Sequentially consistent fence, for callers that need visibility
/// ordering around a plain [`set_bit`] or [`clear_bit`].
///
/// In single-context builds this degrades to a compiler fence; there is no
/// other context to order against.
#[inline]
pub fn full_barrier() {
    #[cfg(not(feature = "single-context"))]
    core::sync::atomic::fence(core::sync::atomic::Ordering::SeqCst);

    #[cfg(feature = "single-context")]
    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}
