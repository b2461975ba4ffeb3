//! Sequence-scope operations: the five bit primitives addressed by global
//! index, plus declaration and fill helpers.

use atomic_word::{AtomicWord, Ordering, WORD_BITS};

use crate::error::BitMapError;
use crate::index::{bit_of, word_count, word_of};

type Result<T> = core::result::Result<T, BitMapError>;

/// Zeroed backing storage for a bit sequence. Size it with
/// [`word_count`](crate::word_count):
///
/// ```rust
/// use bit_map::{AtomicWord, declare, word_count};
///
/// static FLAGS: [AtomicWord; word_count(64)] = declare();
/// ```
pub const fn declare<const WORDS: usize>() -> [AtomicWord; WORDS] {
    [const { AtomicWord::ZERO }; WORDS]
}

/// Clear every bit of a `bits`-bit sequence, padding included.
pub fn zero_fill(words: &[AtomicWord], bits: usize) {
    for word in &words[..word_count(bits)] {
        word.store(0, Ordering::Relaxed);
    }
}

/// Set every bit of a `bits`-bit sequence. Padding bits of the final
/// partial word are set as well; their value carries no meaning.
pub fn set_all(words: &[AtomicWord], bits: usize) {
    for word in &words[..word_count(bits)] {
        word.store(!0, Ordering::Relaxed);
    }
}

/// Atomically OR in bit `index` of the sequence. No barrier implied.
#[inline]
pub fn set_bit(words: &[AtomicWord], index: usize) {
    debug_assert!(index < words.len() * WORD_BITS, "bit {index} out of range");
    atomic_word::set_bit(&words[word_of(index)], bit_of(index));
}

/// Atomically clear bit `index` of the sequence. No barrier implied.
#[inline]
pub fn clear_bit(words: &[AtomicWord], index: usize) {
    debug_assert!(index < words.len() * WORD_BITS, "bit {index} out of range");
    atomic_word::clear_bit(&words[word_of(index)], bit_of(index));
}

/// Whether bit `index` is set. Plain load, no ordering guarantee.
#[inline]
pub fn test_bit(words: &[AtomicWord], index: usize) -> bool {
    debug_assert!(index < words.len() * WORD_BITS, "bit {index} out of range");
    atomic_word::test_bit(&words[word_of(index)], bit_of(index))
}

/// Atomically set bit `index` and return its prior value. Full barrier on
/// the word holding the bit.
#[inline]
pub fn test_and_set_bit(words: &[AtomicWord], index: usize) -> bool {
    debug_assert!(index < words.len() * WORD_BITS, "bit {index} out of range");
    atomic_word::test_and_set_bit(&words[word_of(index)], bit_of(index))
}

/// Atomically clear bit `index` and return its prior value. Full barrier
/// on the word holding the bit.
#[inline]
pub fn test_and_clear_bit(words: &[AtomicWord], index: usize) -> bool {
    debug_assert!(index < words.len() * WORD_BITS, "bit {index} out of range");
    atomic_word::test_and_clear_bit(&words[word_of(index)], bit_of(index))
}

/// Capacity-checked view over caller-owned word storage.
///
/// The constructor is the only fallible point in the crate: it verifies
/// once that `bits` bits fit in the borrowed words, after which every
/// operation is the same unchecked constant-time primitive the free
/// functions expose.
///
/// ```rust
/// use bit_map::{AtomicWord, BitMap, declare, word_count};
///
/// let words: [AtomicWord; word_count(96)] = declare();
/// let map = BitMap::new(&words, 96).unwrap();
///
/// assert!(!map.test_and_set_bit(95));
/// assert!(map.test_bit(95));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BitMap<'a> {
    words: &'a [AtomicWord],
    bits: usize,
}

impl<'a> BitMap<'a> {
    /// Borrow `words` as a sequence of `bits` bits.
    pub fn new(words: &'a [AtomicWord], bits: usize) -> Result<Self> {
        if word_count(bits) > words.len() {
            return Err(BitMapError::CapacityExceeded {
                bits,
                words: words.len(),
            });
        }
        Ok(Self { words, bits })
    }

    /// Capacity in bits.
    pub fn len(&self) -> usize {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The borrowed backing words.
    pub fn words(&self) -> &'a [AtomicWord] {
        self.words
    }

    pub fn zero_fill(&self) {
        zero_fill(self.words, self.bits);
    }

    pub fn set_all(&self) {
        set_all(self.words, self.bits);
    }

    #[inline]
    pub fn set_bit(&self, index: usize) {
        debug_assert!(index < self.bits, "bit {index} out of range");
        set_bit(self.words, index);
    }

    #[inline]
    pub fn clear_bit(&self, index: usize) {
        debug_assert!(index < self.bits, "bit {index} out of range");
        clear_bit(self.words, index);
    }

    #[inline]
    pub fn test_bit(&self, index: usize) -> bool {
        debug_assert!(index < self.bits, "bit {index} out of range");
        test_bit(self.words, index)
    }

    #[inline]
    pub fn test_and_set_bit(&self, index: usize) -> bool {
        debug_assert!(index < self.bits, "bit {index} out of range");
        test_and_set_bit(self.words, index)
    }

    #[inline]
    pub fn test_and_clear_bit(&self, index: usize) -> bool {
        debug_assert!(index < self.bits, "bit {index} out of range");
        test_and_clear_bit(self.words, index)
    }
}
