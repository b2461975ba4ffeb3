//! # bit_map
//!
//! Atomic bit operations over an arbitrarily long, caller-owned bit
//! sequence backed by an array of [`AtomicWord`]s.
//!
//! This layer only does arithmetic: a global bit index is split into a
//! `(word, bit-within-word)` pair and the word-level primitive from
//! `atomic_word` does the update. Atomicity is per word; bits living in
//! different words have no ordering relationship beyond what each call
//! itself provides.
//!
//! ```rust
//! use bit_map::{AtomicWord, declare, set_bit, test_bit, word_count, zero_fill};
//!
//! // 100 bits of flags; the caller owns the storage, this crate never
//! // allocates.
//! let flags: [AtomicWord; word_count(100)] = declare();
//! zero_fill(&flags, 100);
//!
//! set_bit(&flags, 99);
//! assert!(test_bit(&flags, 99));
//! assert!(!test_bit(&flags, 0));
//! ```
//!
//! The [`BitMap`] view adds a capacity-checked constructor for callers
//! that want the five operations under one namespaced handle.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
mod index;
mod map;

pub use atomic_word::{AtomicWord, Ordering, WORD_BITS, full_barrier};
pub use error::BitMapError;
pub use index::{bit_of, word_count, word_of};
pub use map::{
    BitMap, clear_bit, declare, set_all, set_bit, test_and_clear_bit, test_and_set_bit, test_bit,
    zero_fill,
};
