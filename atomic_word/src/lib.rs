//! # atomic_word
//!
//! Atomic single-bit operations on one machine word.
//!
//! This is the leaf of the signalling substrate: five operations
//! (`set_bit`, `clear_bit`, `test_bit`, `test_and_set_bit`,
//! `test_and_clear_bit`) that never block, never allocate, and complete in
//! constant time, so a hard-real-time context can call them against storage
//! shared with supervisory threads.
//!
//! ```rust
//! use atomic_word::{AtomicWord, test_and_set_bit, test_bit};
//!
//! let word = AtomicWord::new(0);
//! assert!(!test_and_set_bit(&word, 5)); // prior value was 0
//! assert!(test_bit(&word, 5));
//! assert!(test_and_set_bit(&word, 5)); // already set
//! ```
//!
//! The backend is picked at build time: native atomics by default, a
//! `Cell`-backed word behind the `single-context` feature, and a hard
//! compile error when neither is available. See [`AtomicWord`].

#![cfg_attr(not(feature = "std"), no_std)]

mod ops;
mod word;

pub use ops::{
    WORD_BITS, clear_bit, full_barrier, mask, set_bit, test_and_clear_bit, test_and_set_bit,
    test_bit,
};
pub use word::{AtomicWord, Ordering};
