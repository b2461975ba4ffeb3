// tests/proptest.rs

#![cfg(test)]

use bit_map::{
    AtomicWord, WORD_BITS, clear_bit, set_all, set_bit, test_and_clear_bit, test_and_set_bit,
    test_bit, word_count, zero_fill,
};
use proptest::prelude::*;

fn storage(bits: usize) -> Vec<AtomicWord> {
    (0..word_count(bits)).map(|_| AtomicWord::ZERO).collect()
}

/// A capacity and a valid index into it.
fn bits_and_index() -> impl Strategy<Value = (usize, usize)> {
    (1usize..512).prop_flat_map(|bits| (Just(bits), 0..bits))
}

//
// -----------------------------------------------------------------------------
// Postconditions of the five operations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_then_test((bits, index) in bits_and_index()) {
        let words = storage(bits);
        set_bit(&words, index);
        prop_assert!(test_bit(&words, index));
    }
}

proptest! {
    #[test]
    fn prop_clear_then_test((bits, index) in bits_and_index()) {
        let words = storage(bits);
        set_all(&words, bits);
        clear_bit(&words, index);
        prop_assert!(!test_bit(&words, index));
    }
}

proptest! {
    #[test]
    fn prop_test_and_set_reports_prior(
        (bits, index) in bits_and_index(),
        preset in any::<bool>()
    ) {
        let words = storage(bits);
        if preset {
            set_bit(&words, index);
        }

        prop_assert_eq!(test_and_set_bit(&words, index), preset);
        prop_assert!(test_bit(&words, index));
        // Idempotent-set confirmed by the second call.
        prop_assert!(test_and_set_bit(&words, index));
    }
}

proptest! {
    #[test]
    fn prop_test_and_clear_reports_prior(
        (bits, index) in bits_and_index(),
        preset in any::<bool>()
    ) {
        let words = storage(bits);
        if preset {
            set_bit(&words, index);
        }

        prop_assert_eq!(test_and_clear_bit(&words, index), preset);
        prop_assert!(!test_bit(&words, index));
        prop_assert!(!test_and_clear_bit(&words, index));
    }
}

//
// -----------------------------------------------------------------------------
// Bit independence
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_disturbs_no_other_bit(
        indices in prop::collection::hash_set(0usize..256, 0..64)
    ) {
        let bits = 256;
        let words = storage(bits);

        for &index in &indices {
            set_bit(&words, index);
        }

        for index in 0..bits {
            prop_assert_eq!(test_bit(&words, index), indices.contains(&index));
        }
    }
}

proptest! {
    #[test]
    fn prop_clear_disturbs_no_other_bit(
        indices in prop::collection::hash_set(0usize..256, 0..64)
    ) {
        let bits = 256;
        let words = storage(bits);
        set_all(&words, bits);

        for &index in &indices {
            clear_bit(&words, index);
        }

        for index in 0..bits {
            prop_assert_eq!(test_bit(&words, index), !indices.contains(&index));
        }
    }
}

//
// -----------------------------------------------------------------------------
// Word boundaries and fills
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_adjacent_words_are_isolated(word in 0usize..7) {
        // Last bit of `word` and first bit of `word + 1`.
        let words = storage(8 * WORD_BITS);
        let left = word * WORD_BITS + (WORD_BITS - 1);
        let right = (word + 1) * WORD_BITS;

        set_bit(&words, left);
        set_bit(&words, right);
        clear_bit(&words, left);

        prop_assert!(!test_bit(&words, left));
        prop_assert!(test_bit(&words, right));
    }
}

proptest! {
    #[test]
    fn prop_fill_helpers_cover_every_bit(bits in 1usize..512) {
        let words = storage(bits);

        set_all(&words, bits);
        for index in 0..bits {
            prop_assert!(test_bit(&words, index));
        }

        zero_fill(&words, bits);
        for index in 0..bits {
            prop_assert!(!test_bit(&words, index));
        }
    }
}
