use std::thread;

use bit_map::{AtomicWord, BitMap, declare, test_and_set_bit, test_bit, word_count, zero_fill};

fn main() {
    println!("=== Bit Map Examples ===\n");

    example_status_flags();
    example_fault_latch();
    example_checked_view();
}

fn example_status_flags() {
    println!("Example 1: Controller status flags");

    const MOTION_ENABLED: usize = 0;
    const ESTOP: usize = 1;
    const FAULT_PENDING: usize = 2;

    // One word is plenty for a handful of status bits; the same calls work
    // on a sequence of any length.
    let flags: [AtomicWord; word_count(64)] = declare();
    zero_fill(&flags, 64);

    bit_map::set_bit(&flags, MOTION_ENABLED);
    bit_map::set_bit(&flags, FAULT_PENDING);

    println!("  motion enabled: {}", test_bit(&flags, MOTION_ENABLED));
    println!("  estop:          {}", test_bit(&flags, ESTOP));
    println!("  fault pending:  {}", test_bit(&flags, FAULT_PENDING));

    bit_map::clear_bit(&flags, FAULT_PENDING);
    println!(
        "  fault pending after acknowledge: {}",
        test_bit(&flags, FAULT_PENDING)
    );
    println!();
}

fn example_fault_latch() {
    println!("Example 2: First observer latches the fault");

    const FAULT: usize = 17;
    let flags: [AtomicWord; word_count(64)] = declare();
    let flags = &flags;

    // Several contexts notice the same condition; test_and_set_bit makes
    // exactly one of them responsible for handling it.
    let handled = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|id| s.spawn(move || (!test_and_set_bit(flags, FAULT)).then_some(id)))
            .collect();
        handles
            .into_iter()
            .filter_map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    });

    println!("  threads that won the latch: {handled:?}");
    println!("  fault bit set: {}", test_bit(flags, FAULT));
    println!();
}

fn example_checked_view() {
    println!("Example 3: Capacity-checked view");

    let words: [AtomicWord; word_count(100)] = declare();

    let map = BitMap::new(&words, 100).unwrap();
    map.set_all();
    println!("  bit 99 after set_all: {}", map.test_bit(99));

    // Asking for more bits than the storage holds fails up front.
    match BitMap::new(&words, 1_000) {
        Ok(_) => unreachable!(),
        Err(e) => println!("  oversized view rejected: {e}"),
    }
}
