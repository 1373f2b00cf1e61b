// Kept in its own test binary so the to-float table is still unbuilt when
// this test starts.

use half::{
    decode_arith, decode_table, encode_arith, encode_table,
    tables::{to_float_table, to_float_table_ready},
};
use std::{
    sync::{Arc, Barrier},
    thread,
};

const THREADS: usize = 8;

#[test]
fn test_concurrent_first_use() {
    assert!(!to_float_table_ready());

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                // every thread decodes its own stripe straight away, racing
                // the one-time build
                for h in (t as u32..=u16::MAX as u32).step_by(THREADS) {
                    let h = h as u16;
                    assert_eq!(decode_table(h), decode_arith(h), "{:#06x}", h);
                    let f = decode_arith(h);
                    assert_eq!(encode_table(f), encode_arith(f));
                }
                to_float_table().as_ptr() as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker panicked"))
        .collect();

    assert!(to_float_table_ready());
    assert!(addresses.iter().all(|&a| a == addresses[0]));
}
