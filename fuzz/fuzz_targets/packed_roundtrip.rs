#![no_main]
use huffman_coder::{compress, decompress};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    let (input, garbage) = data;

    // Arbitrary bytes must be rejected cleanly, never panic.
    let _ = decompress::<u8>(&garbage);

    let packed = match compress(&input) {
        Ok(packed) => packed,
        Err(_) => return,
    };
    let output = decompress::<u8>(&packed).expect("packed output must decode");
    assert_eq!(input, output);
});
