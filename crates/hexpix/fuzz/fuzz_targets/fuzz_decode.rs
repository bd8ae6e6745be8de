#![no_main]

use arbitrary::Arbitrary;
use hexpix::{decode, LengthPolicy};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    text: String,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.width as usize).max(1);
    let height = (input.height as usize).max(1);

    // Auto-fix decoding is total once the dimensions are valid
    let grid = decode(&input.text, width, height, LengthPolicy::AutoFix)
        .expect("auto-fix decode should accept any text");
    assert_eq!(grid.pixels.len(), width * height);

    // Strict decoding may fail, but must never panic
    let _ = decode(&input.text, width, height, LengthPolicy::Strict);
});
