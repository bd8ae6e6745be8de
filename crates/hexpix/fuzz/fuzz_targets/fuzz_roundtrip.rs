#![no_main]

use arbitrary::Arbitrary;
use hexpix::{decode, encode, LengthPolicy, PixelGrid};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    pixels: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.width as usize).clamp(1, 64);
    let height = (input.height as usize).clamp(1, 64);
    let expected = width * height;
    if input.pixels.len() < expected {
        return;
    }

    let grid = PixelGrid::from_raw(input.pixels[..expected].to_vec(), width, height)
        .expect("buffer length matches dimensions");

    let decoded = decode(&encode(&grid), width, height, LengthPolicy::Strict)
        .expect("encoded text must decode strictly");
    assert_eq!(decoded, grid, "round-trip must be lossless");
});
