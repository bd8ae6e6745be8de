use criterion::{criterion_group, criterion_main, Criterion};
use hexpix::{decode, encode, normalize, LengthPolicy, PixelGrid};
use std::hint::black_box;

fn generate_gradient_grid(width: usize, height: usize) -> PixelGrid {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            pixels.push(((x + y) * 255 / (width + height - 2).max(1)) as u8);
        }
    }
    PixelGrid::from_raw(pixels, width, height).expect("gradient grid")
}

fn bench_encode(c: &mut Criterion) {
    let grid = generate_gradient_grid(128, 128);

    c.bench_function("encode_128x128", |b| b.iter(|| encode(black_box(&grid))));
}

fn bench_decode(c: &mut Criterion) {
    let text = encode(&generate_gradient_grid(128, 128));

    c.bench_function("decode_128x128", |b| {
        b.iter(|| {
            let result = decode(black_box(&text), 128, 128, LengthPolicy::Strict);
            assert!(result.is_ok());
            result
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let grid = generate_gradient_grid(128, 128);
    let values: Vec<f64> = grid.pixels.iter().map(|&p| f64::from(p) - 128.0).collect();

    c.bench_function("normalize_128x128", |b| {
        b.iter(|| {
            let result = normalize(black_box(&values), 128, 128);
            assert!(result.is_ok());
            result
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_normalize);
criterion_main!(benches);
