use hexpix::*;
use pretty_assertions::assert_eq;

#[test]
fn test_round_trip_exact() {
    let grid = PixelGrid::from_raw(vec![0x00, 0x7f, 0x80, 0xff, 0x01, 0x10], 3, 2)
        .expect("buffer matches dimensions");

    let text = encode(&grid);
    let decoded = decode(&text, 3, 2, LengthPolicy::Strict).expect("round-trip decode");
    assert_eq!(decoded, grid, "decode(encode(g)) must reproduce g exactly");
}

#[test]
fn test_round_trip_full_byte_range() {
    // Every byte value appears once in a 16x16 grid
    let grid = PixelGrid::from_raw((0..=255).collect(), 16, 16).expect("256 pixels");

    let decoded = decode(&encode(&grid), 16, 16, LengthPolicy::Strict).expect("decode");
    assert_eq!(decoded, grid);
}

#[test]
fn test_decode_from_line_oriented_file() {
    // The on-disk format: one token per line, dimensions out-of-band
    let text = "00\nff\n10\n07\n";
    let grid = decode(text, 2, 2, LengthPolicy::Strict).expect("clean strict decode");

    assert_eq!(grid.pixels, vec![0x00, 0xff, 0x10, 0x07]);
    assert_eq!(grid.get(0, 0), 0x00);
    assert_eq!(grid.get(1, 0), 0xff);
    assert_eq!(grid.get(0, 1), 0x10);
    assert_eq!(grid.get(1, 1), 0x07);
}

#[test]
fn test_decode_tolerates_irregular_text() {
    // Comments, commas and prefixes around the tokens are all skipped
    let text = "// header\n0x12, 0x34\nstray stuff ff\n";
    let grid = decode(text, 3, 1, LengthPolicy::Strict).expect("three tokens survive");
    assert_eq!(grid.pixels, vec![0x12, 0x34, 0xff]);
}

#[test]
fn test_strict_mismatch_fails_with_both_counts() {
    let text = "00 11 22 33 44"; // 5 tokens for a 2x2 grid
    let err = decode(text, 2, 2, LengthPolicy::Strict).unwrap_err();

    match err {
        HexError::LengthMismatch { expected, actual } => {
            assert_eq!(expected, 4);
            assert_eq!(actual, 5);
        }
        other => panic!("expected LengthMismatch, got {other:?}"),
    }

    let err = decode("00 11", 2, 2, LengthPolicy::Strict).unwrap_err();
    assert!(matches!(
        err,
        HexError::LengthMismatch {
            expected: 4,
            actual: 2
        }
    ));
}

#[test]
fn test_autofix_truncates_surplus() {
    let surplus = "00 11 22 33 44 55";
    let truncated = decode(surplus, 2, 2, LengthPolicy::AutoFix).expect("auto-fix");
    let exact = decode("00 11 22 33", 2, 2, LengthPolicy::Strict).expect("strict");

    assert_eq!(
        truncated, exact,
        "auto-fix must keep exactly the first width*height tokens"
    );
}

#[test]
fn test_autofix_pads_deficit_with_black() {
    let grid = decode("ab cd", 2, 2, LengthPolicy::AutoFix).expect("auto-fix");

    assert_eq!(grid.pixels, vec![0xab, 0xcd, 0x00, 0x00]);
}

#[test]
fn test_autofix_with_exact_count_is_a_noop() {
    let text = "01 02 03 04";
    let fixed = decode(text, 2, 2, LengthPolicy::AutoFix).unwrap();
    let strict = decode(text, 2, 2, LengthPolicy::Strict).unwrap();
    assert_eq!(fixed, strict);
}

#[test]
fn test_mixed_token_forms_scenario() {
    // 2x2 auto-fix decode of mixed-form tokens, then re-encode normalized
    let tokens = ["00", "ff", "0x10", "7"];
    let grid = decode_tokens(&tokens, 2, 2, LengthPolicy::AutoFix).expect("decode");

    assert_eq!(grid.get(0, 0), 0);
    assert_eq!(grid.get(1, 0), 255);
    assert_eq!(grid.get(0, 1), 16);
    assert_eq!(grid.get(1, 1), 7);

    let reencoded = encode(&grid);
    assert_eq!(
        reencoded.lines().collect::<Vec<_>>(),
        vec!["00", "ff", "10", "07"]
    );
}

#[test]
fn test_invalid_dimensions() {
    assert!(matches!(
        decode("00", 0, 4, LengthPolicy::Strict).unwrap_err(),
        HexError::InvalidDimensions {
            width: 0,
            height: 4
        }
    ));
    assert!(decode("00", 4, 0, LengthPolicy::AutoFix).is_err());
}

#[test]
fn test_diff_pipeline_end_to_end() {
    // Decode two hex streams, subtract, normalize: the core of the
    // difference-image visualizer
    let sharp = decode("0a 14 1e 28", 2, 2, LengthPolicy::Strict).unwrap();
    let blurred = decode("14 14 1e 14", 2, 2, LengthPolicy::Strict).unwrap();

    let delta = difference(&sharp, &blurred).expect("same shape");
    assert_eq!(delta, vec![-10.0, 0.0, 0.0, 20.0]);

    let result = normalize(&delta, 2, 2).expect("non-degenerate");
    assert_eq!(result.grid.pixels, vec![0, 85, 85, 255]);
    match result.range {
        ValueRange::Spread { lo, hi } => {
            assert_eq!(lo, -10.0);
            assert_eq!(hi, 20.0);
        }
        ValueRange::Constant(_) => panic!("range should not be degenerate"),
    }
}

#[test]
fn test_diff_of_identical_streams_is_degenerate() {
    let a = decode("11 22 33 44", 2, 2, LengthPolicy::Strict).unwrap();
    let delta = difference(&a, &a).unwrap();
    let result = normalize(&delta, 2, 2).expect("degenerate input is not an error");

    assert!(matches!(result.range, ValueRange::Constant(v) if v == 0.0));
    assert!(result.grid.pixels.iter().all(|&p| p == 128));
}
