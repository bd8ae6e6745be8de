//! Maps flat token sequences to fixed-size pixel grids and back.
//!
//! Decoding tokenizes lazily via [`crate::tokenizer`] and applies a length
//! reconciliation policy when the token count does not match the expected
//! pixel count. Encoding is a total function: every byte has exactly one
//! two-digit lowercase representation.

use crate::tokenizer::tokenize;
use crate::{HexError, Result, GRID_DIMENSION_LIMIT};

/// Policy for reconciling a token count that differs from `width * height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Fail with [`HexError::LengthMismatch`] on any deviation.
    #[default]
    Strict,
    /// Truncate surplus tokens; pad a deficit with `00` (black).
    AutoFix,
}

/// A fixed-size 8-bit grayscale raster.
///
/// Pixels are stored row-major: all of row 0 first, left to right. The
/// intensity at column `x`, row `y` lives at index `y * width + x`, and
/// `pixels.len() == width * height` always holds for grids built through
/// the checked constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Row-major intensities, `width * height` bytes
    pub pixels: Vec<u8>,
    /// Grid width in pixels
    pub width: usize,
    /// Grid height in pixels
    pub height: usize,
}

impl PixelGrid {
    /// Build a grid from a row-major byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`HexError::InvalidDimensions`] for a zero or oversized axis
    /// and [`HexError::BufferSizeMismatch`] when `pixels.len()` is not
    /// `width * height`.
    pub fn from_raw(pixels: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        let expected = checked_area(width, height)?;
        if pixels.len() != expected {
            return Err(HexError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Intensity at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }
}

/// Validate dimensions and return `width * height`.
pub(crate) fn checked_area(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 || width > GRID_DIMENSION_LIMIT || height > GRID_DIMENSION_LIMIT {
        return Err(HexError::InvalidDimensions { width, height });
    }
    width.checked_mul(height).ok_or(HexError::IntegerOverflow)
}

/// Decode raw hex text into a `width` x `height` grid.
///
/// The text is tokenized leniently (see [`tokenize`]); `policy` decides
/// what happens when the token count differs from `width * height`.
///
/// # Errors
///
/// Returns [`HexError::LengthMismatch`] under [`LengthPolicy::Strict`] when
/// the count deviates, reporting both counts for diagnostics. No grid is
/// produced on failure.
pub fn decode(text: &str, width: usize, height: usize, policy: LengthPolicy) -> Result<PixelGrid> {
    decode_tokens(&tokenize(text), width, height, policy)
}

/// Decode an already-extracted token sequence into a grid.
///
/// Tokens may carry an optional `0x`/`0X` prefix and may be one or two hex
/// digits; anything else fails with [`HexError::MalformedToken`]. Under
/// [`LengthPolicy::AutoFix`], surplus tokens past `width * height` are
/// discarded unparsed and a deficit is padded with black.
pub fn decode_tokens<S: AsRef<str>>(
    tokens: &[S],
    width: usize,
    height: usize,
    policy: LengthPolicy,
) -> Result<PixelGrid> {
    let expected = checked_area(width, height)?;
    if tokens.len() != expected && policy == LengthPolicy::Strict {
        return Err(HexError::LengthMismatch {
            expected,
            actual: tokens.len(),
        });
    }

    let mut pixels = Vec::with_capacity(expected);
    for token in tokens.iter().take(expected) {
        pixels.push(parse_token(token.as_ref())?);
    }
    pixels.resize(expected, 0x00);

    PixelGrid::from_raw(pixels, width, height)
}

/// Encode a grid as hex text, one lowercase two-digit token per line.
///
/// Tokens come out in row-major order, matching [`decode`], so
/// `decode(&encode(&g), g.width, g.height, LengthPolicy::Strict)`
/// reproduces `g` exactly.
#[must_use = "this returns the encoded hex text"]
pub fn encode(grid: &PixelGrid) -> String {
    let mut out = String::with_capacity(grid.pixels.len() * 3);
    for &pixel in &grid.pixels {
        push_hex_byte(&mut out, pixel);
        out.push('\n');
    }
    out
}

/// Parse one token as a base-16 byte, stripping an optional `0x`/`0X`
/// prefix. Tokenizer output always parses; caller-supplied tokens may not.
fn parse_token(token: &str) -> Result<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexError::MalformedToken(token.to_string()));
    }
    u8::from_str_radix(digits, 16).map_err(|_| HexError::MalformedToken(token.to_string()))
}

/// Fast byte to two hex digits without allocation
#[inline]
fn push_hex_byte(out: &mut String, byte: u8) {
    const TABLE: &[u8; 16] = b"0123456789abcdef";
    out.push(TABLE[(byte >> 4) as usize] as char);
    out.push(TABLE[(byte & 0x0f) as usize] as char);
}
