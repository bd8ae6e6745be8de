//! # hexpix
//!
//! Converts fixed-resolution grayscale rasters to and from a textual
//! hexadecimal pixel encoding, and derives visualizable difference images
//! from two such encodings.
//!
//! The hex format is the one consumed by hardware-simulation testbenches
//! (e.g. Verilog's `$readmemh`): one two-digit lowercase byte token per
//! pixel, in row-major raster order, with no header and no embedded
//! dimensions. Width and height always travel out-of-band.
//!
//! ## Quick Start
//!
//! ### Encoding a grid to hex text
//!
//! ```
//! use hexpix::{decode, encode, LengthPolicy, PixelGrid};
//!
//! let grid = PixelGrid::from_raw(vec![0x00, 0xff, 0x10, 0x07], 2, 2)?;
//! let text = encode(&grid);
//! assert_eq!(text, "00\nff\n10\n07\n");
//!
//! let decoded = decode(&text, 2, 2, LengthPolicy::Strict)?;
//! assert_eq!(decoded, grid);
//! # Ok::<(), hexpix::HexError>(())
//! ```
//!
//! ### Decoding tolerant of irregular input
//!
//! Tokenization skips anything that is not a hex byte token, and
//! [`LengthPolicy::AutoFix`] reconciles a token count that does not match
//! the expected pixel count by truncating or zero-padding:
//!
//! ```
//! use hexpix::{decode, LengthPolicy};
//!
//! let grid = decode("0xAB, 0x3 // comment\ncd\n", 2, 2, LengthPolicy::AutoFix)?;
//! assert_eq!(grid.pixels, vec![0xab, 0x03, 0xcd, 0x00]);
//! # Ok::<(), hexpix::HexError>(())
//! ```

use thiserror::Error;

pub mod codec;
pub mod normalize;
pub mod tokenizer;

pub use codec::{decode, decode_tokens, encode, LengthPolicy, PixelGrid};
pub use normalize::{difference, normalize, Normalized, ValueRange};
pub use tokenizer::{tokenize, tokenize_strict};

/// Errors that can occur while decoding hex pixel streams or normalizing
/// difference arrays.
#[derive(Debug, Error)]
pub enum HexError {
    /// Invalid grid dimensions (width or height is zero or too large)
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Token count doesn't match the pixel count under strict decoding
    #[error("token count mismatch: expected {expected} tokens, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Buffer length doesn't match expected size for dimensions
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A token failed base-16 parsing after prefix stripping
    #[error("malformed hex token: {0:?}")]
    MalformedToken(String),

    /// Strict tokenization hit a byte that belongs to no token
    #[error("unexpected input at byte {offset}")]
    UnexpectedInput { offset: usize },

    /// Two grids that must share a shape don't
    #[error("grid shape mismatch: {left_width}x{left_height} vs {right_width}x{right_height}")]
    ShapeMismatch {
        left_width: usize,
        left_height: usize,
        right_width: usize,
        right_height: usize,
    },

    /// A difference value is NaN or infinite
    #[error("non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    /// Integer overflow during processing
    #[error("integer overflow")]
    IntegerOverflow,
}

/// Result type for hexpix operations.
pub type Result<T> = core::result::Result<T, HexError>;

// Internal per-axis limit used by the codec
pub(crate) const GRID_DIMENSION_LIMIT: usize = 65536;
