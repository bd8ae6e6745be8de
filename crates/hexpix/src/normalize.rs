//! Min-max normalization of signed difference arrays for visualization.
//!
//! A Difference-of-Gaussians delta is signed (e.g. -20 to +20). To view it
//! as grayscale the minimum is mapped to 0 and the maximum to 255. The
//! degenerate constant-array case is handled by an explicit branch rather
//! than letting the naive formula divide by zero.

use crate::codec::{checked_area, PixelGrid};
use crate::{HexError, Result};

/// Gray level emitted when the input array is constant.
const DEGENERATE_GRAY: u8 = 128;

/// The value range a normalization pass observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRange {
    /// The input spanned a real interval; output covers the full 0-255 range.
    Spread { lo: f64, hi: f64 },
    /// Every input element was equal; output is constant mid-gray.
    Constant(f64),
}

/// A normalized difference image together with the range it was derived
/// from, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub grid: PixelGrid,
    pub range: ValueRange,
}

/// Element-wise signed difference `a - b` of two grids of equal shape.
///
/// The result is row-major like its inputs and is the expected input of
/// [`normalize`].
pub fn difference(a: &PixelGrid, b: &PixelGrid) -> Result<Vec<f64>> {
    if a.width != b.width || a.height != b.height {
        return Err(HexError::ShapeMismatch {
            left_width: a.width,
            left_height: a.height,
            right_width: b.width,
            right_height: b.height,
        });
    }
    Ok(a.pixels
        .iter()
        .zip(&b.pixels)
        .map(|(&x, &y)| f64::from(x) - f64::from(y))
        .collect())
}

/// Rescale a real-valued row-major array into 0-255 intensities.
///
/// `lo` maps to 0 and `hi` to 255; every element becomes
/// `255 * (v - lo) / (hi - lo)`, rounded half away from zero and clamped.
/// A constant array has no usable range and comes back as a flat mid-gray
/// grid tagged [`ValueRange::Constant`].
///
/// ```
/// use hexpix::{normalize, ValueRange};
///
/// let delta = [-10.0, 5.0, 0.0, 20.0];
/// let result = normalize(&delta, 2, 2)?;
/// assert_eq!(result.grid.pixels, vec![0, 128, 85, 255]);
/// assert_eq!(result.range, ValueRange::Spread { lo: -10.0, hi: 20.0 });
/// # Ok::<(), hexpix::HexError>(())
/// ```
///
/// # Errors
///
/// Returns [`HexError::BufferSizeMismatch`] when `values.len()` is not
/// `width * height` and [`HexError::NonFiniteValue`] when any element is
/// NaN or infinite.
pub fn normalize(values: &[f64], width: usize, height: usize) -> Result<Normalized> {
    let expected = checked_area(width, height)?;
    if values.len() != expected {
        return Err(HexError::BufferSizeMismatch {
            expected,
            actual: values.len(),
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(HexError::NonFiniteValue { index });
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }

    if hi == lo {
        let grid = PixelGrid::from_raw(vec![DEGENERATE_GRAY; expected], width, height)?;
        return Ok(Normalized {
            grid,
            range: ValueRange::Constant(lo),
        });
    }

    let span = hi - lo;
    let pixels = values
        .iter()
        .map(|&v| (255.0 * (v - lo) / span).round().clamp(0.0, 255.0) as u8)
        .collect();
    Ok(Normalized {
        grid: PixelGrid::from_raw(pixels, width, height)?,
        range: ValueRange::Spread { lo, hi },
    })
}
