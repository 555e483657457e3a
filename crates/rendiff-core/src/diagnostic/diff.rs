use ndarray::Array2;

use crate::error::Result;
use crate::frame::{ColorFrame, Frame};
use crate::metrics::check_dimensions;

use super::colormap::DiffColormap;

/// Per-pixel absolute difference between two grayscale frames.
pub fn difference_map(a: &Frame, b: &Frame) -> Result<Array2<f32>> {
    check_dimensions(&a.data, &b.data)?;
    let (h, w) = a.data.dim();
    let mut diff = Array2::<f32>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            diff[[row, col]] = (a.data[[row, col]] - b.data[[row, col]]).abs();
        }
    }
    Ok(diff)
}

/// False-color difference image: the absolute-difference map pushed
/// through a perceptual colormap so the magnitude of change is
/// visually legible (0 -> black/cold, max -> white/hot).
pub fn render_diff(a: &Frame, b: &Frame, colormap: DiffColormap) -> Result<ColorFrame> {
    let diff = difference_map(a, b)?;
    Ok(colormap.apply(&diff, a.original_bit_depth))
}
