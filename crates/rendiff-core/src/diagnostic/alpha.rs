use ndarray::Array2;

use crate::consts::{DILATION_ITERATIONS, DILATION_RADIUS};
use crate::error::Result;
use crate::frame::Frame;

use super::diff::difference_map;
use super::threshold::{binarize, otsu_threshold};

/// Binary alpha mask marking regions of detected difference.
///
/// The grayscale absolute difference is thresholded (Otsu by default,
/// fixed midpoint when `otsu_enabled` is false) and dilated with a
/// square kernel so thin differences stay visible.
pub fn render_alpha(a: &Frame, b: &Frame, otsu_enabled: bool) -> Result<Array2<bool>> {
    let diff = difference_map(a, b)?;
    let threshold = if otsu_enabled {
        otsu_threshold(&diff)
    } else {
        0.5
    };

    let mut mask = binarize(&diff, threshold);
    for _ in 0..DILATION_ITERATIONS {
        mask = dilate(&mask, DILATION_RADIUS);
    }
    Ok(mask)
}

/// Binary dilation with a square kernel of the given radius: a pixel
/// becomes true if ANY pixel in its neighborhood is true.
pub fn dilate(mask: &Array2<bool>, radius: usize) -> Array2<bool> {
    let (h, w) = mask.dim();
    let r = radius as i32;
    let mut result = Array2::from_elem((h, w), false);

    for row in 0..h {
        for col in 0..w {
            let mut any_true = false;
            for dr in -r..=r {
                for dc in -r..=r {
                    let nr = row as i32 + dr;
                    let nc = col as i32 + dc;
                    if nr >= 0
                        && nr < h as i32
                        && nc >= 0
                        && nc < w as i32
                        && mask[[nr as usize, nc as usize]]
                    {
                        any_true = true;
                        break;
                    }
                }
                if any_true {
                    break;
                }
            }
            result[[row, col]] = any_true;
        }
    }

    result
}
