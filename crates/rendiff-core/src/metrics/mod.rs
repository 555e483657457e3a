pub mod mse;
pub mod ssim;

use ndarray::Array2;

use crate::consts::SSIM_WINDOW_SIZE;
use crate::error::{RendiffError, Result};
use crate::frame::{ColorFrame, Frame, FrameMetrics};

/// Verify two arrays share the same shape before any metric runs.
pub fn check_dimensions(a: &Array2<f32>, b: &Array2<f32>) -> Result<()> {
    if a.dim() != b.dim() {
        let (eh, ew) = a.dim();
        let (ah, aw) = b.dim();
        return Err(RendiffError::DimensionMismatch {
            expected_width: ew,
            expected_height: eh,
            actual_width: aw,
            actual_height: ah,
        });
    }
    Ok(())
}

/// Compute MSE and SSIM for a pair of grayscale frames using the
/// default SSIM window.
pub fn compare(a: &Frame, b: &Frame) -> Result<FrameMetrics> {
    compare_with_window(a, b, SSIM_WINDOW_SIZE)
}

/// Compute MSE and SSIM for a pair of grayscale frames.
///
/// The dimension check happens once, up front; both metrics assume
/// matching shapes afterwards.
pub fn compare_with_window(a: &Frame, b: &Frame, window: usize) -> Result<FrameMetrics> {
    check_dimensions(&a.data, &b.data)?;
    Ok(FrameMetrics {
        mse: mse::mse_array(&a.data, &b.data),
        ssim: ssim::ssim_array(&a.data, &b.data, window),
    })
}

/// Compute MSE and SSIM for a pair of color frames.
///
/// Each metric is evaluated per channel and averaged, so grayscale and
/// color inputs are treated identically.
pub fn compare_color(a: &ColorFrame, b: &ColorFrame, window: usize) -> Result<FrameMetrics> {
    check_dimensions(&a.red.data, &b.red.data)?;
    check_dimensions(&a.green.data, &b.green.data)?;
    check_dimensions(&a.blue.data, &b.blue.data)?;

    let channels = [
        (&a.red.data, &b.red.data),
        (&a.green.data, &b.green.data),
        (&a.blue.data, &b.blue.data),
    ];

    let mut mse_sum = 0.0;
    let mut ssim_sum = 0.0;
    for (ca, cb) in channels {
        mse_sum += mse::mse_array(ca, cb);
        ssim_sum += ssim::ssim_array(ca, cb, window);
    }

    Ok(FrameMetrics {
        mse: mse_sum / 3.0,
        ssim: ssim_sum / 3.0,
    })
}
