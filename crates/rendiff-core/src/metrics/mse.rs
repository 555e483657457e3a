use ndarray::Array2;

use crate::error::Result;
use crate::frame::Frame;

/// Mean squared error between two equally-sized frames.
///
/// Identical inputs yield exactly 0. Fails with `DimensionMismatch`
/// before any computation if the shapes differ.
pub fn mse(a: &Frame, b: &Frame) -> Result<f64> {
    super::check_dimensions(&a.data, &b.data)?;
    Ok(mse_array(&a.data, &b.data))
}

/// MSE over raw arrays. Caller guarantees matching shapes.
pub fn mse_array(a: &Array2<f32>, b: &Array2<f32>) -> f64 {
    let n = a.len() as f64;
    if n == 0.0 {
        return 0.0;
    }

    let mut sum = 0.0f64;
    for (&va, &vb) in a.iter().zip(b.iter()) {
        let d = va as f64 - vb as f64;
        sum += d * d;
    }
    sum / n
}
