use ndarray::Array2;

use crate::consts::{SSIM_DATA_RANGE, SSIM_GAUSSIAN_SIGMA, SSIM_K1, SSIM_K2, SSIM_WINDOW_SIZE};
use crate::error::Result;
use crate::frame::Frame;

/// Structural similarity index (Wang et al. 2004) between two
/// equally-sized frames, using the default 7x7 Gaussian window.
///
/// Identical inputs yield exactly 1. Fails with `DimensionMismatch`
/// before any computation if the shapes differ.
pub fn ssim(a: &Frame, b: &Frame) -> Result<f64> {
    super::check_dimensions(&a.data, &b.data)?;
    Ok(ssim_array(&a.data, &b.data, SSIM_WINDOW_SIZE))
}

/// SSIM over raw arrays with a configurable (odd) window side length.
/// Caller guarantees matching shapes.
///
/// Local statistics are taken under a Gaussian weighting
/// (sigma = `SSIM_GAUSSIAN_SIGMA`) with clamp-to-edge borders, the
/// per-window SSIM values are averaged over the whole image. The
/// stabilization constants are C1 = (K1*L)^2 and C2 = (K2*L)^2 with
/// L = `SSIM_DATA_RANGE`.
pub fn ssim_array(a: &Array2<f32>, b: &Array2<f32>, window: usize) -> f64 {
    let (h, w) = a.dim();
    if h == 0 || w == 0 {
        return 1.0;
    }

    let c1 = (SSIM_K1 * SSIM_DATA_RANGE).powi(2);
    let c2 = (SSIM_K2 * SSIM_DATA_RANGE).powi(2);

    let kernel = gaussian_kernel(window, SSIM_GAUSSIAN_SIGMA);

    let af = a.mapv(|v| v as f64);
    let bf = b.mapv(|v| v as f64);

    let mu_a = gaussian_filter(&af, &kernel);
    let mu_b = gaussian_filter(&bf, &kernel);
    let mu_aa = gaussian_filter(&(&af * &af), &kernel);
    let mu_bb = gaussian_filter(&(&bf * &bf), &kernel);
    let mu_ab = gaussian_filter(&(&af * &bf), &kernel);

    let mut sum = 0.0f64;
    for row in 0..h {
        for col in 0..w {
            let ma = mu_a[[row, col]];
            let mb = mu_b[[row, col]];
            let var_a = mu_aa[[row, col]] - ma * ma;
            let var_b = mu_bb[[row, col]] - mb * mb;
            let cov = mu_ab[[row, col]] - ma * mb;

            let numerator = (2.0 * ma * mb + c1) * (2.0 * cov + c2);
            let denominator = (ma * ma + mb * mb + c1) * (var_a + var_b + c2);
            sum += numerator / denominator;
        }
    }

    sum / (h * w) as f64
}

/// Normalized 1D Gaussian kernel of the given (odd) size.
fn gaussian_kernel(size: usize, sigma: f64) -> Vec<f64> {
    let size = size.max(1) | 1; // force odd
    let radius = size / 2;
    let s2 = 2.0 * sigma * sigma;
    let mut kernel = vec![0.0f64; size];
    let mut sum = 0.0f64;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f64 - radius as f64;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

/// Separable Gaussian filtering with clamp-to-edge borders.
fn gaussian_filter(data: &Array2<f64>, kernel: &[f64]) -> Array2<f64> {
    let row_pass = convolve_rows(data, kernel);
    convolve_cols(&row_pass, kernel)
}

fn convolve_rows(data: &Array2<f64>, kernel: &[f64]) -> Array2<f64> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<f64>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0.0f64;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_col = (col as isize + ki as isize - radius as isize)
                    .clamp(0, w as isize - 1) as usize;
                sum += data[[row, src_col]] * kv;
            }
            result[[row, col]] = sum;
        }
    }

    result
}

fn convolve_cols(data: &Array2<f64>, kernel: &[f64]) -> Array2<f64> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<f64>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0.0f64;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_row = (row as isize + ki as isize - radius as isize)
                    .clamp(0, h as isize - 1) as usize;
                sum += data[[src_row, col]] * kv;
            }
            result[[row, col]] = sum;
        }
    }

    result
}
