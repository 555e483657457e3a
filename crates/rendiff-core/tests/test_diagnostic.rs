mod common;

use approx::assert_abs_diff_eq;
use common::{frame_from_fn, gradient_frame, solid_frame};
use rendiff_core::diagnostic::alpha::dilate;
use rendiff_core::diagnostic::threshold::{binarize, otsu_threshold};
use rendiff_core::diagnostic::{difference_map, render_alpha, render_diff, DiffColormap};
use rendiff_core::error::RendiffError;

#[test]
fn test_difference_map_is_absolute() {
    let a = solid_frame(8, 8, 0.2);
    let b = solid_frame(8, 8, 0.7);

    let ab = difference_map(&a, &b).unwrap();
    let ba = difference_map(&b, &a).unwrap();
    for (&x, &y) in ab.iter().zip(ba.iter()) {
        assert_abs_diff_eq!(x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(x, y, epsilon = 1e-6);
    }
}

#[test]
fn test_difference_map_rejects_mismatched_dimensions() {
    let a = solid_frame(8, 8, 0.2);
    let b = solid_frame(8, 9, 0.2);
    assert!(matches!(
        difference_map(&a, &b),
        Err(RendiffError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_hot_colormap_endpoints_and_monotonicity() {
    let cmap = DiffColormap::Hot;

    assert_eq!(cmap.map(0.0), (0.0, 0.0, 0.0), "zero difference is black");
    assert_eq!(cmap.map(1.0), (1.0, 1.0, 1.0), "max difference is white");

    // Luminance must never decrease as the difference grows.
    let mut prev = -1.0f32;
    for step in 0..=100 {
        let (r, g, b) = cmap.map(step as f32 / 100.0);
        let luminance = 0.299 * r + 0.587 * g + 0.114 * b;
        assert!(
            luminance >= prev,
            "luminance decreased at step {step}: {luminance} < {prev}"
        );
        prev = luminance;
    }
}

#[test]
fn test_render_diff_uniform_shift_gives_uniform_color() {
    let a = gradient_frame(16, 16);
    let b = frame_from_fn(16, 16, |row, col| a.data[[row, col]] * 0.5);

    let diff = render_diff(&a, &b, DiffColormap::Grayscale).unwrap();
    assert_eq!(diff.width(), 16);
    assert_eq!(diff.height(), 16);
    // Grayscale colormap keeps all channels equal to the difference.
    for row in 0..16 {
        for col in 0..16 {
            let expected = (a.data[[row, col]] - b.data[[row, col]]).abs();
            assert_abs_diff_eq!(diff.red.data[[row, col]], expected, epsilon = 1e-6);
            assert_abs_diff_eq!(diff.green.data[[row, col]], expected, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_otsu_is_deterministic() {
    let data = gradient_frame(32, 32).data;
    let t1 = otsu_threshold(&data);
    let t2 = otsu_threshold(&data);
    assert_eq!(t1, t2);
}

#[test]
fn test_otsu_separates_bimodal_data() {
    // Half the pixels at 0.1, half at 0.9.
    let frame = frame_from_fn(16, 16, |row, _| if row < 8 { 0.1 } else { 0.9 });
    let threshold = otsu_threshold(&frame.data);
    assert!(
        threshold > 0.1 && threshold < 0.9,
        "threshold {threshold} must separate the two modes"
    );

    let mask = binarize(&frame.data, threshold);
    for row in 0..16 {
        for col in 0..16 {
            assert_eq!(mask[[row, col]], row >= 8);
        }
    }
}

#[test]
fn test_alpha_mask_for_identical_frames_is_empty() {
    let a = gradient_frame(16, 16);
    let mask = render_alpha(&a, &a.clone(), true).unwrap();
    assert!(mask.iter().all(|&v| !v), "no difference, no set pixels");
}

#[test]
fn test_alpha_mask_marks_changed_region() {
    let a = solid_frame(20, 20, 0.2);
    // A solid-shifted copy differs everywhere.
    let b = solid_frame(20, 20, 0.6);
    let mask = render_alpha(&a, &b, true).unwrap();
    assert!(mask.iter().all(|&v| v), "uniform shift sets the whole mask");
}

#[test]
fn test_dilate_grows_single_pixel_to_kernel_footprint() {
    let mut mask = ndarray::Array2::from_elem((9, 9), false);
    mask[[4, 4]] = true;

    let grown = dilate(&mask, 2);
    let set = grown.iter().filter(|&&v| v).count();
    assert_eq!(set, 25, "radius-2 dilation of one pixel is a 5x5 block");
    assert!(grown[[2, 2]] && grown[[6, 6]]);
    assert!(!grown[[1, 4]] && !grown[[4, 1]]);
}
