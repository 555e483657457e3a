/// SSIM local window side length (Wang et al. 2004). Must be odd.
pub const SSIM_WINDOW_SIZE: usize = 7;

/// Sigma of the Gaussian weighting inside the SSIM window.
pub const SSIM_GAUSSIAN_SIGMA: f64 = 1.5;

/// SSIM luminance stabilization constant factor: C1 = (K1 * L)^2.
pub const SSIM_K1: f64 = 0.01;

/// SSIM contrast stabilization constant factor: C2 = (K2 * L)^2.
pub const SSIM_K2: f64 = 0.03;

/// Dynamic range of pixel values. Frames are normalized f32 in [0, 1].
pub const SSIM_DATA_RANGE: f64 = 1.0;

/// Number of histogram bins for Otsu's thresholding.
pub const OTSU_HISTOGRAM_BINS: usize = 256;

/// Radius of the square dilation kernel applied to the alpha mask
/// (radius 2 = 5x5 kernel).
pub const DILATION_RADIUS: usize = 2;

/// Number of dilation passes applied to the alpha mask.
pub const DILATION_ITERATIONS: usize = 1;

/// Zero-padded width of frame indices in filenames (e.g. `0135.jpg`).
pub const FRAME_INDEX_WIDTH: usize = 4;

/// Image extensions probed during frame discovery, in priority order.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// Default number of comparison worker threads per sequence.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Separator between version names in a comparison label
/// (e.g. `v5.2_VS_v5.3`).
pub const VERSION_SEPARATOR: &str = "_VS_";

/// Directory name under which a results root mirrors the test-set tree.
pub const RESULTS_TREE_MARKER: &str = "testSets_results";

/// Per-sequence output folder names.
pub const RESULTS_FOLDER: &str = "results";
pub const DIFF_IMAGES_FOLDER: &str = "diff_images";
pub const ALPHA_IMAGES_FOLDER: &str = "alpha_images";
pub const COMPARE_RESULT_XML: &str = "compareResult.xml";
