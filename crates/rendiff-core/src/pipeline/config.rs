use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_WORKER_COUNT, SSIM_WINDOW_SIZE};
use crate::diagnostic::DiffColormap;
use crate::error::{RendiffError, Result};

/// Comparison options, validated once at startup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Number of comparison worker threads per sequence.
    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    /// SSIM window side length. Must be odd and at least 3.
    #[serde(default = "default_ssim_window")]
    pub ssim_window: usize,

    /// Threshold the alpha mask with Otsu's method; a fixed midpoint
    /// threshold is used when disabled.
    #[serde(default = "default_otsu_enabled")]
    pub otsu_enabled: bool,

    /// Colormap for the false-color diff images.
    #[serde(default)]
    pub diff_colormap: DiffColormap,
}

fn default_worker_count() -> usize {
    DEFAULT_WORKER_COUNT
}

fn default_ssim_window() -> usize {
    SSIM_WINDOW_SIZE
}

fn default_otsu_enabled() -> bool {
    true
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            worker_count: default_worker_count(),
            ssim_window: default_ssim_window(),
            otsu_enabled: default_otsu_enabled(),
            diff_colormap: DiffColormap::default(),
        }
    }
}

impl CompareConfig {
    pub fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            return Err(RendiffError::InvalidConfig(
                "worker_count must be at least 1".to_string(),
            ));
        }
        if self.ssim_window < 3 || self.ssim_window % 2 == 0 {
            return Err(RendiffError::InvalidConfig(format!(
                "ssim_window must be odd and at least 3, got {}",
                self.ssim_window
            )));
        }
        Ok(())
    }
}
