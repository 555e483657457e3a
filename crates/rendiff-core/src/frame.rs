use std::path::PathBuf;

use ndarray::Array2;

/// A single grayscale image frame.
/// Pixel values are f32 in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Original bit depth before conversion (8 or 16)
    pub original_bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array2<f32>, bit_depth: u8) -> Self {
        Self {
            data,
            original_bit_depth: bit_depth,
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// Color image composed of separate channel frames.
#[derive(Clone, Debug)]
pub struct ColorFrame {
    pub red: Frame,
    pub green: Frame,
    pub blue: Frame,
}

impl ColorFrame {
    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }
}

/// One frame index paired across the original and test render trees.
///
/// Created by discovery and consumed exactly once by a comparison worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramePair {
    pub frame_index: u32,
    pub original_path: PathBuf,
    pub test_path: PathBuf,
}

/// Similarity metrics for one comparable frame pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMetrics {
    /// Mean squared error; 0 for identical images.
    pub mse: f64,
    /// Structural similarity; 1 for identical images.
    pub ssim: f64,
}

/// Why a frame was skipped rather than compared.
#[derive(Clone, Debug, PartialEq)]
pub enum SkipReason {
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    Decode(String),
    Io(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "dimension mismatch: {}x{} vs {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::Decode(msg) => write!(f, "decode failure: {msg}"),
            Self::Io(msg) => write!(f, "I/O failure: {msg}"),
        }
    }
}

/// What happened to one attempted frame pair.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    Ok {
        metrics: FrameMetrics,
        diff_path: PathBuf,
        alpha_path: PathBuf,
    },
    Skipped(SkipReason),
}

/// Result of one frame comparison, produced exactly once per attempted
/// pair. Owned by the worker until handed to the aggregator.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonResult {
    pub frame_index: u32,
    pub outcome: FrameOutcome,
}

impl ComparisonResult {
    /// SSIM value, if the frame compared successfully.
    pub fn ssim(&self) -> Option<f64> {
        match &self.outcome {
            FrameOutcome::Ok { metrics, .. } => Some(metrics.ssim),
            FrameOutcome::Skipped(_) => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, FrameOutcome::Ok { .. })
    }
}

/// Which side of a pairing a frame was missing from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Original,
    Test,
    Both,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Test => write!(f, "test"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// A pairing problem found during discovery. Discrepancies are reported
/// but never abort discovery for the remaining frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Discrepancy {
    MissingFrame { frame_index: u32, side: Side },
}

impl std::fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFrame { frame_index, side } => {
                write!(f, "frame {frame_index:04} missing on {side} side")
            }
        }
    }
}
