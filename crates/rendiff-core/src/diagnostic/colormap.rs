use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::frame::{ColorFrame, Frame};

/// Colormap applied to the absolute-difference map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum DiffColormap {
    /// Black -> red -> yellow -> white ramp, monotonic in luminance.
    #[default]
    Hot,
    /// Identity mapping, all three channels equal to the difference.
    Grayscale,
}

impl std::fmt::Display for DiffColormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hot => write!(f, "Hot"),
            Self::Grayscale => write!(f, "Grayscale"),
        }
    }
}

impl DiffColormap {
    /// Map a scalar field in [0, 1] to an RGB `ColorFrame`.
    pub fn apply(&self, data: &Array2<f32>, bit_depth: u8) -> ColorFrame {
        let (h, w) = data.dim();
        let mut red = Array2::<f32>::zeros((h, w));
        let mut green = Array2::<f32>::zeros((h, w));
        let mut blue = Array2::<f32>::zeros((h, w));

        for row in 0..h {
            for col in 0..w {
                let (r, g, b) = self.map(data[[row, col]].clamp(0.0, 1.0));
                red[[row, col]] = r;
                green[[row, col]] = g;
                blue[[row, col]] = b;
            }
        }

        ColorFrame {
            red: Frame::new(red, bit_depth),
            green: Frame::new(green, bit_depth),
            blue: Frame::new(blue, bit_depth),
        }
    }

    /// Map one intensity in [0, 1] to RGB in [0, 1].
    pub fn map(&self, v: f32) -> (f32, f32, f32) {
        match self {
            // Three linear phases: red ramps over [0, 3/8), green over
            // [3/8, 3/4), blue over [3/4, 1], matching the classic
            // "hot" colormap.
            Self::Hot => {
                let r = (v * 8.0 / 3.0).min(1.0);
                let g = ((v - 3.0 / 8.0) * 8.0 / 3.0).clamp(0.0, 1.0);
                let b = ((v - 3.0 / 4.0) * 4.0).clamp(0.0, 1.0);
                (r, g, b)
            }
            Self::Grayscale => (v, v, v),
        }
    }
}
