use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::{FRAME_INDEX_WIDTH, SUPPORTED_IMAGE_EXTENSIONS};
use crate::error::{RendiffError, Result};
use crate::frame::{Discrepancy, FramePair, Side};

/// Zero-padded frame filename stem, e.g. index 135 -> "0135".
pub fn frame_stem(frame_index: u32) -> String {
    format!("{frame_index:0width$}", width = FRAME_INDEX_WIDTH)
}

/// Probe a directory for a frame image with any supported extension.
fn locate_frame(dir: &Path, frame_index: u32) -> Option<PathBuf> {
    let stem = frame_stem(frame_index);
    for ext in SUPPORTED_IMAGE_EXTENSIONS {
        let candidate = dir.join(format!("{stem}.{ext}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Enumerate the inclusive frame range `[start_frame, end_frame]` in
/// both directories and form validated pairs.
///
/// An index missing on either side is recorded as a `MissingFrame`
/// discrepancy and excluded from the pair list; later indices keep
/// their own numbers, the sequence never collapses or shifts.
pub fn discover(
    original_dir: &Path,
    test_dir: &Path,
    start_frame: u32,
    end_frame: u32,
) -> Result<(Vec<FramePair>, Vec<Discrepancy>)> {
    if start_frame > end_frame {
        return Err(RendiffError::EmptySequence {
            start: start_frame,
            end: end_frame,
        });
    }

    let mut pairs = Vec::with_capacity((end_frame - start_frame + 1) as usize);
    let mut discrepancies = Vec::new();

    for frame_index in start_frame..=end_frame {
        let original = locate_frame(original_dir, frame_index);
        let test = locate_frame(test_dir, frame_index);

        match (original, test) {
            (Some(original_path), Some(test_path)) => pairs.push(FramePair {
                frame_index,
                original_path,
                test_path,
            }),
            (found_orig, found_test) => {
                let side = match (found_orig.is_some(), found_test.is_some()) {
                    (false, true) => Side::Original,
                    (true, false) => Side::Test,
                    _ => Side::Both,
                };
                debug!(frame_index, %side, "missing frame");
                discrepancies.push(Discrepancy::MissingFrame { frame_index, side });
            }
        }
    }

    Ok((pairs, discrepancies))
}
