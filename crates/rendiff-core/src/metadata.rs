use std::path::{Path, PathBuf};

use crate::consts::{RESULTS_TREE_MARKER, VERSION_SEPARATOR};
use crate::error::{RendiffError, Result};

/// The two renderer versions under comparison, parsed from a
/// `orig_VS_test` label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionPair {
    pub original: String,
    pub test: String,
}

impl VersionPair {
    /// Parse a comparison label like `v5.2_VS_v5.3`.
    pub fn parse(label: &str) -> Result<Self> {
        let mut parts = label.splitn(2, VERSION_SEPARATOR);
        match (parts.next(), parts.next()) {
            (Some(original), Some(test)) if !original.is_empty() && !test.is_empty() => {
                Ok(Self {
                    original: original.to_string(),
                    test: test.to_string(),
                })
            }
            _ => Err(RendiffError::InvalidVersionLabel(label.to_string())),
        }
    }

    pub fn label(&self) -> String {
        format!("{}{}{}", self.original, VERSION_SEPARATOR, self.test)
    }
}

/// Event metadata derived from the directory hierarchy below the
/// results root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventInfo {
    pub event_name: String,
    pub sport_type: String,
    pub stadium_name: String,
    pub category_name: String,
}

impl EventInfo {
    /// Derive event metadata from the path below the results tree
    /// marker. The number of path segments encodes the layout:
    /// 5 = event only, 6 = sport/event, 7 = sport/stadium/event,
    /// 8+ = sport/stadium/category/event. Anything shallower yields
    /// empty fields.
    pub fn from_result_path(result_folder: &Path) -> Self {
        let path_str = result_folder.to_string_lossy().replace('\\', "/");
        let Some((_, below)) = path_str.split_once(RESULTS_TREE_MARKER) else {
            return Self::default();
        };

        let segments: Vec<&str> = below.split('/').filter(|s| !s.is_empty()).collect();
        let mut info = Self::default();

        match segments.len() {
            0..=4 => {}
            5 => {
                info.event_name = segments[0].to_string();
            }
            6 => {
                info.sport_type = segments[0].to_string();
                info.event_name = segments[1].to_string();
            }
            7 => {
                info.sport_type = segments[0].to_string();
                info.stadium_name = segments[1].to_string();
                info.event_name = segments[2].to_string();
            }
            _ => {
                info.sport_type = segments[0].to_string();
                info.stadium_name = segments[1].to_string();
                info.category_name = segments[2].to_string();
                info.event_name = segments[3].to_string();
            }
        }

        info
    }
}

/// Immutable per-sequence metadata, computed once and shared read-only
/// across all workers processing the sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceMetadata {
    pub source_path: PathBuf,
    pub test_path: PathBuf,
    pub diff_path: PathBuf,
    pub alpha_path: PathBuf,
    pub versions: VersionPair,
    pub event: EventInfo,
    pub start_frame: u32,
    pub end_frame: u32,
}
