use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use crate::discover::frame_stem;
use crate::error::Result;
use crate::frame::ComparisonResult;
use crate::metadata::SequenceMetadata;

/// One frame entry in the report: the frame index and its SSIM score.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameValue {
    pub frame_index: u32,
    pub value: f64,
}

/// The single externally visible artifact per sequence. Built once,
/// written once, never mutated after emission.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportDocument {
    pub metadata: SequenceMetadata,
    /// Minimum SSIM across Ok results; `None` when zero frames succeeded.
    pub min_val: Option<f64>,
    /// Maximum SSIM across Ok results; `None` when zero frames succeeded.
    pub max_val: Option<f64>,
    /// Ok-frame SSIM values, sorted ascending by frame index.
    pub frames: Vec<FrameValue>,
}

/// Collect per-frame results into one ordered report.
///
/// Results may arrive in any order from concurrent workers; they are
/// re-sorted by frame index here so the emitted document is
/// deterministic regardless of scheduling.
pub fn aggregate(metadata: SequenceMetadata, results: &[ComparisonResult]) -> ReportDocument {
    let mut frames: Vec<FrameValue> = results
        .iter()
        .filter_map(|r| {
            r.ssim().map(|value| FrameValue {
                frame_index: r.frame_index,
                value,
            })
        })
        .collect();
    frames.sort_by_key(|f| f.frame_index);

    let min_val = frames.iter().map(|f| f.value).min_by(f64::total_cmp);
    let max_val = frames.iter().map(|f| f.value).max_by(f64::total_cmp);

    ReportDocument {
        metadata,
        min_val,
        max_val,
        frames,
    }
}

impl ReportDocument {
    /// Serialize to the compareResult.xml wire format.
    ///
    /// Field names and ordering are a compatibility surface; see
    /// `to_xml` for the exact layout.
    pub fn write_xml(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_xml())?;
        info!(path = %path.display(), "XML report written");
        Ok(())
    }

    /// Render the document as a tab-indented XML string.
    pub fn to_xml(&self) -> String {
        let meta = &self.metadata;
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        out.push_str("<root>\n");

        push_element(&mut out, 1, "sourcePath", &path_text(&meta.source_path));
        push_element(&mut out, 1, "testPath", &path_text(&meta.test_path));
        push_element(&mut out, 1, "diffPath", &path_text(&meta.diff_path));
        push_element(&mut out, 1, "alphaPath", &path_text(&meta.alpha_path));
        push_element(&mut out, 1, "origFreeDView", &meta.versions.original);
        push_element(&mut out, 1, "testFreedview", &meta.versions.test);
        push_element(&mut out, 1, "eventName", &meta.event.event_name);
        push_element(&mut out, 1, "sportType", &meta.event.sport_type);
        push_element(&mut out, 1, "stadiumName", &meta.event.stadium_name);
        push_element(&mut out, 1, "categoryName", &meta.event.category_name);
        push_element(&mut out, 1, "startFrame", &frame_stem(meta.start_frame));
        push_element(&mut out, 1, "endFrame", &frame_stem(meta.end_frame));
        push_element(&mut out, 1, "minVal", &optional_value(self.min_val));
        push_element(&mut out, 1, "maxVal", &optional_value(self.max_val));

        out.push_str("\t<frames>\n");
        for frame in &self.frames {
            out.push_str("\t\t<frame>\n");
            push_element(&mut out, 3, "frameIndex", &frame.frame_index.to_string());
            push_element(&mut out, 3, "value", &frame.value.to_string());
            out.push_str("\t\t</frame>\n");
        }
        out.push_str("\t</frames>\n");

        out.push_str("</root>\n");
        out
    }
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Absent min/max is rendered as an empty element, never a misleading 0.
fn optional_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn push_element(out: &mut String, depth: usize, name: &str, text: &str) {
    let indent = "\t".repeat(depth);
    if text.is_empty() {
        let _ = writeln!(out, "{indent}<{name}/>");
    } else {
        let _ = writeln!(out, "{indent}<{name}>{}</{name}>", escape_text(text));
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
