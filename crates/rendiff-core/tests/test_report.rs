use std::path::PathBuf;

use rendiff_core::frame::{
    ComparisonResult, FrameMetrics, FrameOutcome, SkipReason,
};
use rendiff_core::metadata::{EventInfo, SequenceMetadata, VersionPair};
use rendiff_core::report::aggregate;

fn metadata() -> SequenceMetadata {
    SequenceMetadata {
        source_path: PathBuf::from("/sets/orig"),
        test_path: PathBuf::from("/sets/test"),
        diff_path: PathBuf::from("/out/results/diff_images"),
        alpha_path: PathBuf::from("/out/results/alpha_images"),
        versions: VersionPair::parse("v1_VS_v2").unwrap(),
        event: EventInfo {
            event_name: "final".to_string(),
            sport_type: "soccer".to_string(),
            stadium_name: String::new(),
            category_name: String::new(),
        },
        start_frame: 100,
        end_frame: 103,
    }
}

fn ok_result(frame_index: u32, ssim: f64) -> ComparisonResult {
    ComparisonResult {
        frame_index,
        outcome: FrameOutcome::Ok {
            metrics: FrameMetrics { mse: 0.01, ssim },
            diff_path: PathBuf::from(format!("/out/diff/{frame_index:04}.jpg")),
            alpha_path: PathBuf::from(format!("/out/alpha/{frame_index:04}.png")),
        },
    }
}

fn skipped_result(frame_index: u32) -> ComparisonResult {
    ComparisonResult {
        frame_index,
        outcome: FrameOutcome::Skipped(SkipReason::Decode("truncated".to_string())),
    }
}

#[test]
fn test_aggregate_sorts_by_frame_index() {
    // Arrival order from concurrent workers is arbitrary.
    let results = vec![ok_result(103, 0.8), ok_result(100, 0.9), ok_result(102, 0.7)];
    let report = aggregate(metadata(), &results);

    let indices: Vec<u32> = report.frames.iter().map(|f| f.frame_index).collect();
    assert_eq!(indices, vec![100, 102, 103]);
}

#[test]
fn test_min_max_cover_ok_results_only() {
    let results = vec![
        ok_result(100, 0.9),
        skipped_result(101),
        ok_result(102, 0.4),
        ok_result(103, 0.7),
    ];
    let report = aggregate(metadata(), &results);

    assert_eq!(report.min_val, Some(0.4));
    assert_eq!(report.max_val, Some(0.9));
    assert_eq!(report.frames.len(), 3, "skipped frames carry no value");
}

#[test]
fn test_zero_ok_results_yield_absent_min_max() {
    let results = vec![skipped_result(100), skipped_result(101)];
    let report = aggregate(metadata(), &results);

    assert_eq!(report.min_val, None);
    assert_eq!(report.max_val, None);
    assert!(report.frames.is_empty());

    // Absent, never a misleading 0.
    let xml = report.to_xml();
    assert!(xml.contains("<minVal/>"));
    assert!(xml.contains("<maxVal/>"));
    assert!(!xml.contains("<minVal>0</minVal>"));
}

#[test]
fn test_xml_field_names_and_order() {
    let results = vec![ok_result(100, 0.5), ok_result(101, 0.6)];
    let report = aggregate(metadata(), &results);
    let xml = report.to_xml();

    // The schema is a compatibility surface: exact names, fixed order.
    let fields = [
        "<sourcePath>",
        "<testPath>",
        "<diffPath>",
        "<alphaPath>",
        "<origFreeDView>",
        "<testFreedview>",
        "<eventName>",
        "<sportType>",
        "<stadiumName",
        "<categoryName",
        "<startFrame>",
        "<endFrame>",
        "<minVal>",
        "<maxVal>",
        "<frames>",
    ];
    let mut last = 0;
    for field in fields {
        let pos = xml.find(field).unwrap_or_else(|| panic!("missing {field}"));
        assert!(pos > last, "{field} out of order");
        last = pos;
    }

    assert!(xml.contains("<origFreeDView>v1</origFreeDView>"));
    assert!(xml.contains("<testFreedview>v2</testFreedview>"));
    assert!(xml.contains("<startFrame>0100</startFrame>"));
    assert!(xml.contains("<endFrame>0103</endFrame>"));
    assert!(xml.contains("<frameIndex>100</frameIndex>"));
    assert!(xml.contains("<value>0.5</value>"));
}

#[test]
fn test_xml_escapes_text_content() {
    let mut meta = metadata();
    meta.event.event_name = "cup<final> & more".to_string();
    let report = aggregate(meta, &[ok_result(100, 0.5)]);
    let xml = report.to_xml();

    assert!(xml.contains("<eventName>cup&lt;final&gt; &amp; more</eventName>"));
}

#[test]
fn test_write_xml_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("compareResult.xml");
    let report = aggregate(metadata(), &[ok_result(100, 0.5)]);

    report.write_xml(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, report.to_xml());
}
