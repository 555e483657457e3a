use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::consts::{ALPHA_IMAGES_FOLDER, COMPARE_RESULT_XML, DIFF_IMAGES_FOLDER, RESULTS_FOLDER};
use crate::diagnostic::{render_alpha, render_diff};
use crate::discover::{discover, frame_stem};
use crate::error::{RendiffError, Result};
use crate::frame::{
    ComparisonResult, Discrepancy, FrameOutcome, FramePair, SkipReason,
};
use crate::io::image_io::{load_luma, save_color_jpeg, save_mask_png};
use crate::metadata::{EventInfo, SequenceMetadata, VersionPair};
use crate::metrics;
use crate::report::{aggregate, ReportDocument};

use super::config::CompareConfig;
use super::types::{CompareStage, NoOpReporter, ProgressReporter};

/// Everything needed to compare one sequence: the two frame
/// directories, the frame range, and where results go.
#[derive(Clone, Debug)]
pub struct SequenceSpec {
    pub original_dir: PathBuf,
    pub test_dir: PathBuf,
    /// Directory under which `results/` is created.
    pub output_root: PathBuf,
    pub versions: VersionPair,
    /// Event metadata; derived from the output path when absent.
    pub event: Option<EventInfo>,
    pub start_frame: u32,
    pub end_frame: u32,
}

/// Outcome of one sequence run: the emitted report plus per-frame
/// accounting for callers that want to surface skips and gaps.
#[derive(Clone, Debug)]
pub struct SequenceOutcome {
    pub report: ReportDocument,
    pub results: Vec<ComparisonResult>,
    pub discrepancies: Vec<Discrepancy>,
    pub xml_path: PathBuf,
}

impl SequenceOutcome {
    pub fn attempted(&self) -> usize {
        self.results.len()
    }

    pub fn ok_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_ok()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.results.len() - self.ok_count()
    }
}

/// Run one sequence comparison without progress reporting.
pub fn run_sequence(config: &CompareConfig, spec: &SequenceSpec) -> Result<SequenceOutcome> {
    run_sequence_reported(config, spec, Arc::new(NoOpReporter))
}

/// Run one sequence comparison with a thread-safe progress reporter.
///
/// Frame-scoped failures become `Skipped` results and never abort
/// sibling workers. Sequence-scoped failures (output directories not
/// writable, report not writable) propagate to the caller.
pub fn run_sequence_reported(
    config: &CompareConfig,
    spec: &SequenceSpec,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<SequenceOutcome> {
    config.validate()?;

    let results_dir = spec.output_root.join(RESULTS_FOLDER);
    let diff_dir = results_dir.join(DIFF_IMAGES_FOLDER);
    let alpha_dir = results_dir.join(ALPHA_IMAGES_FOLDER);
    std::fs::create_dir_all(&diff_dir)?;
    std::fs::create_dir_all(&alpha_dir)?;

    reporter.begin_stage(CompareStage::Discovery, None);
    let (pairs, discrepancies) = discover(
        &spec.original_dir,
        &spec.test_dir,
        spec.start_frame,
        spec.end_frame,
    )?;
    reporter.finish_stage();

    for discrepancy in &discrepancies {
        warn!(%discrepancy, "pairing discrepancy");
    }
    info!(
        pairs = pairs.len(),
        missing = discrepancies.len(),
        workers = config.worker_count,
        "Comparing sequence"
    );

    let metadata = SequenceMetadata {
        source_path: spec.original_dir.clone(),
        test_path: spec.test_dir.clone(),
        diff_path: diff_dir.clone(),
        alpha_path: alpha_dir.clone(),
        versions: spec.versions.clone(),
        event: spec
            .event
            .clone()
            .unwrap_or_else(|| EventInfo::from_result_path(&results_dir)),
        start_frame: spec.start_frame,
        end_frame: spec.end_frame,
    };

    reporter.begin_stage(CompareStage::Comparing, Some(pairs.len()));
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_count)
        .build()
        .map_err(|e| RendiffError::WorkerPool(e.to_string()))?;

    let done = AtomicUsize::new(0);
    let mut results: Vec<ComparisonResult> = pool.install(|| {
        pairs
            .par_iter()
            .map(|pair| {
                let result = compare_pair(pair, config, &diff_dir, &alpha_dir);
                let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
                reporter.advance(completed);
                result
            })
            .collect()
    });
    reporter.finish_stage();

    // Completion order is nondeterministic; the report must not be.
    results.sort_by_key(|r| r.frame_index);

    reporter.begin_stage(CompareStage::Reporting, None);
    let report = aggregate(metadata, &results);
    let xml_path = results_dir.join(COMPARE_RESULT_XML);
    report.write_xml(&xml_path)?;
    reporter.finish_stage();

    info!(
        ok = results.iter().filter(|r| r.is_ok()).count(),
        skipped = results.iter().filter(|r| !r.is_ok()).count(),
        missing = discrepancies.len(),
        "Sequence complete"
    );

    Ok(SequenceOutcome {
        report,
        results,
        discrepancies,
        xml_path,
    })
}

/// Compare several independent sequences concurrently on an outer
/// worker pool. Per-sequence failures are isolated; the returned list
/// matches the input order.
pub fn run_batch(
    config: &CompareConfig,
    specs: &[SequenceSpec],
) -> Result<Vec<Result<SequenceOutcome>>> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_count)
        .build()
        .map_err(|e| RendiffError::WorkerPool(e.to_string()))?;

    let outcomes = pool.install(|| {
        specs
            .par_iter()
            .map(|spec| {
                let outcome = run_sequence(config, spec);
                if let Err(ref e) = outcome {
                    warn!(
                        output_root = %spec.output_root.display(),
                        error = %e,
                        "sequence failed"
                    );
                }
                outcome
            })
            .collect()
    });

    Ok(outcomes)
}

/// Compare one frame pair end to end: load, validate, measure, render
/// diagnostics, write artifacts.
///
/// This is the worker boundary: every frame-scoped error is converted
/// into a `Skipped` outcome here and logged, never propagated.
fn compare_pair(
    pair: &FramePair,
    config: &CompareConfig,
    diff_dir: &Path,
    alpha_dir: &Path,
) -> ComparisonResult {
    let outcome = compare_pair_inner(pair, config, diff_dir, alpha_dir);
    if let FrameOutcome::Skipped(ref reason) = outcome {
        warn!(frame_index = pair.frame_index, %reason, "frame skipped");
    }
    ComparisonResult {
        frame_index: pair.frame_index,
        outcome,
    }
}

fn compare_pair_inner(
    pair: &FramePair,
    config: &CompareConfig,
    diff_dir: &Path,
    alpha_dir: &Path,
) -> FrameOutcome {
    let original = match load_luma(&pair.original_path) {
        Ok(frame) => frame,
        Err(e) => return FrameOutcome::Skipped(skip_reason(e)),
    };
    let test = match load_luma(&pair.test_path) {
        Ok(frame) => frame,
        Err(e) => return FrameOutcome::Skipped(skip_reason(e)),
    };

    if original.data.dim() != test.data.dim() {
        return FrameOutcome::Skipped(SkipReason::DimensionMismatch {
            expected: (original.width(), original.height()),
            actual: (test.width(), test.height()),
        });
    }

    let metrics = match metrics::compare_with_window(&original, &test, config.ssim_window) {
        Ok(m) => m,
        Err(e) => return FrameOutcome::Skipped(skip_reason(e)),
    };

    let stem = frame_stem(pair.frame_index);
    let diff_path = diff_dir.join(format!("{stem}.jpg"));
    let alpha_path = alpha_dir.join(format!("{stem}.png"));

    let diff = match render_diff(&original, &test, config.diff_colormap) {
        Ok(d) => d,
        Err(e) => return FrameOutcome::Skipped(skip_reason(e)),
    };
    if let Err(e) = save_color_jpeg(&diff, &diff_path) {
        return FrameOutcome::Skipped(skip_reason(e));
    }

    let mask = match render_alpha(&original, &test, config.otsu_enabled) {
        Ok(m) => m,
        Err(e) => return FrameOutcome::Skipped(skip_reason(e)),
    };
    if let Err(e) = save_mask_png(&mask, &alpha_path) {
        return FrameOutcome::Skipped(skip_reason(e));
    }

    FrameOutcome::Ok {
        metrics,
        diff_path,
        alpha_path,
    }
}

/// Classify a frame-scoped error for accounting.
fn skip_reason(error: RendiffError) -> SkipReason {
    match error {
        RendiffError::Io(e) => SkipReason::Io(e.to_string()),
        RendiffError::Image(e) => SkipReason::Decode(e.to_string()),
        RendiffError::DimensionMismatch {
            expected_width,
            expected_height,
            actual_width,
            actual_height,
        } => SkipReason::DimensionMismatch {
            expected: (expected_width, expected_height),
            actual: (actual_width, actual_height),
        },
        other => SkipReason::Decode(other.to_string()),
    }
}
