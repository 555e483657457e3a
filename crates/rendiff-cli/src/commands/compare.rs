use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rendiff_core::diagnostic::DiffColormap;
use rendiff_core::metadata::{EventInfo, VersionPair};
use rendiff_core::pipeline::{
    run_sequence_reported, CompareConfig, CompareStage, ProgressReporter, SequenceSpec,
};

use crate::summary::print_compare_summary;

#[derive(Clone, ValueEnum)]
pub enum ColormapArg {
    Hot,
    Grayscale,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Directory of original-version frames
    pub original: PathBuf,

    /// Directory of test-version frames
    pub test: PathBuf,

    /// First frame index (inclusive)
    #[arg(long)]
    pub start: u32,

    /// Last frame index (inclusive)
    #[arg(long)]
    pub end: u32,

    /// Version comparison label, e.g. v5.2_VS_v5.3
    #[arg(long)]
    pub versions: String,

    /// Directory under which results/ is created
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Comparison config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of comparison worker threads
    #[arg(long, default_value = "4")]
    pub workers: usize,

    /// SSIM window side length (odd, >= 3)
    #[arg(long, default_value = "7")]
    pub window: usize,

    /// Threshold alpha masks with a fixed midpoint instead of Otsu
    #[arg(long)]
    pub no_otsu: bool,

    /// Colormap for diff images
    #[arg(long, value_enum, default_value = "hot")]
    pub colormap: ColormapArg,

    /// Event name for the report
    #[arg(long)]
    pub event: Option<String>,

    /// Sport type for the report
    #[arg(long)]
    pub sport: Option<String>,

    /// Stadium name for the report
    #[arg(long)]
    pub stadium: Option<String>,

    /// Category name for the report
    #[arg(long)]
    pub category: Option<String>,
}

pub fn run(args: &CompareArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid comparison config")?
    } else {
        build_config_from_args(args)
    };

    let versions = VersionPair::parse(&args.versions)?;
    let spec = SequenceSpec {
        original_dir: args.original.clone(),
        test_dir: args.test.clone(),
        output_root: args.output.clone(),
        versions,
        event: build_event_from_args(args),
        start_frame: args.start,
        end_frame: args.end,
    };

    print_compare_summary(&config, &spec);

    let pb = ProgressBar::new((args.end.saturating_sub(args.start) + 1) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:18} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter { pb: pb.clone() });

    let outcome = run_sequence_reported(&config, &spec, reporter)?;
    pb.finish_with_message("Done");

    println!();
    println!(
        "Frames:   {} attempted, {} ok, {} skipped, {} missing",
        outcome.attempted(),
        outcome.ok_count(),
        outcome.skipped_count(),
        outcome.discrepancies.len()
    );
    match (outcome.report.min_val, outcome.report.max_val) {
        (Some(min), Some(max)) => {
            println!("SSIM:     min {min:.6}, max {max:.6}");
        }
        _ => println!("SSIM:     no successful comparisons"),
    }
    println!("Report:   {}", outcome.xml_path.display());

    Ok(())
}

/// Drives the indicatif bar from worker threads.
struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: CompareStage, total_items: Option<usize>) {
        if let Some(total) = total_items {
            self.pb.set_length(total as u64);
            self.pb.set_position(0);
        }
        self.pb.set_message(stage.to_string());
    }

    fn advance(&self, items_done: usize) {
        self.pb.set_position(items_done as u64);
    }
}

fn build_config_from_args(args: &CompareArgs) -> CompareConfig {
    CompareConfig {
        worker_count: args.workers,
        ssim_window: args.window,
        otsu_enabled: !args.no_otsu,
        diff_colormap: match args.colormap {
            ColormapArg::Hot => DiffColormap::Hot,
            ColormapArg::Grayscale => DiffColormap::Grayscale,
        },
    }
}

fn build_event_from_args(args: &CompareArgs) -> Option<EventInfo> {
    if args.event.is_none()
        && args.sport.is_none()
        && args.stadium.is_none()
        && args.category.is_none()
    {
        return None;
    }
    Some(EventInfo {
        event_name: args.event.clone().unwrap_or_default(),
        sport_type: args.sport.clone().unwrap_or_default(),
        stadium_name: args.stadium.clone().unwrap_or_default(),
        category_name: args.category.clone().unwrap_or_default(),
    })
}
