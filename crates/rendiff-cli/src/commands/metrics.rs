use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rendiff_core::io::image_io::load_luma;
use rendiff_core::metrics;

#[derive(Args)]
pub struct MetricsArgs {
    /// Original image
    pub original: PathBuf,

    /// Test image
    pub test: PathBuf,

    /// SSIM window side length (odd, >= 3)
    #[arg(long, default_value = "7")]
    pub window: usize,
}

pub fn run(args: &MetricsArgs) -> Result<()> {
    let original = load_luma(&args.original)?;
    let test = load_luma(&args.test)?;

    let result = metrics::compare_with_window(&original, &test, args.window)?;

    println!("{:<8}{}x{}", "Size", original.width(), original.height());
    println!("{:<8}{:.8}", "MSE", result.mse);
    println!("{:<8}{:.8}", "SSIM", result.ssim);

    Ok(())
}
