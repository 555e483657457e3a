use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rendiff_core::discover::discover;

#[derive(Args)]
pub struct DiscoverArgs {
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

    /// Print every pair instead of a summary
    #[arg(long)]
    pub list: bool,
}

pub fn run(args: &DiscoverArgs) -> Result<()> {
    let (pairs, discrepancies) = discover(&args.original, &args.test, args.start, args.end)?;

    if args.list {
        println!("{:>8}  {:<40}  {:<40}", "Frame", "Original", "Test");
        println!("{}", "-".repeat(92));
        for pair in &pairs {
            println!(
                "{:>8}  {:<40}  {:<40}",
                format!("{:04}", pair.frame_index),
                pair.original_path.display(),
                pair.test_path.display()
            );
        }
        println!();
    }

    println!(
        "Range [{:04}, {:04}]: {} paired, {} missing",
        args.start,
        args.end,
        pairs.len(),
        discrepancies.len()
    );
    for discrepancy in &discrepancies {
        println!("  {discrepancy}");
    }

    Ok(())
}
