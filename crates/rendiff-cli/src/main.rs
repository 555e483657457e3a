mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rendiff", about = "Render regression comparison tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two rendered frame sequences and write a report
    Compare(commands::compare::CompareArgs),
    /// Compute MSE/SSIM for a single image pair
    Metrics(commands::metrics::MetricsArgs),
    /// List frame pairs and missing frames for a range
    Discover(commands::discover::DiscoverArgs),
    /// Invoke the external renderer and capture its output
    Render(commands::render::RenderArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Compare(args) => commands::compare::run(args),
        Commands::Metrics(args) => commands::metrics::run(args),
        Commands::Discover(args) => commands::discover::run(args),
        Commands::Render(args) => commands::render::run(args),
    }
}
