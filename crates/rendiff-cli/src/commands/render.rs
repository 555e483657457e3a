use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rendiff_core::runner;

#[derive(Args)]
pub struct RenderArgs {
    /// Renderer executable
    pub executable: PathBuf,

    /// Arguments forwarded to the renderer
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let invocation = runner::invoke(&args.executable, &args.args)?;

    if !invocation.stdout.is_empty() {
        print!("{}", invocation.stdout);
    }
    if !invocation.stderr.is_empty() {
        eprint!("{}", invocation.stderr);
    }

    match invocation.exit_code {
        Some(0) => Ok(()),
        Some(code) => {
            eprintln!("renderer exited with code {code}");
            std::process::exit(code);
        }
        None => {
            eprintln!("renderer terminated by signal");
            std::process::exit(1);
        }
    }
}
