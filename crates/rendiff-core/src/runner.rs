use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::Result;

/// Captured output of one external renderer invocation.
///
/// A non-zero exit code is data for the caller to interpret, not an
/// error; only failure to spawn the process is.
#[derive(Clone, Debug)]
pub struct RendererInvocation {
    /// Process exit code; `None` if terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RendererInvocation {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Invoke the external renderer and capture its output.
///
/// The core never depends on the renderer's internals, only on the
/// frame files it leaves behind.
pub fn invoke(executable: &Path, args: &[String]) -> Result<RendererInvocation> {
    info!(
        executable = %executable.display(),
        args = args.len(),
        "Invoking renderer"
    );

    let output = Command::new(executable).args(args).output()?;

    let invocation = RendererInvocation {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    if !invocation.success() {
        debug!(
            exit_code = ?invocation.exit_code,
            stderr = %invocation.stderr.trim(),
            "renderer exited with failure"
        );
    }

    Ok(invocation)
}
