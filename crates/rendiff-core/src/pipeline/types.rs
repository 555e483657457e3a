/// Comparison pipeline stage, used for progress reporting.
#[derive(Clone, Copy, Debug)]
pub enum CompareStage {
    Discovery,
    Comparing,
    Reporting,
}

impl std::fmt::Display for CompareStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discovery => write!(f, "Pairing frames"),
            Self::Comparing => write!(f, "Comparing frames"),
            Self::Reporting => write!(f, "Writing report"),
        }
    }
}

/// Thread-safe progress reporting for a sequence run.
///
/// Implementors can use this to drive progress bars, logging, or any
/// other UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (attempted frame pairs), if known.
    fn begin_stage(&self, _stage: CompareStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed, whatever
    /// its outcome.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_sequence` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
