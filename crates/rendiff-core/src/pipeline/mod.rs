pub mod config;
mod orchestrator;
pub mod types;

pub use config::CompareConfig;
pub use orchestrator::{run_batch, run_sequence, run_sequence_reported, SequenceOutcome, SequenceSpec};
pub use types::{CompareStage, ProgressReporter};
