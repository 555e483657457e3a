pub mod consts;
pub mod diagnostic;
pub mod discover;
pub mod error;
pub mod frame;
pub mod io;
pub mod metadata;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod runner;
