pub mod compare;
pub mod discover;
pub mod metrics;
pub mod render;
