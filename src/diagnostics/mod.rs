//! Timing and report structures emitted alongside the edge maps.
//!
//! `TimingBreakdown` is filled while a scale runs; `ImageReport` aggregates the
//! per-scale summaries of one input image for the JSON report.

pub mod report;
pub mod timing;

pub use report::{EdgeCount, ImageReport, ScaleReport};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
