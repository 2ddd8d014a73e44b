//! Core domain logic for the work-hours reporter.
//!
//! This crate contains the fundamental types and logic for:
//! - Clock arithmetic: `HHhMM` parsing and wraparound-corrected durations
//! - Watermark resolution: dropping lines a previous report already covered
//! - The report machine: the date/start/stop state machine over log lines

pub mod clock;
pub mod keyword;
pub mod report;
pub mod watermark;

pub use keyword::Keyword;
pub use report::{ReportError, Reporter, State, Totals};
pub use watermark::{CHECKPOINT, Unreported};
