//! Checkpoint resolution for resumable reports.
//!
//! A report run that the operator has confirmed is sealed by appending a
//! `last:` line to the log. Only the lines after the most recent checkpoint
//! are still unreported; earlier checkpoints are superseded.

/// Sentinel line marking the boundary of already-reported content.
pub const CHECKPOINT: &str = "last:";

/// The portion of a log that has not been reported yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unreported<'a> {
    /// Lines after the most recent checkpoint, in original order.
    pub lines: &'a [&'a str],

    /// Number of leading lines excluded, including the checkpoint itself.
    /// Added to positions within `lines` to recover absolute line numbers.
    pub skipped: usize,
}

/// Drops everything up to and including the most recent checkpoint line.
///
/// A line is a checkpoint when its trimmed text is exactly `last:`. Without
/// any checkpoint the whole input is returned with a skipped count of 0.
#[must_use]
pub fn resolve<'a>(lines: &'a [&'a str]) -> Unreported<'a> {
    match lines.iter().rposition(|line| line.trim() == CHECKPOINT) {
        Some(index) => {
            tracing::debug!(checkpoint_line = index + 1, "resuming after checkpoint");
            Unreported {
                lines: &lines[index + 1..],
                skipped: index + 1,
            }
        }
        None => Unreported { lines, skipped: 0 },
    }
}
