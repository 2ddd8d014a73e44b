//! Default command: annotated transcript plus checkpoint bookkeeping.
//!
//! Runs the report machine over the lines that follow the most recent
//! checkpoint and prints the transcript. After a valid report the operator
//! is asked to confirm before a new checkpoint is appended to the log, so
//! the next run starts where this one ended.

use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use hours_core::{Reporter, watermark};

pub fn run<W: Write, R: BufRead>(file: &Path, out: &mut W, confirm: &mut R) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let lines: Vec<&str> = contents.lines().collect();

    let unreported = watermark::resolve(&lines);
    if unreported.lines.is_empty() {
        writeln!(out, "Nothing to report.")?;
        return Ok(());
    }

    // The transcript is buffered so an invalid parse produces no output.
    let mut transcript = Vec::new();
    let totals = Reporter::new(unreported.lines, unreported.skipped).run(&mut transcript)?;
    if !totals.is_valid() {
        writeln!(out, "Invalid file format.")?;
        return Ok(());
    }
    out.write_all(&transcript)?;

    store_checkpoint(file, out, confirm)
}

/// Appends a checkpoint to the log once the operator confirms with `Y`.
fn store_checkpoint<W: Write, R: BufRead>(file: &Path, out: &mut W, confirm: &mut R) -> Result<()> {
    writeln!(out, "Confirm that these hours should not be reported again? (Y/N)")?;
    out.flush()?;

    let mut reply = String::new();
    confirm
        .read_line(&mut reply)
        .context("failed to read confirmation")?;
    if reply.trim() != "Y" {
        writeln!(out, "Canceling checkpoint.")?;
        return Ok(());
    }

    let mut log = OpenOptions::new()
        .append(true)
        .open(file)
        .with_context(|| format!("failed to open {} for append", file.display()))?;
    writeln!(log, "\n{}", watermark::CHECKPOINT)?;
    tracing::debug!(file = %file.display(), "checkpoint appended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with_reply(contents: &str, reply: &str) -> (String, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hours.txt");
        std::fs::write(&path, contents).unwrap();

        let mut out = Vec::new();
        run(&path, &mut out, &mut reply.as_bytes()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        (String::from_utf8(out).unwrap(), written)
    }

    #[test]
    fn confirmed_report_appends_a_checkpoint() {
        let contents = "date: Mon\nstart: 09h00\nstop: 10h00\n";
        let (output, written) = run_with_reply(contents, "Y\n");
        assert!(output.contains("Time worked: 1h 0m"));
        assert!(written.ends_with("\nlast:\n"));
    }

    #[test]
    fn declined_report_leaves_the_file_untouched() {
        let contents = "date: Mon\nstart: 09h00\nstop: 10h00\n";
        let (output, written) = run_with_reply(contents, "N\n");
        assert!(output.contains("Canceling checkpoint."));
        assert_eq!(written, contents);
    }

    #[test]
    fn confirmation_is_case_sensitive() {
        let contents = "date: Mon\nstart: 09h00\nstop: 10h00\n";
        let (_, written) = run_with_reply(contents, "y\n");
        assert_eq!(written, contents);
    }

    #[test]
    fn fully_checkpointed_log_has_nothing_to_report() {
        let contents = "date: Mon\nstart: 09h00\nstop: 10h00\n\nlast:\n";
        let (output, written) = run_with_reply(contents, "Y\n");
        assert_eq!(output, "Nothing to report.\n");
        assert_eq!(written, contents);
    }

    #[test]
    fn invalid_log_prints_no_transcript() {
        let contents = "date: Mon\njust notes\n";
        let (output, written) = run_with_reply(contents, "Y\n");
        assert_eq!(output, "Invalid file format.\n");
        assert_eq!(written, contents);
    }
}
