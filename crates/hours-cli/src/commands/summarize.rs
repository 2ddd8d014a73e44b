//! Summarize command: cumulative total across all days.
//!
//! Bypasses watermark resolution on purpose: a summary always covers the
//! whole history of the log, checkpoints included, and never mutates it.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use hours_core::{Reporter, Totals, clock::format_duration};

/// JSON summary structure.
#[derive(Debug, Serialize)]
struct JsonSummary<'a> {
    file: &'a str,
    total_ms: i64,
    total: String,
    days: usize,
    sessions: usize,
}

pub fn run<W: Write>(file: &Path, json: bool, out: &mut W) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let lines: Vec<&str> = contents.lines().collect();
    if lines.is_empty() {
        writeln!(out, "Nothing to report.")?;
        return Ok(());
    }

    let totals = Reporter::new(&lines, 0).run(&mut std::io::sink())?;
    if !totals.is_valid() {
        writeln!(out, "Invalid file format.")?;
        return Ok(());
    }

    if json {
        let name = file.display().to_string();
        writeln!(out, "{}", serde_json::to_string_pretty(&summary(&name, totals))?)?;
    } else {
        writeln!(out)?;
        writeln!(out, "Total time worked: {}", format_duration(totals.total))?;
        writeln!(out)?;
    }
    Ok(())
}

fn summary(file: &str, totals: Totals) -> JsonSummary<'_> {
    JsonSummary {
        file,
        total_ms: totals.total.num_milliseconds(),
        total: format_duration(totals.total),
        days: totals.days,
        sessions: totals.sessions,
    }
}
