//! The report state machine.
//!
//! Consumes the unreported lines of a log and produces an annotated
//! transcript plus per-day and grand-total durations. The machine is a
//! single loop over an explicit line index; all mutable parser state lives
//! in the [`Reporter`] value so a parse can be driven and inspected in
//! isolation. Transcript output goes to an injected writer, which callers
//! that only want totals point at `io::sink()`.

use std::fmt;
use std::io::Write;

use chrono::{Duration, NaiveTime};
use thiserror::Error;

use crate::clock::{self, format_duration};
use crate::keyword::{Keyword, split_line};

/// Parser states of the report machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Before any date header has been seen.
    Init,
    /// Date header seen, no session open.
    Date,
    /// Session open, awaiting its stop.
    Start,
    /// Session closed, awaiting the next date or start.
    Content,
}

impl State {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Date => "date",
            Self::Start => "start",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fatal conditions raised while consuming log lines.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A structural keyword fired in a state that forbids it.
    #[error("cannot apply {keyword} while state is {state} (line {line_number}: {line:?})")]
    Transition {
        keyword: Keyword,
        state: State,
        line_number: usize,
        line: String,
    },

    /// A start/stop suffix failed to parse as `HHhMM`.
    #[error("invalid timestamp on line {line_number}: {line:?}")]
    Timestamp {
        line_number: usize,
        line: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Durations and counters accumulated over a whole parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Grand total across all days.
    pub total: Duration,

    /// Number of date headers seen.
    pub days: usize,

    /// Number of sessions opened.
    pub sessions: usize,
}

impl Totals {
    /// A parse is valid only if at least one session was opened.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.sessions > 0
    }
}

/// One pass of the report machine over a sequence of log lines.
pub struct Reporter<'a> {
    lines: &'a [&'a str],
    /// Lines excluded before `lines` begins; keeps diagnostics absolute.
    offset: usize,
    index: usize,
    state: State,
    session_start: Option<NaiveTime>,
    daily: Duration,
    total: Duration,
    days: usize,
    sessions: usize,
}

impl<'a> Reporter<'a> {
    /// Creates a machine over `lines`, with `offset` lines already excluded
    /// by watermark resolution (0 when reporting a whole file).
    #[must_use]
    pub fn new(lines: &'a [&'a str], offset: usize) -> Self {
        Self {
            lines,
            offset,
            index: 0,
            state: State::Init,
            session_start: None,
            daily: Duration::zero(),
            total: Duration::zero(),
            days: 0,
            sessions: 0,
        }
    }

    /// Consumes every line, writing the transcript to `out`.
    ///
    /// Content lines are echoed indented only while draining the span after
    /// a `start` or `stop`; preamble before the first keyword and notes
    /// directly under a date header pass silently. On exhaustion the current
    /// day's elapsed time is reported regardless of state.
    pub fn run<W: Write>(mut self, out: &mut W) -> Result<Totals, ReportError> {
        let mut echo = false;

        while self.index < self.lines.len() {
            let line = self.lines[self.index].trim();
            self.index += 1;

            let (prefix, suffix) = split_line(line);
            let Some(keyword) = Keyword::from_prefix(prefix) else {
                if echo {
                    writeln!(out, "        {line}")?;
                }
                continue;
            };

            match keyword {
                Keyword::Date => {
                    self.date(line, out)?;
                    echo = false;
                }
                Keyword::Start => {
                    self.start(line, suffix)?;
                    echo = true;
                }
                Keyword::Stop => {
                    self.stop(line, suffix)?;
                    echo = true;
                }
            }
        }

        self.report_elapsed(out)?;
        tracing::debug!(
            days = self.days,
            sessions = self.sessions,
            total_minutes = self.total.num_minutes(),
            "log consumed"
        );

        Ok(Totals {
            total: self.total,
            days: self.days,
            sessions: self.sessions,
        })
    }

    /// Absolute 1-based number of the line consumed last.
    const fn line_number(&self) -> usize {
        self.offset + self.index
    }

    /// Emits the day banner for the daily accumulator.
    fn report_elapsed<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        writeln!(out)?;
        writeln!(out, "Time worked: {}", format_duration(self.daily))?;
        writeln!(out)?;
        Ok(())
    }

    fn date<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), ReportError> {
        if self.state != State::Init && self.state != State::Content {
            return Err(self.transition_error(Keyword::Date, line));
        }
        if self.state == State::Content {
            self.report_elapsed(out)?;
        }
        writeln!(out, "{line}")?;
        self.daily = Duration::zero();
        self.days += 1;
        self.state = State::Date;
        Ok(())
    }

    fn start(&mut self, line: &str, suffix: Option<&str>) -> Result<(), ReportError> {
        if self.state != State::Date && self.state != State::Content {
            return Err(self.transition_error(Keyword::Start, line));
        }
        self.session_start = Some(self.parse_time(line, suffix)?);
        self.sessions += 1;
        self.state = State::Start;
        Ok(())
    }

    fn stop(&mut self, line: &str, suffix: Option<&str>) -> Result<(), ReportError> {
        if self.state != State::Start {
            return Err(self.transition_error(Keyword::Stop, line));
        }
        let stop = self.parse_time(line, suffix)?;
        let start = self
            .session_start
            .take()
            .ok_or_else(|| self.transition_error(Keyword::Stop, line))?;

        let duration = clock::session_duration(start, stop);
        self.daily = self.daily + duration;
        self.total = self.total + duration;
        self.state = State::Content;
        Ok(())
    }

    fn parse_time(&self, line: &str, suffix: Option<&str>) -> Result<NaiveTime, ReportError> {
        clock::parse_clock(suffix.unwrap_or_default()).map_err(|source| ReportError::Timestamp {
            line_number: self.line_number(),
            line: line.to_string(),
            source,
        })
    }

    fn transition_error(&self, keyword: Keyword, line: &str) -> ReportError {
        ReportError::Transition {
            keyword,
            state: self.state,
            line_number: self.line_number(),
            line: line.to_string(),
        }
    }
}
