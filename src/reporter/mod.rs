//! Console output for the fallback harness
//!
//! Three line shapes, mirroring what the native runner prints: an
//! informational header once per file before its first case completes, a
//! status line per case, and the final aggregate line. Colors are
//! presentation detail only; the writer is injectable and color can be
//! switched off so output stays testable.

use crate::harness::CaseStatus;
use crate::registry::Summary;
use colored::{Color, Colorize};
use std::io::{self, Write};
use std::time::Duration;

/// Writes harness output, colored by severity.
pub struct Reporter {
    out: Box<dyn Write>,
    color: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    /// A reporter writing to stdout with colors enabled.
    pub fn new() -> Self {
        Self {
            out: Box::new(io::stdout()),
            color: true,
        }
    }

    /// A reporter writing to the given sink.
    pub fn with_writer(out: Box<dyn Write>) -> Self {
        Self { out, color: true }
    }

    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// "running N tests from FILE", printed once per file before its first
    /// case completes.
    pub fn file_header(&mut self, count: usize, file: &str) {
        let line = format!("running {} tests from {}", count, file);
        let line = self.paint(&line, Color::BrightBlack);
        let _ = writeln!(self.out, "{}", line);
    }

    /// Per-case status line: `NAME ... ok (3 ms)`.
    pub fn case_line(&mut self, name: &str, status: CaseStatus, elapsed: Duration) {
        let colored_status = match status {
            CaseStatus::Passed => self.paint("ok", Color::Green),
            CaseStatus::Failed => self.paint("FAILED", Color::Red),
            CaseStatus::Ignored => self.paint("ignored", Color::Yellow),
        };
        let timing = self.paint(&format!("({} ms)", elapsed.as_millis()), Color::BrightBlack);
        let _ = writeln!(self.out, "{} ... {} {}", name, colored_status, timing);
    }

    /// One failure message, indented under its case line.
    pub fn failure_detail(&mut self, message: &str) {
        let line = self.paint(message, Color::Red);
        let _ = writeln!(self.out, "  {}", line);
    }

    /// The final aggregate line:
    /// `ok | 5 passed | 0 failed | (12 ms)`.
    pub fn summary(&mut self, summary: &Summary) {
        let verdict = if summary.ok() {
            self.paint("ok", Color::Green)
        } else {
            self.paint("FAILED", Color::Red)
        };
        let timing = self.paint(
            &format!("({} ms)", summary.time.as_millis()),
            Color::BrightBlack,
        );
        let _ = writeln!(
            self.out,
            "{} | {} passed | {} failed | {}",
            verdict, summary.passed, summary.failed, timing
        );
        let _ = self.out.flush();
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}
