//! Prometheus text exposition for a single sample.
//!
//! The value is carried as a string and written verbatim. Nothing here parses
//! or validates it, so a non-numeric value produces a payload a scraper will
//! reject.

use std::fmt::Write;

/// Name of the one metric the exporter serves.
pub const FIRST_METRIC_NAME: &str = "my_first_metric";
/// HELP text of the one metric the exporter serves.
pub const FIRST_METRIC_HELP: &str = "Some description of what my_first_metric means";

/// Metric type as written on the `# TYPE` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
        }
    }
}

/// One unlabelled sample with its metadata lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSample {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub value: String,
}

impl MetricSample {
    pub fn gauge(name: impl Into<String>, help: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            kind: MetricKind::Gauge,
            value: value.into(),
        }
    }

    /// The `my_first_metric` gauge carrying `value`.
    pub fn first_metric(value: impl Into<String>) -> Self {
        Self::gauge(FIRST_METRIC_NAME, FIRST_METRIC_HELP, value)
    }

    /// Render as `# HELP`, `# TYPE` and sample lines joined by `\n`.
    /// No trailing newline is written.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# HELP {} {}", self.name, self.help);
        let _ = writeln!(out, "# TYPE {} {}", self.name, self.kind.as_str());
        let _ = write!(out, "{} {}", self.name, self.value);
        out
    }
}
