//! Percentage report derived from a completed tally.

use std::fmt;

use crate::tally::Tally;

/// One key's share of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub key: String,
    pub count: u64,
    /// `count / rounds * 100`.
    pub percentage: f64,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Service {}: {:.6} percent", self.key, self.percentage)
    }
}

/// Distribution of responses over observed keys.
///
/// Lines are sorted by key so output is stable across runs; consumers must not
/// rely on any particular order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    /// Percentages are relative to `rounds`, not to the tally total, so
    /// unlabeled responses lower the sum below 100. `rounds == 0` yields an
    /// empty report.
    pub fn from_tally(tally: &Tally, rounds: u64) -> Self {
        if rounds == 0 {
            return Self::default();
        }
        let mut lines: Vec<ReportLine> = tally
            .iter()
            .map(|(key, count)| ReportLine {
                key: key.to_string(),
                count,
                percentage: count as f64 / rounds as f64 * 100.0,
            })
            .collect();
        lines.sort_by(|a, b| a.key.cmp(&b.key));
        Self { lines }
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn line(&self, key: &str) -> Option<&ReportLine> {
        self.lines.iter().find(|l| l.key == key)
    }

    pub fn total_percentage(&self) -> f64 {
        self.lines.iter().map(|l| l.percentage).sum()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
