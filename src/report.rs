//! Console report for availability results

use crate::domain::{AvailabilityChecker, DnsProbe};
use crate::error::Result;
use crate::types::{ColorScheme, DomainStatus, ResultSet};
use colored::Colorize;
use std::io::Write;

/// Minimum width of the domain column
pub const DOMAIN_COLUMN_WIDTH: usize = 30;

/// Renders result sets as colored, column-aligned lines
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    scheme: ColorScheme,
    width: usize,
}

impl ReportFormatter {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            width: DOMAIN_COLUMN_WIDTH,
        }
    }

    pub fn plain() -> Self {
        Self::new(ColorScheme::plain())
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// One report line: padded domain, a space, the status label.
    ///
    /// Longer names are never truncated.
    pub fn format_line(&self, domain: &str, status: DomainStatus) -> String {
        let line = format!("{:<width$} {}", domain, status, width = self.width);
        match self.scheme.color_for(status) {
            Some(color) => line.color(color).to_string(),
            None => line,
        }
    }

    pub fn format(&self, results: &ResultSet) -> String {
        results
            .iter()
            .map(|(domain, status)| self.format_line(domain, status))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}

/// Status totals across a whole batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub base_domains: usize,
    pub available: usize,
    pub taken: usize,
    pub errors: usize,
}

impl RunSummary {
    fn record(&mut self, results: &ResultSet) {
        self.base_domains += 1;
        self.available += results.count(DomainStatus::Available);
        self.taken += results.count(DomainStatus::Taken);
        self.errors += results.count(DomainStatus::Error);
    }

    pub fn candidates(&self) -> usize {
        self.available + self.taken + self.errors
    }
}

/// Check every base domain in order and write its report block to `out`.
///
/// Per-candidate error diagnostics go to `diagnostics`.
pub async fn run<P, S, W, E>(
    base_domains: &[S],
    checker: &AvailabilityChecker<P>,
    formatter: &ReportFormatter,
    mut out: W,
    mut diagnostics: E,
) -> Result<RunSummary>
where
    P: DnsProbe,
    S: AsRef<str>,
    W: Write,
    E: Write,
{
    let mut summary = RunSummary::default();

    for base in base_domains {
        let base = base.as_ref();
        writeln!(out, "Checking availability for {}...", base)?;
        out.flush()?;

        let results = checker.check_availability_with(base, &mut diagnostics).await;
        writeln!(out, "{}", formatter.format(&results))?;
        summary.record(&results);
    }

    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TldSwapError;
    use async_trait::async_trait;
    use std::io;

    /// Names starting with "taken" resolve, "broken.net" fails
    struct ScriptedProbe;

    #[async_trait]
    impl DnsProbe for ScriptedProbe {
        async fn probe(&self, domain: &str) -> Result<bool> {
            if domain == "broken.net" {
                return Err(TldSwapError::probe(domain, "boom"));
            }
            Ok(domain.starts_with("taken"))
        }
    }

    fn colored_formatter() -> ReportFormatter {
        colored::control::set_override(true);
        ReportFormatter::default()
    }

    #[test]
    fn test_plain_line_is_padded_to_column_width() {
        let line = ReportFormatter::plain().format_line("example.com", DomainStatus::Available);
        assert_eq!(line, format!("example.com{} Available", " ".repeat(19)));
        assert_eq!(line.find("Available"), Some(DOMAIN_COLUMN_WIDTH + 1));
    }

    #[test]
    fn test_long_domain_is_not_truncated() {
        let domain = "a-very-long-candidate-domain-name.tech";
        let line = ReportFormatter::plain().format_line(domain, DomainStatus::Taken);
        assert_eq!(line, format!("{} Taken", domain));
    }

    #[test]
    fn test_colored_line_is_wrapped_and_reset() {
        let formatter = colored_formatter();
        let line = formatter.format_line("example.com", DomainStatus::Available);

        assert!(line.starts_with("\x1b[32m"));
        assert!(line.ends_with("\x1b[0m"));
        assert!(line.contains(&format!("{:<30} Available", "example.com")));
    }

    #[test]
    fn test_status_colors_are_distinct() {
        let formatter = colored_formatter();
        let prefix = |status| {
            let line = formatter.format_line("x.com", status);
            line[..line.find('m').unwrap() + 1].to_string()
        };

        assert_eq!(prefix(DomainStatus::Available), "\x1b[32m");
        assert_eq!(prefix(DomainStatus::Taken), "\x1b[31m");
        assert_eq!(prefix(DomainStatus::Error), "\x1b[33m");
    }

    #[test]
    fn test_format_joins_lines_in_order() {
        let mut results = ResultSet::new();
        results.insert("a.com", DomainStatus::Taken);
        results.insert("a.net", DomainStatus::Available);

        let block = ReportFormatter::plain().format(&results);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("a.com ") && lines[0].ends_with(" Taken"));
        assert!(lines[1].starts_with("a.net ") && lines[1].ends_with(" Available"));
    }

    #[tokio::test]
    async fn test_run_writes_progress_and_blocks() {
        let checker = AvailabilityChecker::new(ScriptedProbe);
        let mut out = Vec::new();
        let mut diagnostics = Vec::new();

        let summary = run(
            &["taken.io", "broken.io"],
            &checker,
            &ReportFormatter::plain(),
            &mut out,
            &mut diagnostics,
        )
        .await
        .unwrap();

        assert_eq!(
            String::from_utf8(diagnostics).unwrap(),
            "Error checking broken.net: boom\n"
        );

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "Checking availability for taken.io...");
        assert!(lines[1].starts_with("taken.com") && lines[1].ends_with("Taken"));
        assert_eq!(lines[7], "Checking availability for broken.io...");
        assert!(lines[9].starts_with("broken.net") && lines[9].ends_with("Error"));

        assert_eq!(
            summary,
            RunSummary {
                base_domains: 2,
                available: 5,
                taken: 6,
                errors: 1,
            }
        );
        assert_eq!(summary.candidates(), 12);
    }

    #[tokio::test]
    async fn test_run_with_no_domains_writes_nothing() {
        let checker = AvailabilityChecker::new(ScriptedProbe);
        let mut out = Vec::new();
        let empty: [&str; 0] = [];

        let summary = run(
            &empty,
            &checker,
            &ReportFormatter::plain(),
            &mut out,
            io::sink(),
        )
        .await
        .unwrap();

        assert!(out.is_empty());
        assert_eq!(summary, RunSummary::default());
    }
}
