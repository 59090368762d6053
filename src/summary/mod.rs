//! Summary block prepended to reduced logs
//!
//! Counters are derived by re-scanning the reduced text for markers. Matching
//! is case-sensitive substring matching.

/// Default number of error/warning lines listed verbatim
pub const DEFAULT_MAX_LISTED_ERRORS: usize = 5;

const SEASON_MARKERS: &[&str] = &["Season Selection", "Selecting season"];
const API_CALL_MARKER: &str = "API CALL:";
const ERROR_MARKERS: &[&str] = &["Error", "WARNING", "WARN"];

/// Aggregate counters over a reduced log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryCounters {
    pub total_lines: usize,
    pub season_selections: usize,
    pub api_calls: usize,
    /// Error/warning lines in order of appearance
    pub errors: Vec<String>,
}

impl SummaryCounters {
    /// Scan reduced text; empty text has zero lines
    pub fn from_text(reduced: &str) -> Self {
        let mut counters = Self::default();
        if reduced.is_empty() {
            return counters;
        }

        for line in reduced.split('\n') {
            counters.total_lines += 1;
            if SEASON_MARKERS.iter().any(|m| line.contains(m)) {
                counters.season_selections += 1;
            }
            if line.contains(API_CALL_MARKER) {
                counters.api_calls += 1;
            }
            if ERROR_MARKERS.iter().any(|m| line.contains(m)) {
                counters.errors.push(line.to_string());
            }
        }

        counters
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Renders the summary header followed by the reduced text
#[derive(Debug, Clone)]
pub struct SummaryBuilder {
    max_listed_errors: usize,
}

impl SummaryBuilder {
    pub fn new(max_listed_errors: usize) -> Self {
        Self { max_listed_errors }
    }

    /// Render summary block with the reduced text appended verbatim
    pub fn build(&self, reduced: &str) -> String {
        let counters = SummaryCounters::from_text(reduced);
        self.render(&counters, reduced)
    }

    pub fn render(&self, counters: &SummaryCounters, reduced: &str) -> String {
        let mut summary = vec![
            "=== LOG SUMMARY ===".to_string(),
            format!("Total lines after cleanup: {}", counters.total_lines),
            format!("Season selections: {}", counters.season_selections),
            format!("API calls: {}", counters.api_calls),
            format!("Errors/Warnings: {}", counters.error_count()),
            String::new(),
        ];

        if !counters.errors.is_empty() {
            summary.push("=== ERRORS/WARNINGS ===".to_string());
            summary.extend(counters.errors.iter().take(self.max_listed_errors).cloned());
            if counters.errors.len() > self.max_listed_errors {
                summary.push(format!(
                    "... and {} more errors",
                    counters.errors.len() - self.max_listed_errors
                ));
            }
            summary.push(String::new());
        }

        summary.push("=== CLEANED LOG DATA ===".to_string());
        summary.push(String::new());

        // The trailing empty element yields exactly one newline before the data
        let mut out = summary.join("\n");
        out.push_str(reduced);
        out
    }
}

impl Default for SummaryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LISTED_ERRORS)
    }
}

/// Render a summary with the default listing limit
pub fn build_summary(reduced: &str) -> String {
    SummaryBuilder::default().build(reduced)
}
