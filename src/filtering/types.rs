// Shared types for the reduction pipeline

/// Per-line decision made by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Matched a noise pattern, dropped
    Noise,
    /// Matched an importance rule, always kept
    Important,
    /// Ordinary line kept by the fallback heuristic
    OrdinaryKept,
    /// Ordinary line rejected by the fallback heuristic
    OrdinaryDropped,
}

impl Classification {
    pub fn is_retained(self) -> bool {
        matches!(self, Self::Important | Self::OrdinaryKept)
    }
}

/// Statistics from a reduction pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReductionStats {
    /// Number of non-empty input lines
    pub input_lines: usize,
    /// Lines dropped as noise
    pub noise: usize,
    /// Lines kept as important
    pub important: usize,
    /// Ordinary lines kept by the fallback heuristic
    pub ordinary_kept: usize,
    /// Ordinary lines dropped by the fallback heuristic
    pub ordinary_dropped: usize,
    /// Lines rewritten into a payload synopsis
    pub summarized: usize,
    /// Total processing time in milliseconds
    pub processing_time_ms: u64,
}

impl ReductionStats {
    pub(crate) fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Noise => self.noise += 1,
            Classification::Important => self.important += 1,
            Classification::OrdinaryKept => self.ordinary_kept += 1,
            Classification::OrdinaryDropped => self.ordinary_dropped += 1,
        }
    }

    /// Number of lines that made it into the output
    pub fn retained(&self) -> usize {
        self.important + self.ordinary_kept
    }
}

/// Output of a reduction pass: retained lines in input order
#[derive(Debug, Clone, Default)]
pub struct ReducedLog {
    pub lines: Vec<String>,
    pub stats: ReductionStats,
}

impl ReducedLog {
    /// Retained lines joined with newlines, no trailing newline
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
