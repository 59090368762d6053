// Line classifier: noise / important / ordinary decisions
use std::sync::Arc;

use crate::filtering::profile::ReductionProfile;
use crate::filtering::types::Classification;
use crate::filtering::utils;
use crate::patterns::PatternRegistry;

/// Stateless classifier backed by a shared pattern registry
#[derive(Debug, Clone)]
pub struct LineClassifier {
    patterns: Arc<PatternRegistry>,
}

impl LineClassifier {
    pub fn new(patterns: Arc<PatternRegistry>) -> Self {
        Self { patterns }
    }

    /// True iff the line matches any noise pattern
    pub fn is_noise(&self, line: &str) -> bool {
        self.patterns.matches_noise(line)
    }

    /// True iff the line matches an important pattern or contains an important keyword
    pub fn is_important(&self, line: &str) -> bool {
        self.patterns.matches_important(line) || self.patterns.contains_keyword(line)
    }

    /// Fallback heuristic for lines that are neither noise nor important
    pub fn keeps_ordinary(&self, line: &str, profile: &ReductionProfile) -> bool {
        if !line.contains(profile.app_marker.as_str()) {
            return false;
        }
        if profile.deny_verbose_dumps && self.patterns.matches_verbose_dump(line) {
            return false;
        }

        if utils::char_len(line) < profile.max_line_length {
            profile.level_words.is_empty()
                || utils::contains_any_lowercase(line, &profile.level_words)
        } else {
            utils::contains_any_lowercase(line, &profile.oversize_rescue_words)
        }
    }

    /// Full decision for one line under a profile
    ///
    /// `summarized` marks lines the payload summarizer rewrote; their synopsis is
    /// retained like an important line.
    pub fn classify(
        &self,
        line: &str,
        summarized: bool,
        profile: &ReductionProfile,
    ) -> Classification {
        if profile.defers_noise(line) {
            // Only importance may override noise; a synopsis alone does not
            if self.is_important(line) {
                return Classification::Important;
            }
            if self.is_noise(line) {
                return Classification::Noise;
            }
            if summarized {
                return Classification::Important;
            }
        } else {
            if self.is_noise(line) {
                return Classification::Noise;
            }
            if summarized || self.is_important(line) {
                return Classification::Important;
            }
        }

        if self.keeps_ordinary(line, profile) {
            Classification::OrdinaryKept
        } else {
            Classification::OrdinaryDropped
        }
    }
}
