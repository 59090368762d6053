// Reduction pipeline for verbose application logs
//
// One pass over the input: each line is classified as noise, important or
// ordinary under a reduction profile, large JSON payloads are collapsed into a
// synopsis, and retained lines keep their original relative order.

mod classifier;
mod profile;
mod summarizer;
mod types;
mod utils;

pub use classifier::LineClassifier;
pub use profile::{NoisePrecedence, ReductionProfile, DEFAULT_APP_MARKER, PROFILE_NAMES};
pub use summarizer::{PayloadKind, PayloadSummarizer, PayloadSynopsis, PAYLOAD_MIN_LENGTH};
pub use types::{Classification, ReducedLog, ReductionStats};

use crate::error::Result;
use crate::patterns::PatternRegistry;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Instant;

/// Main reduction pipeline
/// Holds no per-run state; each call to `reduce` builds a fresh `ReducedLog`
pub struct ReductionPipeline {
    classifier: LineClassifier,
    summarizer: PayloadSummarizer,
    profile: ReductionProfile,
}

impl ReductionPipeline {
    /// Create new reduction pipeline
    ///
    /// # Arguments
    /// * `patterns` - Compiled pattern registry, shared read-only
    /// * `profile` - Retention policy for this pipeline
    pub fn new(patterns: Arc<PatternRegistry>, profile: ReductionProfile) -> Result<Self> {
        Ok(Self {
            classifier: LineClassifier::new(patterns),
            summarizer: PayloadSummarizer::new()?,
            profile,
        })
    }

    pub fn profile(&self) -> &ReductionProfile {
        &self.profile
    }

    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// Reduce raw log text
    ///
    /// # Arguments
    /// * `text` - Full input text
    ///
    /// # Returns
    /// Retained lines (post-summarization) with statistics
    pub fn reduce(&self, text: &str) -> ReducedLog {
        let start = Instant::now();
        let mut stats = ReductionStats::default();
        let mut lines = Vec::new();

        for line in text.trim().split('\n').map(str::trim) {
            if line.is_empty() {
                continue;
            }
            stats.input_lines += 1;

            let summarized = self.summarizer.summarize(line);
            let was_summarized = matches!(summarized, Cow::Owned(_));
            let classification = self.classifier.classify(line, was_summarized, &self.profile);
            stats.record(classification);

            if classification.is_retained() {
                if was_summarized {
                    stats.summarized += 1;
                }
                lines.push(summarized.into_owned());
            }
        }

        stats.processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            profile = %self.profile,
            input = stats.input_lines,
            noise = stats.noise,
            important = stats.important,
            ordinary_kept = stats.ordinary_kept,
            ordinary_dropped = stats.ordinary_dropped,
            summarized = stats.summarized,
            "Reduction complete"
        );

        ReducedLog { lines, stats }
    }

    /// Reduce raw log text and join retained lines with newlines
    pub fn reduce_text(&self, text: &str) -> String {
        self.reduce(text).text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pipeline(profile: ReductionProfile) -> ReductionPipeline {
        let patterns = Arc::new(PatternRegistry::builtin().expect("Failed to build patterns"));
        ReductionPipeline::new(patterns, profile).unwrap()
    }

    #[test]
    fn test_pipeline_basic() {
        let pipeline = create_pipeline(ReductionProfile::standard());

        let input = "\
2024-01-01 10:00:00.000 DEBUG content-type: application/json
2024-01-01 10:00:01.000 ERROR Season Selection failed
2024-01-01 10:00:02.000 I/ActivityManager: Start proc
";
        let reduced = pipeline.reduce(input);

        assert_eq!(
            reduced.lines,
            vec!["2024-01-01 10:00:01.000 ERROR Season Selection failed"]
        );
        assert_eq!(reduced.stats.input_lines, 3);
        assert_eq!(reduced.stats.noise, 1);
        assert_eq!(reduced.stats.important, 1);
        assert_eq!(reduced.stats.ordinary_dropped, 1);
    }

    #[test]
    fn test_pipeline_empty_input() {
        let pipeline = create_pipeline(ReductionProfile::standard());

        let reduced = pipeline.reduce("");
        assert!(reduced.is_empty());
        assert_eq!(reduced.text(), "");
        assert_eq!(reduced.stats.input_lines, 0);
        assert_eq!(reduced.stats.retained(), 0);

        assert_eq!(pipeline.reduce_text("  \n\n \r\n  "), "");
    }

    #[test]
    fn test_pipeline_trims_lines() {
        let pipeline = create_pipeline(ReductionProfile::standard());

        let reduced = pipeline.reduce("   API CALL: /tv/1   \r\n\n\tAPI RESULT: ok\t");
        assert_eq!(reduced.lines, vec!["API CALL: /tv/1", "API RESULT: ok"]);
    }

    #[test]
    fn test_pipeline_preserves_order_without_dedup() {
        let pipeline = create_pipeline(ReductionProfile::standard());

        let input = "shouldFetch=true\nAPI CALL: a\nshouldFetch=true\nAPI CALL: b";
        assert_eq!(
            pipeline.reduce_text(input),
            "shouldFetch=true\nAPI CALL: a\nshouldFetch=true\nAPI CALL: b"
        );
    }

    #[test]
    fn test_pipeline_summarizes_payloads() {
        let pipeline = create_pipeline(ReductionProfile::standard());

        let mut line = r#"2024-01-01 10:00:03.000 D/TMDbTVRepository: {"episodes":[{"episode_number":1},{"episode_number":2}]}"#.to_string();
        line.push_str(&" ".repeat(150));
        line.push('}');

        let reduced = pipeline.reduce(&line);
        assert_eq!(
            reduced.lines,
            vec!["2024-01-01 10:00:03.000  [JSON Response] Season data with 2 episodes  (truncated)"]
        );
        assert_eq!(reduced.stats.summarized, 1);
    }
}
