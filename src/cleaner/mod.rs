//! End-to-end cleaning: reduction plus the optional summary block

use crate::config::Config;
use crate::error::Result;
use crate::filtering::{ReductionPipeline, ReductionProfile, ReductionStats};
use crate::patterns::PatternRegistry;
use crate::summary::SummaryBuilder;
use std::sync::Arc;

/// Result of cleaning one input
#[derive(Debug, Clone)]
pub struct CleanOutput {
    /// Final text, with the summary block when enabled
    pub text: String,
    pub stats: ReductionStats,
}

/// Reduction pipeline paired with an optional summary builder
pub struct LogCleaner {
    pipeline: ReductionPipeline,
    summary: Option<SummaryBuilder>,
}

impl LogCleaner {
    pub fn new(
        patterns: Arc<PatternRegistry>,
        profile: ReductionProfile,
        summary: Option<SummaryBuilder>,
    ) -> Result<Self> {
        Ok(Self {
            pipeline: ReductionPipeline::new(patterns, profile)?,
            summary,
        })
    }

    /// Build a cleaner from the built-in patterns and a resolved config
    pub fn from_config(config: &Config) -> Result<Self> {
        let patterns = Arc::new(PatternRegistry::builtin()?);
        let summary = config
            .summary
            .enabled
            .then(|| SummaryBuilder::new(config.summary.max_listed_errors));
        Self::new(patterns, config.reduction_profile()?, summary)
    }

    pub fn pipeline(&self) -> &ReductionPipeline {
        &self.pipeline
    }

    pub fn clean(&self, input: &str) -> CleanOutput {
        let reduced = self.pipeline.reduce(input);
        let body = reduced.text();

        let text = match &self.summary {
            Some(builder) => builder.build(&body),
            None => body,
        };

        CleanOutput {
            text,
            stats: reduced.stats,
        }
    }
}
