//! Pattern registry for line classification
//!
//! This module provides:
//! - Pre-compiled, case-insensitive noise and importance patterns
//! - Important keywords matched as case-insensitive substrings
//! - The verbose-dump deny-list used by the extended reduction profile
//!
//! Patterns are unanchored: a pattern matches when it occurs anywhere in the line.

mod builtin;

pub use builtin::{IMPORTANT_KEYWORDS, IMPORTANT_PATTERNS, NOISE_PATTERNS, VERBOSE_DUMP_PATTERNS};

use crate::error::{LogsiftError, Result};
use ahash::{HashSet, HashSetExt};
use regex::{Regex, RegexBuilder};

/// Uncompiled pattern tables
#[derive(Debug, Clone, Default)]
pub struct PatternTables {
    pub noise: Vec<String>,
    pub important: Vec<String>,
    pub keywords: Vec<String>,
    pub verbose_dumps: Vec<String>,
}

impl PatternTables {
    /// Tables for Android TV app logs
    pub fn builtin() -> Self {
        fn owned(patterns: &[&str]) -> Vec<String> {
            patterns.iter().map(|p| p.to_string()).collect()
        }

        Self {
            noise: owned(NOISE_PATTERNS),
            important: owned(IMPORTANT_PATTERNS),
            keywords: owned(IMPORTANT_KEYWORDS),
            verbose_dumps: owned(VERBOSE_DUMP_PATTERNS),
        }
    }
}

/// Pattern registry with all pre-compiled patterns
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    /// Lines matching any of these are noise
    pub noise_patterns: Vec<Regex>,
    /// Lines matching any of these are important
    pub important_patterns: Vec<Regex>,
    /// Lowercased keywords, matched as substrings of the lowercased line
    pub important_keywords: HashSet<String>,
    /// Verbose internal dumps denied by the fallback heuristic
    pub verbose_dump_patterns: Vec<Regex>,
}

impl PatternRegistry {
    /// Build the registry from the hardcoded tables
    pub fn builtin() -> Result<Self> {
        Self::from_tables(PatternTables::builtin())
    }

    /// Build pattern registry from tables, compiling every pattern once
    pub fn from_tables(tables: PatternTables) -> Result<Self> {
        let noise_patterns = compile_all(&tables.noise, "noise")?;
        let important_patterns = compile_all(&tables.important, "important")?;
        let verbose_dump_patterns = compile_all(&tables.verbose_dumps, "verbose dump")?;

        let mut important_keywords = HashSet::with_capacity(tables.keywords.len());
        for keyword in &tables.keywords {
            important_keywords.insert(keyword.to_lowercase());
        }

        tracing::debug!(
            noise = noise_patterns.len(),
            important = important_patterns.len(),
            keywords = important_keywords.len(),
            verbose_dumps = verbose_dump_patterns.len(),
            "Pattern registry compiled"
        );

        Ok(Self {
            noise_patterns,
            important_patterns,
            important_keywords,
            verbose_dump_patterns,
        })
    }

    /// True if any noise pattern occurs in the line
    pub fn matches_noise(&self, line: &str) -> bool {
        self.noise_patterns.iter().any(|p| p.is_match(line))
    }

    /// True if any important pattern occurs in the line
    pub fn matches_important(&self, line: &str) -> bool {
        self.important_patterns.iter().any(|p| p.is_match(line))
    }

    /// True if the line contains any important keyword, ignoring case
    pub fn contains_keyword(&self, line: &str) -> bool {
        let lowered = line.to_lowercase();
        self.important_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }

    /// True if the line looks like a known-verbose internal dump
    pub fn matches_verbose_dump(&self, line: &str) -> bool {
        self.verbose_dump_patterns.iter().any(|p| p.is_match(line))
    }
}

fn compile_all(patterns: &[String], kind: &str) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    LogsiftError::Config(format!("Invalid {} pattern '{}': {}", kind, p, e))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_compiles() {
        let registry = PatternRegistry::builtin().unwrap();
        assert_eq!(registry.noise_patterns.len(), NOISE_PATTERNS.len());
        assert_eq!(registry.important_patterns.len(), IMPORTANT_PATTERNS.len());
        assert_eq!(registry.important_keywords.len(), IMPORTANT_KEYWORDS.len());
        assert_eq!(
            registry.verbose_dump_patterns.len(),
            VERBOSE_DUMP_PATTERNS.len()
        );
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let tables = PatternTables {
            noise: vec!["(unclosed".to_string()],
            ..PatternTables::default()
        };

        let err = PatternRegistry::from_tables(tables).unwrap_err();
        assert!(matches!(err, LogsiftError::Config(_)));
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_patterns_match_anywhere_ignoring_case() {
        let registry = PatternRegistry::builtin().unwrap();

        assert!(registry.matches_noise("12:00 D/OkHttp: CONTENT-TYPE: text/html"));
        assert!(registry.matches_important("prefix shouldfetch=true suffix"));
        assert!(!registry.matches_noise("plain message"));
    }

    #[test]
    fn test_keywords_are_case_insensitive_substrings() {
        let registry = PatternRegistry::builtin().unwrap();

        assert!(registry.contains_keyword("something CrAsHeD here"));
        assert!(registry.contains_keyword("seasonselector picked 2"));
        assert!(!registry.contains_keyword("nothing to see"));
    }

    #[test]
    fn test_verbose_dump_patterns() {
        let registry = PatternRegistry::builtin().unwrap();

        assert!(registry.matches_verbose_dump("I/Choreographer: Skipped 42 frames!"));
        assert!(registry.matches_verbose_dump("D/OkHttp: <-- END HTTP (1234-byte body)"));
        assert!(!registry.matches_verbose_dump("D/App: loaded"));
    }
}
