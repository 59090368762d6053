// Reduction profiles: named retention policies for ordinary lines
use std::fmt;
use std::str::FromStr;

use crate::error::LogsiftError;

/// Package identifier that marks lines emitted by the app itself
pub const DEFAULT_APP_MARKER: &str = "com.rdwatch.androidtv";

/// Order in which noise and importance are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoisePrecedence {
    /// Noise is checked first for every line; a noise match always drops
    NoiseFirst,
    /// Lines containing `{"` are checked for importance before noise
    ImportanceFirstForJson,
}

/// Retention policy applied by the reduction pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionProfile {
    pub name: String,
    pub noise_precedence: NoisePrecedence,
    /// Ordinary lines at or above this many characters need a rescue word
    pub max_line_length: usize,
    /// Ordinary lines must contain this marker to be kept
    pub app_marker: String,
    /// One of these (lowercase) must appear in a short ordinary line; empty disables
    pub level_words: Vec<String>,
    /// One of these (lowercase) keeps an overlong ordinary line; empty drops them all
    pub oversize_rescue_words: Vec<String>,
    /// Reject ordinary lines matching the verbose-dump patterns
    pub deny_verbose_dumps: bool,
}

/// Built-in profile names
pub const PROFILE_NAMES: &[&str] = &["standard", "extended"];

impl ReductionProfile {
    /// Canonical policy: noise first, 500-character bound
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            noise_precedence: NoisePrecedence::NoiseFirst,
            max_line_length: 500,
            app_marker: DEFAULT_APP_MARKER.to_string(),
            level_words: words(&["debug", "info", "warn", "error"]),
            oversize_rescue_words: Vec::new(),
            deny_verbose_dumps: false,
        }
    }

    /// Variant policy: importance wins for JSON-shaped lines, 800-character bound,
    /// verbose dumps denied, overlong lines rescued by failure markers
    pub fn extended() -> Self {
        Self {
            name: "extended".to_string(),
            noise_precedence: NoisePrecedence::ImportanceFirstForJson,
            max_line_length: 800,
            app_marker: DEFAULT_APP_MARKER.to_string(),
            level_words: words(&["debug", "info", "warn", "error"]),
            oversize_rescue_words: words(&["error", "warn", "fail", "exception"]),
            deny_verbose_dumps: true,
        }
    }

    /// Look up a built-in profile by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::standard()),
            "extended" => Some(Self::extended()),
            _ => None,
        }
    }

    /// Whether noise evaluation is deferred past the importance check for this line
    pub fn defers_noise(&self, line: &str) -> bool {
        self.noise_precedence == NoisePrecedence::ImportanceFirstForJson && line.contains("{\"")
    }
}

impl Default for ReductionProfile {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for ReductionProfile {
    type Err = LogsiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s).ok_or_else(|| LogsiftError::InvalidConfigValue {
            path: "reduction.profile".to_string(),
            message: format!("Unknown profile '{}', expected one of {:?}", s, PROFILE_NAMES),
        })
    }
}

impl fmt::Display for ReductionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}
