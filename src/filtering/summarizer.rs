// Payload summarizer: collapses large embedded JSON responses into one-line synopses
use std::borrow::Cow;
use std::fmt;

use regex::Regex;

use crate::error::{LogsiftError, Result};
use crate::filtering::utils;

/// Lines longer than this (in characters) containing `{"` are summarized
pub const PAYLOAD_MIN_LENGTH: usize = 200;

const TIMESTAMP_PATTERN: &str = r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3})";

/// Kind of payload detected in a long JSON line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    SeasonData,
    CastCrew,
    SearchResults,
    Generic,
}

impl PayloadKind {
    /// Detect the kind and its element count; first match wins
    fn detect(line: &str) -> (Self, Option<usize>) {
        if line.contains(r#""episodes":["#) {
            let count = utils::count_occurrences(line, r#""episode_number":"#);
            (Self::SeasonData, Some(count))
        } else if line.contains(r#""cast":["#) {
            let count = utils::count_occurrences(line, r#""character":"#);
            (Self::CastCrew, Some(count))
        } else if line.contains(r#""results":["#) {
            let count = utils::count_occurrences(line, r#""id":"#);
            (Self::SearchResults, Some(count))
        } else {
            (Self::Generic, None)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SeasonData => "Season data",
            Self::CastCrew => "Cast/crew data",
            Self::SearchResults => "Search results",
            Self::Generic => "Large JSON payload",
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            Self::SeasonData => Some("episodes"),
            Self::CastCrew => Some("cast members"),
            Self::SearchResults => Some("items"),
            Self::Generic => None,
        }
    }
}

/// One-line replacement for a large payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSynopsis {
    /// Leading timestamp of the original line, empty if absent
    pub timestamp: String,
    pub kind: PayloadKind,
    /// Element count, absent for generic payloads
    pub count: Option<usize>,
}

impl fmt::Display for PayloadSynopsis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  [JSON Response] {}", self.timestamp, self.kind.label())?;
        if let (Some(count), Some(unit)) = (self.count, self.kind.unit()) {
            write!(f, " with {} {}", count, unit)?;
        }
        f.write_str("  (truncated)")
    }
}

/// Detects and summarizes large JSON payloads
#[derive(Debug, Clone)]
pub struct PayloadSummarizer {
    timestamp: Regex,
}

impl PayloadSummarizer {
    pub fn new() -> Result<Self> {
        let timestamp = Regex::new(TIMESTAMP_PATTERN)
            .map_err(|e| LogsiftError::Config(format!("Invalid timestamp pattern: {}", e)))?;
        Ok(Self { timestamp })
    }

    /// Whether the line qualifies as a large payload
    pub fn is_payload(&self, line: &str) -> bool {
        line.contains("{\"") && utils::char_len(line) > PAYLOAD_MIN_LENGTH
    }

    /// Describe the payload, or `None` if the line does not qualify
    pub fn synopsis(&self, line: &str) -> Option<PayloadSynopsis> {
        if !self.is_payload(line) {
            return None;
        }

        let timestamp = self
            .timestamp
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let (kind, count) = PayloadKind::detect(line);

        Some(PayloadSynopsis {
            timestamp,
            kind,
            count,
        })
    }

    /// Replace a large payload line with its synopsis; other lines pass through untouched
    pub fn summarize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self.synopsis(line) {
            Some(synopsis) => Cow::Owned(synopsis.to_string()),
            None => Cow::Borrowed(line),
        }
    }
}
