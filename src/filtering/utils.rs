// Utility functions for line inspection

/// Length of a line in characters (Unicode scalar values), not bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Number of non-overlapping occurrences of `needle` in `haystack`
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// True if the lowercased line contains any of the (already lowercase) words
pub fn contains_any_lowercase(line: &str, words: &[String]) -> bool {
    if words.is_empty() {
        return false;
    }
    let lowered = line.to_lowercase();
    words.iter().any(|w| lowered.contains(w.as_str()))
}
