//! Cumulative changelog document handling.

/// Header written when a changelog is created from scratch
pub const CHANGELOG_PREAMBLE: &str = "# Changelog\n\n\
All notable changes to this project will be documented in this file.\n\n\
The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/),\n\
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).\n\n";

const VERSION_HEADER_PREFIX: &str = "## [";

/// Index of the first line that opens a version entry, if any
pub fn find_version_header(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.starts_with(VERSION_HEADER_PREFIX))
}

/// Whether `document` already holds at least one version entry
pub fn has_version_header(document: &str) -> bool {
    document
        .split('\n')
        .any(|line| line.starts_with(VERSION_HEADER_PREFIX))
}

/// Insert `entry_text` into an existing changelog, newest first.
///
/// - blank document: preamble followed by the entry
/// - otherwise: the entry goes in as one line right before the first
///   `## [` line; text above and below is untouched
/// - no `## [` line at all: the entry is appended at the end
pub fn prepend_to_changelog(existing: &str, entry_text: &str) -> String {
    if existing.trim().is_empty() {
        return format!("{}{}", CHANGELOG_PREAMBLE, entry_text);
    }

    let mut lines: Vec<&str> = existing.split('\n').collect();
    let insert_at = find_version_header(&lines).unwrap_or(lines.len());
    lines.insert(insert_at, entry_text);
    lines.join("\n")
}
