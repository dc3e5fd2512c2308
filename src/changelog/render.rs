//! Markdown rendering of changelog entries and release notes.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::domain::{ChangeSet, Version};

/// One dated, versioned block of categorized changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub version: Version,
    pub date: NaiveDate,
    pub changes: ChangeSet,
}

impl ChangelogEntry {
    pub fn new(version: Version, date: NaiveDate, changes: ChangeSet) -> Self {
        ChangelogEntry {
            version,
            date,
            changes,
        }
    }

    /// `## [1.3.0] - 2024-05-01`
    pub fn header(&self) -> String {
        format!("## [{}] - {}", self.version, self.date.format("%Y-%m-%d"))
    }
}

/// Render the section blocks of an entry, without the version header.
///
/// Empty buckets produce no heading at all.
pub fn render_body(changes: &ChangeSet) -> String {
    let mut output = String::new();

    for (section, records) in changes.sections() {
        output.push_str(&format!("### {}\n\n", section.heading()));
        for record in records {
            output.push_str(&record.to_list_item());
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

/// Render a full changelog entry: version header followed by the body
#[instrument(skip(entry), fields(version = %entry.version, commit_count = entry.changes.len()))]
pub fn render_entry(entry: &ChangelogEntry) -> String {
    let mut output = format!("{}\n\n", entry.header());
    output.push_str(&render_body(&entry.changes));
    debug!(bytes = output.len(), "rendered changelog entry");
    output
}

/// Render the standalone release-notes document for an entry.
///
/// `pr_number` is optional; without it the merged-PR line carries only the
/// title.
pub fn render_release_notes(entry: &ChangelogEntry, title: &str, pr_number: Option<&str>) -> String {
    let mut output = format!("# Release {}\n\n", entry.version);

    match pr_number {
        Some(number) => output.push_str(&format!("**Merged PR**: {} (#{})\n\n", title, number)),
        None => output.push_str(&format!("**Merged PR**: {}\n\n", title)),
    }

    output.push_str(&render_body(&entry.changes));
    output
}
