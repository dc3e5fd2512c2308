//! Formatting functions for console output.
//!
//! The `format_*` functions build strings and are testable; the `display_*`
//! functions print them.

use std::path::PathBuf;

use console::style;

use crate::boundary::BoundaryWarning;

/// Longest commit subject shown in the summary before it is cut
const SUBJECT_WIDTH: usize = 60;

/// How many commits the summary lists before collapsing the rest
const MAX_LISTED_COMMITS: usize = 10;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// First line of a commit message, cut to the summary width on a char
/// boundary.
pub fn commit_subject(message: &str) -> String {
    let first_line = message.lines().next().unwrap_or("");
    if first_line.chars().count() > SUBJECT_WIDTH {
        let cut: String = first_line.chars().take(SUBJECT_WIDTH).collect();
        format!("{}…", cut)
    } else {
        first_line.to_string()
    }
}

/// Numbered list of commit subjects, at most ten, plus a remainder line.
pub fn format_commit_list(commit_messages: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = commit_messages
        .iter()
        .take(MAX_LISTED_COMMITS)
        .enumerate()
        .map(|(i, message)| format!("  {}. {}", i + 1, commit_subject(message)))
        .collect();

    if commit_messages.len() > MAX_LISTED_COMMITS {
        lines.push(format!(
            "  ... and {} more commits",
            commit_messages.len() - MAX_LISTED_COMMITS
        ));
    }
    lines
}

/// Display the commits that go into the release.
pub fn display_commit_summary(commit_messages: &[String], bump_type: &str) {
    println!(
        "\n{}",
        style(format!(
            "Processing {} commits for {} release",
            commit_messages.len(),
            bump_type
        ))
        .bold()
    );
    for line in format_commit_list(commit_messages) {
        println!("{}", line);
    }
}

/// Display the version change.
pub fn display_version_change(old_version: &str, new_version: &str) {
    println!("\n{}", style("Version:").bold());
    println!("  From: {}", style(old_version).red());
    println!("  To:   {}", style(new_version).green());
}

/// Display the files a release wrote.
pub fn display_updated_files(files: &[PathBuf]) {
    println!("{}", style("Updated files:").bold());
    for file in files {
        println!("  - {}", file.display());
    }
}
