//! User interface module - console output for the release and serve commands.
//!
//! - `formatter` - formatting and printing helpers
//! - This module - the release report assembled from a workflow result

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_commit_summary, display_error, display_status,
    display_success, display_updated_files, display_version_change,
};

use crate::cli::orchestration::WorkflowResult;

/// Print the outcome of a release run.
///
/// A dry run prints the rendered changelog entry and release notes instead
/// of the list of written files.
pub fn display_release_report(result: &WorkflowResult) {
    display_commit_summary(&result.commits, &result.bump.to_string());

    for warning in &result.warnings {
        display_boundary_warning(warning);
    }

    display_version_change(&result.previous_version, &result.version);

    if result.dry_run {
        display_status("Dry run: no files were written");
        println!("\n{}", result.changelog_entry);
        println!("{}", result.release_notes);
        return;
    }

    display_success(&format!("Release {} prepared successfully!", result.version));
    display_updated_files(&result.updated_files);
}
