//! Release workflow orchestration
//!
//! Everything between CLI argument parsing and the console output lives
//! here. The pure part ([prepare_release]) turns a version string and commit
//! messages into rendered documents; [run_release_workflow] wraps it with the
//! reads and writes, strictly in order and failing fast.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, instrument, warn};

use crate::boundary::BoundaryWarning;
use crate::changelog::{
    has_version_header, prepend_to_changelog, render_entry, render_release_notes, ChangelogEntry,
};
use crate::config::Config;
use crate::domain::{ChangeSet, CommitRecord, Version, VersionBump};
use crate::error::{Result, ShipnoteError};
use crate::manifest::Manifest;
use crate::sink::VersionSink;

/// Title used when none is supplied
pub const DEFAULT_PR_TITLE: &str = "Merged changes";

/// Arguments for the release workflow
///
/// Mirrors the CLI arguments but in a format suitable for orchestration
/// logic, so the workflow can be called without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// `major`, `minor` or `patch`; validated by the workflow
    pub bump_type: String,

    /// JSON array of commit messages
    pub commits_json: Option<String>,

    /// File holding a JSON array of commit messages
    pub commits_file: Option<PathBuf>,

    pub pr_title: String,

    pub pr_number: Option<String>,

    /// Release date as `YYYY-MM-DD`; today (UTC) when absent
    pub date: Option<String>,

    /// Compute everything but write nothing
    pub dry_run: bool,
}

impl Default for ReleaseWorkflowArgs {
    fn default() -> Self {
        ReleaseWorkflowArgs {
            bump_type: VersionBump::default().to_string(),
            commits_json: None,
            commits_file: None,
            pr_title: DEFAULT_PR_TITLE.to_string(),
            pr_number: None,
            date: None,
            dry_run: false,
        }
    }
}

/// Output of the pure release computation
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRelease {
    pub previous_version: Version,
    pub version: Version,
    pub entry: ChangelogEntry,
    pub entry_text: String,
    pub release_notes: String,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub previous_version: String,
    pub version: String,
    pub bump: VersionBump,
    pub commits: Vec<String>,
    pub warnings: Vec<BoundaryWarning>,
    /// Files written, in write order; empty on a dry run
    pub updated_files: Vec<PathBuf>,
    pub changelog_entry: String,
    pub release_notes: String,
    pub dry_run: bool,
}

/// Parse a JSON array of commit messages
pub fn parse_commits(json: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(json)
        .map_err(|e| ShipnoteError::commits(format!("expected a JSON array of strings: {}", e)))
}

/// Collect commit messages from the inline JSON or the commits file.
/// Neither given means an empty release.
pub fn load_commits(commits_json: Option<&str>, commits_file: Option<&Path>) -> Result<Vec<String>> {
    match (commits_json, commits_file) {
        (Some(_), Some(_)) => Err(ShipnoteError::commits(
            "use either inline commits or a commits file, not both",
        )),
        (Some(json), None) => parse_commits(json),
        (None, Some(path)) => {
            let json = fs::read_to_string(path).map_err(|e| ShipnoteError::io(path, e))?;
            parse_commits(&json)
        }
        (None, None) => Ok(Vec::new()),
    }
}

/// Release date from `YYYY-MM-DD`, or today's UTC date
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|_| ShipnoteError::InvalidDate(text.to_string())),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Compute the next version and render both documents. No I/O.
pub fn prepare_release<S: AsRef<str>>(
    current_version: &str,
    bump: VersionBump,
    commits: &[S],
    date: NaiveDate,
    pr_title: &str,
    pr_number: Option<&str>,
) -> Result<PreparedRelease> {
    let previous_version = Version::parse(current_version)?;
    let version = previous_version.bump(bump)?;

    let records: Vec<CommitRecord> = commits
        .iter()
        .map(|message| CommitRecord::parse(message.as_ref()))
        .inspect(|record| {
            debug!(
                commit_type = %record.commit_type,
                scope = record.scope.as_deref(),
                breaking = record.breaking,
                "parsed commit"
            )
        })
        .collect();

    let entry = ChangelogEntry::new(version, date, ChangeSet::classify(records));
    let entry_text = render_entry(&entry);
    let release_notes = render_release_notes(&entry, pr_title, pr_number);

    Ok(PreparedRelease {
        previous_version,
        version,
        entry,
        entry_text,
        release_notes,
    })
}

/// Main release workflow
///
/// 1. Validate the bump type, commits and date
/// 2. Read the manifest and compute the release
/// 3. Write the manifest with the new version
/// 4. Prepend the entry to the changelog
/// 5. Overwrite the release notes
/// 6. Publish the version to `sink`
///
/// Any failure stops the run; nothing after the failing step is written.
#[instrument(skip_all, fields(bump = %args.bump_type, dry_run = args.dry_run))]
pub fn run_release_workflow(
    args: &ReleaseWorkflowArgs,
    config: &Config,
    sink: &dyn VersionSink,
) -> Result<WorkflowResult> {
    let bump: VersionBump = args.bump_type.parse()?;
    let commits = load_commits(args.commits_json.as_deref(), args.commits_file.as_deref())?;
    let date = resolve_date(args.date.as_deref())?;

    info!(commit_count = commits.len(), %bump, "processing release");

    let mut warnings = Vec::new();
    if commits.is_empty() {
        warnings.push(BoundaryWarning::NoCommits);
    }

    let files = &config.files;
    let mut manifest = Manifest::read(&files.manifest)?;
    let current_version = manifest.version().to_string();

    let prepared = prepare_release(
        &current_version,
        bump,
        &commits,
        date,
        &args.pr_title,
        args.pr_number.as_deref(),
    )?;
    let (_, suffix) = Version::split(&current_version)?;
    if !suffix.is_empty() {
        warnings.push(BoundaryWarning::VersionSuffixDropped {
            original: current_version.clone(),
            kept: prepared.previous_version.to_string(),
        });
    }
    let new_version = prepared.version.to_string();
    info!(from = %current_version, to = %new_version, "version bumped");

    let mut updated_files = Vec::new();
    if !args.dry_run {
        manifest.set_version(new_version.clone());
        manifest.write(&files.manifest)?;
        updated_files.push(files.manifest.clone());
    }

    let existing_changelog = read_changelog(&files.changelog)?;
    if !existing_changelog.trim().is_empty() && !has_version_header(&existing_changelog) {
        warnings.push(BoundaryWarning::ChangelogHeaderMissing {
            path: files.changelog.clone(),
        });
    }
    for warning in &warnings {
        warn!(%warning, "release warning");
    }

    if !args.dry_run {
        let changelog = prepend_to_changelog(&existing_changelog, &prepared.entry_text);
        write_document(&files.changelog, &changelog)?;
        updated_files.push(files.changelog.clone());

        write_document(&files.release_notes, &prepared.release_notes)?;
        updated_files.push(files.release_notes.clone());

        sink.publish(&new_version)?;
        info!(version = %new_version, "release prepared");
    }

    Ok(WorkflowResult {
        previous_version: current_version,
        version: new_version,
        bump,
        commits,
        warnings,
        updated_files,
        changelog_entry: prepared.entry_text,
        release_notes: prepared.release_notes,
        dry_run: args.dry_run,
    })
}

/// A missing changelog reads as empty; any other failure is fatal.
fn read_changelog(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(ShipnoteError::io(path, e)),
    }
}

fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ShipnoteError::io(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote document");
    Ok(())
}
