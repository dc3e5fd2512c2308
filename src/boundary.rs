use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions met while preparing a release.
/// The release still goes ahead; these are reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No commit messages were supplied
    NoCommits,
    /// The changelog has no `## [` entry to insert above, so the new entry
    /// was appended at the end
    ChangelogHeaderMissing { path: PathBuf },
    /// The manifest version carried text after `X.Y.Z` that was discarded
    VersionSuffixDropped { original: String, kept: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoCommits => {
                write!(f, "No commits supplied; the release will have an empty changelog entry")
            }
            BoundaryWarning::ChangelogHeaderMissing { path } => {
                write!(
                    f,
                    "No existing version entry found in '{}'; new entry appended at the end",
                    path.display()
                )
            }
            BoundaryWarning::VersionSuffixDropped { original, kept } => {
                write!(
                    f,
                    "Version '{}' has pre-release or build text; continuing from '{}'",
                    original, kept
                )
            }
        }
    }
}
