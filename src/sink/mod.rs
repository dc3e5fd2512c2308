//! Build-environment propagation of the released version
//!
//! After a successful release the new version is pushed into a
//! [VersionSink]. The concrete implementations are:
//!
//! - [env_file::EnvFileSink]: writes `NEW_VERSION=...` to a local env file and,
//!   when a CI environment file is configured, appends the same line to it
//! - [mock::RecordingSink]: keeps published versions in memory for tests
//!
//! ```rust
//! # use shipnote::sink::{RecordingSink, VersionSink};
//! let sink = RecordingSink::new();
//! sink.publish("1.3.0").unwrap();
//! assert_eq!(sink.published(), vec!["1.3.0".to_string()]);
//! ```

pub mod env_file;
pub mod mock;

pub use env_file::EnvFileSink;
pub use mock::RecordingSink;

use crate::error::Result;

/// Variable name written to environment files
pub const VERSION_VARIABLE: &str = "NEW_VERSION";

/// The line every sink records: `NEW_VERSION=1.3.0\n`
pub fn env_line(version: &str) -> String {
    format!("{}={}\n", VERSION_VARIABLE, version)
}

/// Receiver of the final version string of a release
pub trait VersionSink {
    /// Record `version` as the released version
    fn publish(&self, version: &str) -> Result<()>;
}
