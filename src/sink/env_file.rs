use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{env_line, VersionSink};
use crate::error::{Result, ShipnoteError};

/// Writes the released version to env files
#[derive(Debug, Clone, PartialEq)]
pub struct EnvFileSink {
    local: PathBuf,
    ci_env_file: Option<PathBuf>,
}

impl EnvFileSink {
    pub fn new(local: impl Into<PathBuf>, ci_env_file: Option<PathBuf>) -> Self {
        EnvFileSink {
            local: local.into(),
            ci_env_file,
        }
    }

    /// Build a sink whose CI file is taken from the environment variable
    /// `ci_env_var` (for instance `GITHUB_ENV`). An unset or empty variable
    /// means no CI file.
    pub fn from_env(local: impl Into<PathBuf>, ci_env_var: &str) -> Self {
        let ci_env_file = std::env::var_os(ci_env_var)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(local, ci_env_file)
    }

    pub fn local_path(&self) -> &Path {
        &self.local
    }

    pub fn ci_env_file(&self) -> Option<&Path> {
        self.ci_env_file.as_deref()
    }
}

impl VersionSink for EnvFileSink {
    fn publish(&self, version: &str) -> Result<()> {
        let line = env_line(version);

        fs::write(&self.local, &line).map_err(|e| ShipnoteError::io(&self.local, e))?;
        debug!(path = %self.local.display(), "wrote local env file");

        if let Some(ci_file) = &self.ci_env_file {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(ci_file)
                .map_err(|e| ShipnoteError::io(ci_file, e))?;
            file.write_all(line.as_bytes())
                .map_err(|e| ShipnoteError::io(ci_file, e))?;
            debug!(path = %ci_file.display(), "appended to CI env file");
        }

        Ok(())
    }
}
