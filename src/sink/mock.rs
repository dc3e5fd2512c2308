use std::sync::Mutex;

use super::VersionSink;
use crate::error::Result;

/// Sink that remembers every published version, for tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    published: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Versions published so far, oldest first
    pub fn published(&self) -> Vec<String> {
        self.published
            .lock()
            .map(|versions| versions.clone())
            .unwrap_or_default()
    }
}

impl VersionSink for RecordingSink {
    fn publish(&self, version: &str) -> Result<()> {
        if let Ok(mut versions) = self.published.lock() {
            versions.push(version.to_string());
        }
        Ok(())
    }
}
