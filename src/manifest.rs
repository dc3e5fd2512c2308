//! The JSON document that holds the project's current version.
//!
//! Only the `version` field is interpreted; every other field is carried
//! through unchanged and in its original order.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{Result, ShipnoteError};

const VERSION_KEY: &str = "version";

#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    /// Parse manifest text. The document must be a JSON object with a string
    /// `version` field.
    pub fn parse(content: &str) -> Result<Self> {
        let fields = parse_fields(content).map_err(ShipnoteError::Manifest)?;
        Ok(Manifest { fields })
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ShipnoteError::io(path, e))?;
        let fields = parse_fields(&content)
            .map_err(|msg| ShipnoteError::manifest(format!("{}: {}", path.display(), msg)))?;
        Ok(Manifest { fields })
    }

    pub fn version(&self) -> &str {
        self.fields
            .get(VERSION_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.fields
            .insert(VERSION_KEY.to_string(), Value::String(version.into()));
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut content = serde_json::to_string_pretty(&self.fields)
            .map_err(|e| ShipnoteError::manifest(format!("serialization failed: {}", e)))?;
        content.push('\n');
        Ok(content)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let content = self.to_pretty_string()?;
        fs::write(path, content).map_err(|e| ShipnoteError::io(path, e))
    }
}

fn parse_fields(content: &str) -> std::result::Result<Map<String, Value>, String> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {}", e))?;

    let fields = match value {
        Value::Object(fields) => fields,
        _ => return Err("top level must be a JSON object".to_string()),
    };

    match fields.get(VERSION_KEY) {
        Some(Value::String(_)) => Ok(fields),
        Some(_) => Err("'version' must be a string".to_string()),
        None => Err("missing 'version' field".to_string()),
    }
}
