use crate::error::{Result, ShipnoteError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)").expect("Invalid regex"));

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse the leading `X.Y.Z` of a version string.
    ///
    /// Anything after the third numeric group (pre-release, build metadata)
    /// is discarded: `"1.2.3-rc.1+build"` parses as `1.2.3`.
    pub fn parse(input: &str) -> Result<Self> {
        Self::split(input).map(|(version, _)| version)
    }

    /// Like [`Version::parse`], also returning the text after `X.Y.Z`.
    pub fn split(input: &str) -> Result<(Self, &str)> {
        let captures = VERSION_REGEX
            .captures(input)
            .ok_or_else(|| ShipnoteError::MalformedVersion(input.to_string()))?;

        let component = |index: usize| -> Result<u32> {
            captures
                .get(index)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .ok_or_else(|| ShipnoteError::MalformedVersion(input.to_string()))
        };

        let version = Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        };
        let rest = captures
            .get(0)
            .map_or("", |m| &input[m.end()..]);
        Ok((version, rest))
    }

    /// Bump version according to bump type.
    ///
    /// Fails with `VersionOverflow` when the bumped component would not fit.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow = || ShipnoteError::VersionOverflow {
            version: self.to_string(),
            bump: bump_type.to_string(),
        };

        let bumped = match bump_type {
            VersionBump::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        };
        Ok(bumped)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ShipnoteError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Magnitude of a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionBump {
    Major,
    Minor,
    #[default]
    Patch,
}

impl FromStr for VersionBump {
    type Err = ShipnoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            other => Err(ShipnoteError::InvalidBumpType(other.to_string())),
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(name)
    }
}
