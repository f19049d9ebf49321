//! Numeric versions for catalog schemas and extractors

use std::fmt;
use std::str::FromStr;

use crate::error::TranslateError;

/// A `major.minor.patch` version; missing trailing components are zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }
}

impl FromStr for Version {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TranslateError::InvalidVersion(s.to_string());

        let mut parts = [0u64; 3];
        let mut count = 0;
        for component in s.trim().split('.') {
            if count == parts.len() || component.is_empty() {
                return Err(invalid());
            }
            parts[count] = component.parse().map_err(|_| invalid())?;
            count += 1;
        }

        Ok(Version::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Half-open version range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub min: Version,
    pub max: Version,
}

impl VersionRange {
    pub const fn new(min: Version, max: Version) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, version: &Version) -> bool {
        self.min <= *version && *version < self.max
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}
