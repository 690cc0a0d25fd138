use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{BumpError, Result};

/// Represents the type of semantic version bump to apply.
///
/// Used to determine how to increment version numbers based on diff analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

/// Parses a semantic version string from a manifest.
///
/// # Arguments
/// * `version` - Version string to parse (e.g., "1.2.3")
///
/// # Returns
/// * `Ok(Version)` - Successfully parsed version
/// * `Err` - If the string is not a valid semantic version
pub fn parse_version(version: &str) -> Result<Version> {
    Version::parse(version)
        .map_err(|e| BumpError::version(format!("Invalid version '{}': {}", version, e)))
}

/// Bumps a version according to the specified bump type.
///
/// Increments the appropriate version component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// Pre-release and build metadata are cleared in all cases, per semantic-version
/// increment rules.
pub fn bump_version(version: &Version, bump_type: &VersionBump) -> Version {
    let mut bumped = version.clone();

    match bump_type {
        VersionBump::Major => {
            bumped.major += 1;
            bumped.minor = 0;
            bumped.patch = 0;
        }
        VersionBump::Minor => {
            bumped.minor += 1;
            bumped.patch = 0;
        }
        VersionBump::Patch => {
            bumped.patch += 1;
        }
    }

    bumped.pre = Prerelease::EMPTY;
    bumped.build = BuildMetadata::EMPTY;
    bumped
}
