//! # Trellis Client Version Compatibility
//!
//! Parsing and compatibility checking for the host library's version scheme.
//!
//! Version strings have the form `MAJOR[.MINOR[.PATCH]][-TAG]`. Major
//! version 0 releases carry only two numeric parts (`0.MINOR`); major
//! version 1 and above carry three (`MAJOR.MINOR.PATCH`). Any version may
//! end in a hyphen followed by a tag of one or more non-space characters.
//! Omitted minor and patch parts are filled in with zeros.
//!
//! This is deliberately not general semver: there are no ranges, carets, or
//! build metadata. Plugins declare the host version they were written
//! against and [`is_compatible`] decides whether the loaded host satisfies
//! that declaration.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Version of the currently loaded Trellis client library, in the scheme
/// parsed by this module. This is distinct from the Cargo package version,
/// whose three-part `0.x.y` form is not a valid string under the major-0
/// two-component rule.
pub const VERSION: &str = "0.6-dev";

/// Recoverable failure while parsing a version string.
///
/// Returned as a value; malformed input never panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("version section is empty")]
    EmptyVersion,
    #[error("invalid version tag: '{0}'")]
    InvalidTag(String),
    #[error("invalid version component: '{0}'")]
    InvalidComponent(String),
    #[error("too many version components: found {found}, at most {allowed} allowed for this major version")]
    TooManyComponents { found: usize, allowed: usize },
}

/// Fatal error raised when a compatibility check cannot proceed.
///
/// Compatibility gating is a load-time precondition: an unparseable current
/// version means a corrupted build, and an unparseable required string
/// means a caller error. Neither is recoverable, so the message names the
/// operation and carries the literal offending string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompatibilityError {
    #[error("is_compatible: library version number is invalid: {0}")]
    InvalidCurrentVersion(String),
    #[error("is_compatible: invalid version string: {0}")]
    InvalidRequiredVersion(String),
}

/// The structured form of a successfully parsed version string.
///
/// Immutable once constructed; only value equality is meaningful. The
/// component list is exactly 2 entries long for major-0 versions and
/// exactly 3 entries otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    components: Vec<u32>,
    tag: Option<String>,
}

impl ParsedVersion {
    /// The padded numeric components, length 2 (major 0) or 3.
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// The trailing tag, if the original string carried one.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn major(&self) -> u32 {
        self.components[0]
    }

    pub fn minor(&self) -> u32 {
        self.components[1]
    }

    /// Patch component; a major-0 version has no patch position and reads
    /// as 0 here.
    pub fn patch(&self) -> u32 {
        self.components.get(2).copied().unwrap_or(0)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .components
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(".");
        match &self.tag {
            Some(tag) => write!(f, "{}-{}", joined, tag),
            None => write!(f, "{}", joined),
        }
    }
}

impl FromStr for ParsedVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Parses a version string into its structured form.
///
/// The first hyphen, if any, separates the numeric section from the tag;
/// the tag itself may contain further hyphens (`"1.0-release-candidate"`
/// parses as version `1.0.0`, tag `release-candidate`). The numeric
/// section splits on `.` into non-negative integers, is rejected if it has
/// more parts than its major-version class allows, and is padded with
/// trailing zeros otherwise.
pub fn parse_version(input: &str) -> Result<ParsedVersion, VersionParseError> {
    let (numeric, tag) = match input.split_once('-') {
        Some((numeric, tag)) => (numeric, Some(tag)),
        None => (input, None),
    };

    if numeric.is_empty() {
        return Err(VersionParseError::EmptyVersion);
    }

    if let Some(tag) = tag {
        if tag.is_empty() || tag.contains(' ') {
            return Err(VersionParseError::InvalidTag(tag.to_string()));
        }
    }

    let mut components = Vec::with_capacity(3);
    for segment in numeric.split('.') {
        // u32 parsing rejects negatives, empty segments, and non-numerics.
        let value = segment
            .parse::<u32>()
            .map_err(|_| VersionParseError::InvalidComponent(segment.to_string()))?;
        components.push(value);
    }

    let required = if components[0] == 0 { 2 } else { 3 };
    if components.len() > required {
        return Err(VersionParseError::TooManyComponents {
            found: components.len(),
            allowed: required,
        });
    }
    components.resize(required, 0);

    Ok(ParsedVersion {
        components,
        tag: tag.map(str::to_string),
    })
}

/// Decides whether the `current` host version satisfies a plugin's
/// `required` version declaration.
///
/// Tagged versions and major-0 versions carry no stability guarantee, so if
/// either side has a tag or a zero major the versions must match exactly
/// (tag included). Otherwise the majors must be equal and the current
/// minor.patch must be at or above the required minor.patch.
///
/// Fails with [`CompatibilityError`] if either string does not parse; the
/// current string is checked first.
pub fn is_compatible(required: &str, current: &str) -> Result<bool, CompatibilityError> {
    let cur = parse_version(current)
        .map_err(|_| CompatibilityError::InvalidCurrentVersion(current.to_string()))?;
    let req = parse_version(required)
        .map_err(|_| CompatibilityError::InvalidRequiredVersion(required.to_string()))?;

    let exact = req.tag().is_some()
        || cur.tag().is_some()
        || req.major() == 0
        || cur.major() == 0;

    let compatible = if exact {
        req.tag() == cur.tag()
            && req.major() == cur.major()
            && req.minor() == cur.minor()
            && req.patch() == cur.patch()
    } else {
        req.major() == cur.major()
            && (req.minor() < cur.minor()
                || (req.minor() == cur.minor() && req.patch() <= cur.patch()))
    };

    Ok(compatible)
}

/// Load-time gate: checks `required` against the loaded library's own
/// [`VERSION`].
pub fn require_compatible(required: &str) -> Result<bool, CompatibilityError> {
    is_compatible(required, VERSION)
}
