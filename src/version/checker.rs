//! Package inspection against a minimum version

use serde::{Serialize, Serializer};

use crate::version::compare::version_ge;
use crate::version::error::VersionError;
use crate::version::resolver::VersionResolver;

/// Language tag carried by every report
const LANGUAGE: &str = "python";

/// Whether the installed version satisfies the requested minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Satisfaction {
    /// Installed version is at least the minimum
    Satisfied,
    /// Installed version is below the minimum
    Unsatisfied,
    /// No minimum was requested, or the package could not be resolved
    Indeterminate,
}

impl Satisfaction {
    /// The tri-state as an optional boolean (`None` = indeterminate)
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Satisfaction::Satisfied => Some(true),
            Satisfaction::Unsatisfied => Some(false),
            Satisfaction::Indeterminate => None,
        }
    }
}

// Serialized as true/false/null rather than as a variant name.
impl Serialize for Satisfaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_bool().serialize(serializer)
    }
}

/// Result of inspecting an installed package
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PackageReport {
    /// Ecosystem the package belongs to
    pub language: &'static str,
    /// Queried package name
    pub package: String,
    /// Installed version, if the package resolved
    pub version: Option<String>,
    /// Requested minimum version, if any
    pub min_version: Option<String>,
    /// Whether the installed version meets the minimum
    pub at_least_min_version: Satisfaction,
}

/// Inspect a package and report whether it meets a minimum version.
///
/// An unresolvable package yields an indeterminate report, never an
/// error. A malformed version string propagates as [`VersionError`].
pub fn check_package_version<R: VersionResolver>(
    resolver: &R,
    package: &str,
    min_version: Option<&str>,
) -> Result<PackageReport, VersionError> {
    let version = resolver.installed_version(package);

    let at_least_min_version = match (&version, min_version) {
        (Some(version), Some(min_version)) => {
            if version_ge(version, min_version)? {
                Satisfaction::Satisfied
            } else {
                Satisfaction::Unsatisfied
            }
        }
        _ => Satisfaction::Indeterminate,
    };

    Ok(PackageReport {
        language: LANGUAGE,
        package: package.to_string(),
        version,
        min_version: min_version.map(|s| s.to_string()),
        at_least_min_version,
    })
}
