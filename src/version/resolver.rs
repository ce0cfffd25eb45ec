//! Installed-version resolution trait

#[cfg(test)]
use mockall::automock;

/// Trait for resolving the installed version of a package
///
/// Implementations answer "which version of this package is installed in
/// the host environment". A package that cannot be resolved yields `None`;
/// resolution failure is never an error.
#[cfg_attr(test, automock)]
pub trait VersionResolver: Send + Sync {
    /// Returns the installed version string for a package, if any
    fn installed_version(&self, package: &str) -> Option<String>;
}
