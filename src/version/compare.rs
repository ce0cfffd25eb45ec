//! Loose version comparison tolerant of development suffixes

use crate::version::error::VersionError;

/// A version string split into release integers and an optional
/// development segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    release: Vec<u64>,
    dev: Option<u64>,
}

impl ParsedVersion {
    /// Parse a version string, dropping local-build metadata after `+`.
    ///
    /// Examples:
    /// - "1.2.3" -> release [1, 2, 3], no development segment
    /// - "0.3.1.dev16+g83" -> release [0, 3, 1], development segment 16
    /// - "0.3.1dev16" -> release [0, 3, 1], development segment 16
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let version = version.split_once('+').map_or(version, |(head, _)| head);
        let (release, dev) = split_dev(version);

        let release = release
            .split('.')
            .map(parse_segment)
            .collect::<Result<Vec<u64>, _>>()?;
        let dev = dev.map(parse_segment).transpose()?;

        Ok(Self { release, dev })
    }

    /// The comparison key: release integers zero-padded to `width`, then
    /// the development segment (0 when absent).
    fn key(&self, width: usize) -> Vec<u64> {
        let mut key = self.release.clone();
        key.resize(width, 0);
        key.push(self.dev.unwrap_or(0));
        key
    }
}

/// Split a version into its release portion and development segment.
///
/// The marker is `.dev` when present, otherwise a bare `dev`, so both
/// "0.3.1.dev16" and "0.3.1dev16" yield ("0.3.1", Some("16")).
fn split_dev(version: &str) -> (&str, Option<&str>) {
    if let Some((release, dev)) = version.split_once(".dev") {
        (release, Some(dev))
    } else if let Some((release, dev)) = version.split_once("dev") {
        (release, Some(dev))
    } else {
        (version, None)
    }
}

fn parse_segment(segment: &str) -> Result<u64, VersionError> {
    segment
        .parse()
        .map_err(|source| VersionError::InvalidSegment {
            segment: segment.to_string(),
            source,
        })
}

/// Returns whether `v1` is greater than or equal to `v2`.
///
/// Release segments are zero-padded to equal length and compared left to
/// right, with the development segment as the final component. Equal
/// versions compare as greater-or-equal. A development build outranks the
/// bare release at the same base (0.3.1.dev16 >= 0.3.1); local-build
/// suffixes (+...) never affect the result.
pub fn version_ge(v1: &str, v2: &str) -> Result<bool, VersionError> {
    let v1 = ParsedVersion::parse(v1)?;
    let v2 = ParsedVersion::parse(v2)?;

    let width = v1.release.len().max(v2.release.len());
    Ok(v1.key(width) >= v2.key(width))
}
