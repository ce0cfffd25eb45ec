//! Resolver backed by Python dist-info metadata directories

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::site_packages_dirs;
use crate::version::resolver::VersionResolver;

/// Resolves installed versions by scanning site-packages directories for
/// `<name>-<version>.dist-info` entries
///
/// The version is read from the `Version:` field of the dist-info
/// `METADATA` file, falling back to the version encoded in the directory
/// name. Unreadable directories or metadata degrade to an unresolved
/// package, never an error.
pub struct DistInfoResolver {
    site_packages: Vec<PathBuf>,
}

impl Default for DistInfoResolver {
    fn default() -> Self {
        Self::new(site_packages_dirs())
    }
}

impl DistInfoResolver {
    pub fn new(site_packages: Vec<PathBuf>) -> Self {
        Self { site_packages }
    }
}

impl VersionResolver for DistInfoResolver {
    fn installed_version(&self, package: &str) -> Option<String> {
        let wanted = normalize_name(package);

        for dir in &self.site_packages {
            let entries = match fs::read_dir(dir) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!("Skipping unreadable site-packages {:?}: {}", dir, e);
                    continue;
                }
            };

            for entry in entries.flatten() {
                let file_name = entry.file_name();
                let Some(dist_info) = file_name.to_str() else {
                    continue;
                };
                let Some((name, dir_version)) = split_dist_info(dist_info) else {
                    continue;
                };
                if normalize_name(name) != wanted {
                    continue;
                }

                debug!("Found {} in {:?}", dist_info, dir);
                return Some(
                    metadata_version(&entry.path())
                        .unwrap_or_else(|| dir_version.to_string()),
                );
            }
        }

        debug!(
            "Package {} not found in {} site-packages dir(s)",
            package,
            self.site_packages.len()
        );
        None
    }
}

/// Split a `<name>-<version>.dist-info` directory name into name and
/// version. Installers escape the name, so it never contains `-` itself.
fn split_dist_info(file_name: &str) -> Option<(&str, &str)> {
    file_name.strip_suffix(".dist-info")?.split_once('-')
}

/// Read the `Version:` field from a dist-info `METADATA` file.
fn metadata_version(dist_info: &Path) -> Option<String> {
    let metadata = match fs::read_to_string(dist_info.join("METADATA")) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!("Unreadable METADATA in {:?}: {}", dist_info, e);
            return None;
        }
    };

    metadata
        .lines()
        // header fields end at the first blank line
        .take_while(|line| !line.is_empty())
        .find_map(|line| line.strip_prefix("Version:"))
        .map(|version| version.trim().to_string())
}

/// PEP 503 name normalization: lowercase, with runs of `-`, `_` and `.`
/// replaced by a single `-`.
fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut last_was_sep = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !last_was_sep {
                normalized.push('-');
            }
            last_was_sep = true;
        } else {
            normalized.extend(c.to_lowercase());
            last_was_sep = false;
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn install_package(site: &Path, dist_info: &str, metadata: Option<&str>) {
        let dir = site.join(dist_info);
        fs::create_dir_all(&dir).unwrap();
        if let Some(metadata) = metadata {
            fs::write(dir.join("METADATA"), metadata).unwrap();
        }
    }

    fn resolver_over(site: &TempDir) -> DistInfoResolver {
        DistInfoResolver::new(vec![site.path().to_path_buf()])
    }

    #[test]
    fn installed_version_reads_metadata_version_field() {
        let site = TempDir::new().unwrap();
        install_package(
            site.path(),
            "requests-2.32.0.dist-info",
            Some("Metadata-Version: 2.1\nName: requests\nVersion: 2.32.0\n\nSome description\n"),
        );

        let resolver = resolver_over(&site);

        assert_eq!(
            resolver.installed_version("requests").as_deref(),
            Some("2.32.0")
        );
    }

    #[test]
    fn installed_version_ignores_version_lines_in_the_body() {
        let site = TempDir::new().unwrap();
        install_package(
            site.path(),
            "demo-1.0.0.dist-info",
            Some("Metadata-Version: 2.1\nName: demo\n\nVersion: 9.9.9 appears in the description\n"),
        );

        let resolver = resolver_over(&site);

        // no Version header before the blank line, so the directory name wins
        assert_eq!(resolver.installed_version("demo").as_deref(), Some("1.0.0"));
    }

    #[test]
    fn installed_version_falls_back_to_directory_name() {
        let site = TempDir::new().unwrap();
        install_package(site.path(), "requests-2.31.0.dist-info", None);

        let resolver = resolver_over(&site);

        assert_eq!(
            resolver.installed_version("requests").as_deref(),
            Some("2.31.0")
        );
    }

    #[rstest]
    #[case("typing-extensions")]
    #[case("Typing_Extensions")]
    #[case("typing.extensions")]
    #[case("TYPING__EXTENSIONS")]
    fn installed_version_normalizes_package_names(#[case] queried: &str) {
        let site = TempDir::new().unwrap();
        install_package(
            site.path(),
            "typing_extensions-4.8.0.dist-info",
            Some("Metadata-Version: 2.1\nName: typing_extensions\nVersion: 4.8.0\n"),
        );

        let resolver = resolver_over(&site);

        assert_eq!(
            resolver.installed_version(queried).as_deref(),
            Some("4.8.0")
        );
    }

    #[test]
    fn installed_version_returns_none_for_missing_package() {
        let site = TempDir::new().unwrap();
        install_package(site.path(), "requests-2.32.0.dist-info", None);

        let resolver = resolver_over(&site);

        assert_eq!(resolver.installed_version("flask"), None);
    }

    #[test]
    fn installed_version_returns_none_for_nonexistent_directory() {
        let resolver = DistInfoResolver::new(vec![PathBuf::from("/no/such/site-packages")]);

        assert_eq!(resolver.installed_version("requests"), None);
    }

    #[test]
    fn installed_version_ignores_non_dist_info_entries() {
        let site = TempDir::new().unwrap();
        fs::create_dir_all(site.path().join("requests")).unwrap();
        fs::write(site.path().join("requests-2.32.0.egg-link"), "").unwrap();

        let resolver = resolver_over(&site);

        assert_eq!(resolver.installed_version("requests"), None);
    }

    #[test]
    fn installed_version_searches_directories_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        install_package(
            first.path(),
            "demo-2.0.0.dist-info",
            Some("Metadata-Version: 2.1\nName: demo\nVersion: 2.0.0\n"),
        );
        install_package(
            second.path(),
            "demo-1.0.0.dist-info",
            Some("Metadata-Version: 2.1\nName: demo\nVersion: 1.0.0\n"),
        );

        let resolver = DistInfoResolver::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);

        assert_eq!(resolver.installed_version("demo").as_deref(), Some("2.0.0"));
    }

    #[rstest]
    #[case("requests", "requests")]
    #[case("Django", "django")]
    #[case("typing_extensions", "typing-extensions")]
    #[case("zope.interface", "zope-interface")]
    #[case("a--_.b", "a-b")]
    fn normalize_name_returns_canonical_form(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(normalize_name(name), expected);
    }
}
