use std::fs;
use std::path::{Path, PathBuf};

/// Returns the site-packages directories to scan for installed packages.
/// Uses $VIRTUAL_ENV/lib/python*/site-packages when a virtualenv is
/// active, otherwise the user site under ~/.local/lib.
pub fn site_packages_dirs() -> Vec<PathBuf> {
    site_packages_with_env(std::env::var("VIRTUAL_ENV").ok(), dirs::home_dir())
}

fn site_packages_with_env(
    virtual_env: Option<String>,
    home_dir: Option<PathBuf>,
) -> Vec<PathBuf> {
    let lib_root = virtual_env
        .map(|venv| PathBuf::from(venv).join("lib"))
        .or_else(|| home_dir.map(|home| home.join(".local/lib")));

    match lib_root {
        Some(root) => python_site_dirs(&root),
        None => Vec::new(),
    }
}

/// Collect `<lib_root>/python*/site-packages` directories, sorted for a
/// deterministic scan order.
fn python_site_dirs(lib_root: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(lib_root) else {
        return Vec::new();
    };

    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with("python"))
        })
        .map(|entry| entry.path().join("site-packages"))
        .filter(|path| path.is_dir())
        .collect();

    dirs.sort();
    dirs
}
