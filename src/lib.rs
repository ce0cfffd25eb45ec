//! Check installed Python package versions against minimum requirements
//!
//! The [`version`] module holds the version comparator and the package
//! inspector; [`config`] locates the site-packages directories to scan.

pub mod config;
pub mod version;
