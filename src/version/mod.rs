//! Version comparison and package inspection
//!
//! This module provides the core functionality for comparing loose
//! version strings and reporting whether an installed package meets a
//! minimum version.
//!
//! # Modules
//!
//! - [`checker`]: Package inspection and the tri-state satisfaction report
//! - [`compare`]: Loose version comparison tolerant of development suffixes
//! - [`error`]: Error type for malformed version strings
//! - [`resolver`]: Installed-version resolution trait
//! - [`resolvers`]: Concrete resolver implementations (dist-info)

pub mod checker;
pub mod compare;
pub mod error;
pub mod resolver;
pub mod resolvers;
