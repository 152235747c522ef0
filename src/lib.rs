#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Dependency resolution core for swiftpack.
//!
//! Maps import specifiers (bare packages, relative paths, absolute paths)
//! to files on disk and extracts entry metadata from package descriptors.

pub mod dependency;
pub mod error;
pub mod version;

pub use dependency::resolver::{
    file_exists, read_package_info, resolve_dependency, resolve_package_entry, DESCRIPTOR_FILE,
};
pub use dependency::types::{
    DependencyGraph, DependencyInfo, DependencyType, ImportKind, ImportStatement, PackageInfo,
    ResolveResult, ScanOptions, SourceLocation,
};
pub use error::Error;
pub use version::VERSION;
