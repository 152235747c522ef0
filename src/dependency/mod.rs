//! Dependency discovery and resolution.
//!
//! `types` defines the shared vocabulary consumed by the resolver and by
//! a dependency scanner; `resolver` maps import specifiers to files on disk.

pub mod resolver;
pub mod types;
