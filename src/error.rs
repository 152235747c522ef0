use std::path::PathBuf;
use thiserror::Error;

/// Core error type for swiftpack resolution.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot find package \"{specifier}\" in {}/node_modules", .root.display())]
    PackageNotFound { specifier: String, root: PathBuf },

    #[error("Failed to read package descriptor at {path}: {source}")]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse package descriptor at {path}: {source}")]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
