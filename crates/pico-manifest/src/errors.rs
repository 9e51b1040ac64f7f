use std::io;
use thiserror::Error;

/// Errors that can occur during plugin manifest operations
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid package name '{0}'")]
    InvalidPackageName(String),

    #[error("invalid installer name '{name}' for package '{package}'")]
    InvalidInstallerName { package: String, name: String },

    #[error("invalid class name '{name}' for package '{package}'")]
    InvalidClassName { package: String, name: String },

    #[error("failed to parse manifest: {0}")]
    Parse(String),
}
