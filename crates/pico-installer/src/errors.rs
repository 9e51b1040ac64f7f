use std::io;
use thiserror::Error;

/// Errors that can occur while resolving install locations
#[derive(Error, Debug)]
pub enum InstallerError {
    #[error("unsupported package type '{0}'")]
    UnsupportedPackageType(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
