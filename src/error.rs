use miette::Diagnostic;
use thiserror::Error;

/// Main error type for launchgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum LaunchError {
    #[error("Invalid {what}: {value} (must be greater than zero)")]
    #[diagnostic(code(launchgen::dimension))]
    InvalidDimension { what: &'static str, value: u32 },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(launchgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Manifest error with {path}: {message}")]
    #[diagnostic(code(launchgen::manifest))]
    Manifest {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LaunchError>;

/// Reject zero-sized canvas dimensions.
pub fn ensure_dimension(what: &'static str, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(LaunchError::InvalidDimension { what, value });
    }
    Ok(value)
}
