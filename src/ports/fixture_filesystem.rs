//! Filesystem operations used by fixture resolution and scaffolding.
//!
//! Resolution and generation go through this port instead of `std::fs`.

use std::path::Path;

use crate::domain::AppError;

/// Port for the handful of filesystem operations this crate performs.
///
/// All paths are absolute or relative to the process working directory.
/// Failures carry the offending path in the returned [`AppError`].
pub trait FixtureFilesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read raw bytes. Fails with `AppError::Read`.
    fn read(&self, path: &Path) -> Result<Vec<u8>, AppError>;

    /// Read a file as UTF-8 text. Fails with `AppError::Read`.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Create a directory and all missing parents. Fails with `AppError::CreateDirectory`.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Write UTF-8 content, replacing any existing file. Fails with `AppError::Write`.
    ///
    /// The parent directory must already exist.
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
