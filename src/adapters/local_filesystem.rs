//! `FixtureFilesystem` implementation backed by `std::fs`.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::FixtureFilesystem;

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl FixtureFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        fs::read(path).map_err(|source| AppError::read(path, source))
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|source| AppError::read(path, source))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        if path.exists() && !path.is_dir() {
            return Err(AppError::create_directory(
                path,
                io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
            ));
        }
        fs::create_dir_all(path).map_err(|source| AppError::create_directory(path, source))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|source| AppError::write(path, source))
    }
}
