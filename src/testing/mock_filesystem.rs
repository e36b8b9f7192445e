//! In-memory `FixtureFilesystem` with failure injection.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::FixtureFilesystem;

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
    read_only_dirs: BTreeSet<PathBuf>,
    mutations: usize,
}

/// In-memory filesystem for unit tests.
///
/// Clones share the same backing state, so a test can keep a handle for
/// seeding and inspection while production code owns another.
#[derive(Clone, Debug, Default)]
pub struct MockFilesystem {
    state: Arc<Mutex<State>>,
}

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its ancestors as directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = path.as_ref().to_path_buf();
        let mut state = self.state.lock().unwrap();
        if let Some(parent) = path.parent() {
            insert_ancestors(&mut state.dirs, parent);
        }
        state.files.insert(path, content.as_ref().to_vec());
    }

    /// Seed a directory and its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        insert_ancestors(&mut state.dirs, path.as_ref());
    }

    /// Make reads of `path` fail with `PermissionDenied`.
    pub fn deny_read(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().unreadable.insert(path.as_ref().to_path_buf());
    }

    /// Make creating entries directly inside `dir` fail with `PermissionDenied`.
    pub fn deny_write(&self, dir: impl AsRef<Path>) {
        self.state.lock().unwrap().read_only_dirs.insert(dir.as_ref().to_path_buf());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    pub fn file_text(&self, path: impl AsRef<Path>) -> Option<String> {
        self.file(path).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().dirs.contains(path.as_ref())
    }

    /// Number of successful create/write calls made through the port.
    pub fn mutations(&self) -> usize {
        self.state.lock().unwrap().mutations
    }
}

fn insert_ancestors(dirs: &mut BTreeSet<PathBuf>, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        dirs.insert(ancestor.to_path_buf());
    }
}

fn permission_denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")
}

impl FixtureFilesystem for MockFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        let state = self.state.lock().unwrap();
        if state.unreadable.contains(path) {
            return Err(AppError::read(path, permission_denied()));
        }
        state.files.get(path).cloned().ok_or_else(|| {
            AppError::read(path, io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::read(path, io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        for ancestor in path.ancestors().collect::<Vec<_>>().into_iter().rev() {
            if ancestor.as_os_str().is_empty() || state.dirs.contains(ancestor) {
                continue;
            }
            if state.files.contains_key(ancestor) {
                return Err(AppError::create_directory(
                    path,
                    io::Error::new(io::ErrorKind::AlreadyExists, "file exists"),
                ));
            }
            if ancestor.parent().is_some_and(|parent| state.read_only_dirs.contains(parent)) {
                return Err(AppError::create_directory(path, permission_denied()));
            }
            state.dirs.insert(ancestor.to_path_buf());
        }
        state.mutations += 1;
        Ok(())
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        let parent = path.parent().unwrap_or(Path::new(""));
        if !parent.as_os_str().is_empty() && !state.dirs.contains(parent) {
            return Err(AppError::write(
                path,
                io::Error::new(io::ErrorKind::NotFound, "parent directory missing"),
            ));
        }
        if state.read_only_dirs.contains(parent) || state.dirs.contains(path) {
            return Err(AppError::write(path, permission_denied()));
        }
        state.files.insert(path.to_path_buf(), content.as_bytes().to_vec());
        state.mutations += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_file_is_readable_and_its_parents_are_dirs() {
        let fs = MockFilesystem::new();
        fs.add_file("/base/Example/json/customers/success.json", "{}");

        assert!(fs.is_dir(Path::new("/base/Example/json/customers")));
        assert!(fs.is_dir(Path::new("/base")));
        assert_eq!(fs.read(Path::new("/base/Example/json/customers/success.json")).unwrap(), b"{}");
    }

    #[test]
    fn read_only_dir_blocks_children() {
        let fs = MockFilesystem::new();
        fs.add_dir("/p/tests/Fixtures");
        fs.deny_write("/p/tests/Fixtures");

        assert!(fs.create_dir_all(Path::new("/p/tests/Fixtures/X")).is_err());
        assert!(fs.write(Path::new("/p/tests/Fixtures/x.rs"), "x").is_err());
        assert_eq!(fs.mutations(), 0);
    }
}
