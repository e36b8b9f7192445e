use std::path::{Path, PathBuf};

use crate::ports::{FixtureFilesystem, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: FixtureFilesystem, T: TemplateStore> {
    root: PathBuf,
    filesystem: F,
    templates: T,
}

impl<F: FixtureFilesystem, T: TemplateStore> AppContext<F, T> {
    /// Create a new application context rooted at a project directory.
    pub fn new(root: impl Into<PathBuf>, filesystem: F, templates: T) -> Self {
        Self { root: root.into(), filesystem, templates }
    }

    /// Project root that scaffold paths are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
