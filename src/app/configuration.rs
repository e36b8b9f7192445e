//! Project configuration loading.

use std::path::Path;

use crate::domain::{AppError, ProjectConfig, paths};
use crate::ports::FixtureFilesystem;

/// Load `apimocker.toml` from the project root, falling back to defaults when absent.
pub fn load_project_config(
    fs: &impl FixtureFilesystem,
    root: &Path,
) -> Result<ProjectConfig, AppError> {
    let path = paths::config(root);
    if !fs.exists(&path) {
        return Ok(ProjectConfig::default());
    }

    let content = fs.read_to_string(&path)?;
    ProjectConfig::parse_toml(&content)
}
