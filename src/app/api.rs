//! API Facade for the application.
//!
//! Glues context creation to command execution for library callers and the CLI.

use std::path::PathBuf;

use crate::adapters::{EmbeddedTemplateStore, LocalFilesystem};
use crate::app::{AppContext, commands::make};

pub use crate::app::commands::ScaffoldOutcome;
pub use crate::domain::AppError;

/// Create an `AppContext` for a given project root.
fn create_context(root: PathBuf) -> AppContext<LocalFilesystem, EmbeddedTemplateStore> {
    AppContext::new(root, LocalFilesystem::new(), EmbeddedTemplateStore::new())
}

/// Scaffold a fixture resolver for `provider` in the current directory.
pub fn make_resolver(provider: &str) -> Result<ScaffoldOutcome, AppError> {
    let root = std::env::current_dir().map_err(|e| {
        AppError::invalid_argument(format!("Failed to resolve current working directory: {}", e))
    })?;
    make_resolver_at(provider, root)
}

/// Scaffold a fixture resolver for `provider` under the given project root.
pub fn make_resolver_at(
    provider: &str,
    root: impl Into<PathBuf>,
) -> Result<ScaffoldOutcome, AppError> {
    let ctx = create_context(root.into());
    make::execute(&ctx, provider)
}
