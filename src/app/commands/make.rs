//! Scaffold a fixture resolver under `tests/Fixtures/<Provider>/`.

use std::io;
use std::path::{Path, PathBuf};

use minijinja::context;

use crate::adapters::template_engine::render_template;
use crate::app::AppContext;
use crate::app::configuration::load_project_config;
use crate::domain::{AppError, ProviderName, ScaffoldConfig, paths};
use crate::ports::{FixtureFilesystem, TemplateSource, TemplateStore};

/// Outcome of a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// Capitalized provider name, also the directory name.
    pub provider: String,
    /// Name of the generated resolver type.
    pub type_name: String,
    /// `tests/Fixtures/<Provider>/json`
    pub json_dir: PathBuf,
    /// Absolute path of the generated resolver file.
    pub resolver_file: PathBuf,
    relative_file: PathBuf,
}

impl ScaffoldOutcome {
    /// Resolver file path relative to the project root.
    pub fn display_path(&self) -> String {
        self.relative_file.display().to_string()
    }
}

pub fn execute<F, T>(ctx: &AppContext<F, T>, name: &str) -> Result<ScaffoldOutcome, AppError>
where
    F: FixtureFilesystem,
    T: TemplateStore,
{
    let name = ProviderName::new(name)?;

    let root = ctx.root();
    if root.as_os_str().is_empty() {
        return Err(AppError::invalid_argument("Failed to resolve current working directory."));
    }

    let config = load_project_config(ctx.filesystem(), root)?;
    let template = load_template(ctx, &config.scaffold)?;

    let provider = name.capitalized();
    let type_name = name.type_name();

    let provider_dir = paths::provider_dir(root, &provider);
    let json_dir = paths::provider_json_dir(root, &provider);
    ensure_dir(ctx.filesystem(), &provider_dir)?;
    ensure_dir(ctx.filesystem(), &json_dir)?;

    let content = render_template(
        &template,
        &context! { type_name => &type_name, provider_name => &provider },
    )?;

    let resolver_file =
        paths::resolver_file(root, &provider, &type_name, &config.scaffold.extension);
    ctx.filesystem().write(&resolver_file, &content)?;

    let relative_file = Path::new(paths::FIXTURES_DIR)
        .join(&provider)
        .join(format!("{}.{}", type_name, config.scaffold.extension));

    Ok(ScaffoldOutcome { provider, type_name, json_dir, resolver_file, relative_file })
}

fn load_template<F, T>(
    ctx: &AppContext<F, T>,
    config: &ScaffoldConfig,
) -> Result<TemplateSource, AppError>
where
    F: FixtureFilesystem,
    T: TemplateStore,
{
    match &config.template {
        Some(relative) => {
            let content = ctx.filesystem().read_to_string(&ctx.root().join(relative))?;
            Ok(TemplateSource { name: relative.clone(), content })
        }
        None => ctx.templates().resolver_template(),
    }
}

/// Create `dir` unless it already exists as a directory.
fn ensure_dir(fs: &impl FixtureFilesystem, dir: &Path) -> Result<(), AppError> {
    if fs.is_dir(dir) {
        return Ok(());
    }
    if fs.exists(dir) {
        return Err(AppError::create_directory(
            dir,
            io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
        ));
    }
    fs.create_dir_all(dir)
}
