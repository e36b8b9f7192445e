use minijinja::{Environment, Value};

use crate::domain::AppError;
use crate::ports::TemplateSource;

/// Render a single template with the given context.
pub fn render_template(source: &TemplateSource, ctx: &Value) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);

    env.add_template(&source.name, &source.content).map_err(|e| AppError::Template {
        name: source.name.clone(),
        details: format!("failed to register: {}", e),
    })?;

    let template = env.get_template(&source.name).map_err(|e| AppError::Template {
        name: source.name.clone(),
        details: format!("failed to load: {}", e),
    })?;

    template
        .render(ctx)
        .map_err(|e| AppError::Template { name: source.name.clone(), details: e.to_string() })
}
