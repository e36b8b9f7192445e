use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::{RESOLVER_TEMPLATE, TemplateSource, TemplateStore};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Template store backed by the templates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn resolver_template(&self) -> Result<TemplateSource, AppError> {
        load_embedded(RESOLVER_TEMPLATE)
    }
}

fn load_embedded(name: &str) -> Result<TemplateSource, AppError> {
    let content = TEMPLATES_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::Template {
            name: name.to_string(),
            details: "embedded template is missing".to_string(),
        })?;

    Ok(TemplateSource { name: name.to_string(), content: content.to_string() })
}
