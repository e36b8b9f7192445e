use crate::domain::AppError;

/// Name of the built-in resolver template.
pub const RESOLVER_TEMPLATE: &str = "resolver.rs.j2";

/// A template body together with the name it is registered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Name used in render error messages.
    pub name: String,
    /// Raw template text.
    pub content: String,
}

/// Port for accessing the templates that generated resolvers are rendered from.
pub trait TemplateStore {
    /// Get the default resolver template.
    fn resolver_template(&self) -> Result<TemplateSource, AppError>;
}
