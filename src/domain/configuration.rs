//! Project configuration loaded from `apimocker.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Root of `apimocker.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Scaffold generation settings.
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
}

impl ProjectConfig {
    /// Parse configuration from TOML content and validate it.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: ProjectConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.scaffold.validate()
    }
}

/// `[scaffold]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Extension of the generated resolver file, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Template override, relative to the project root.
    #[serde(default)]
    pub template: Option<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self { extension: default_extension(), template: None }
    }
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.extension.is_empty() {
            return Err(AppError::InvalidConfig("scaffold.extension must not be empty".to_string()));
        }
        if self.extension.contains(['.', '/', '\\']) {
            return Err(AppError::InvalidConfig(format!(
                "scaffold.extension '{}' must not contain '.', '/' or '\\'",
                self.extension
            )));
        }
        if self.template.as_deref() == Some("") {
            return Err(AppError::InvalidConfig("scaffold.template must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_extension() -> String {
    "rs".to_string()
}
