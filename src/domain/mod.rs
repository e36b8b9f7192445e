pub mod configuration;
pub mod error;
pub mod paths;
pub mod provider;

pub use configuration::{ProjectConfig, ScaffoldConfig};
pub use error::{AppError, ErrorCategory};
pub use provider::{ProviderName, capitalize, conventional_type_name, provider_key};
