use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for apimocker operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller supplied an unusable argument (empty provider name, unresolvable base dir).
    #[error("{0}")]
    InvalidArgument(String),

    /// No fixture file exists at the computed path.
    #[error("Fixture file not found: {}", path.display())]
    FixtureNotFound { path: PathBuf },

    /// No registered resolver supports the requested provider.
    #[error("No resolver found for provider: {0}")]
    ResolverNotFound(String),

    /// No resolver type is registered under the conventional name.
    #[error("Resolver type not found: {0}")]
    ResolverTypeNotFound(String),

    /// A registered entry does not implement the resolver contract.
    #[error("Resolver type {0} must implement FixtureSource")]
    TypeMismatch(String),

    /// File exists but could not be read.
    #[error("Failed to read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Fixture content could not be decoded into the requested shape.
    #[error("Failed to decode fixture {}: {details}", path.display())]
    Decode { path: PathBuf, details: String },

    /// Directory could not be created, or a non-directory occupies its path.
    #[error("Failed to create directory: {}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Target file could not be written.
    #[error("Failed to write file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template could not be registered or rendered.
    #[error("Failed to render template '{name}': {details}")]
    Template { name: String, details: String },

    /// Configuration values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Coarse error taxonomy shared by the library and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    NotFound,
    Read,
    Write,
    TypeMismatch,
}

impl AppError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        AppError::InvalidArgument(message.into())
    }

    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Read { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Write { path: path.into(), source }
    }

    pub fn create_directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::CreateDirectory { path: path.into(), source }
    }

    /// Classify the error into the taxonomy callers match on.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::InvalidArgument(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParse(_)
            | AppError::Template { .. } => ErrorCategory::InvalidArgument,
            AppError::FixtureNotFound { .. }
            | AppError::ResolverNotFound(_)
            | AppError::ResolverTypeNotFound(_) => ErrorCategory::NotFound,
            AppError::Read { .. } | AppError::Decode { .. } => ErrorCategory::Read,
            AppError::CreateDirectory { .. } | AppError::Write { .. } => ErrorCategory::Write,
            AppError::TypeMismatch(_) => ErrorCategory::TypeMismatch,
        }
    }

    /// Closest `io::ErrorKind`, for callers that branch on I/O error kinds.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Read { source, .. }
            | AppError::Write { source, .. }
            | AppError::CreateDirectory { source, .. } => source.kind(),
            AppError::InvalidArgument(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParse(_)
            | AppError::Template { .. } => io::ErrorKind::InvalidInput,
            AppError::FixtureNotFound { .. }
            | AppError::ResolverNotFound(_)
            | AppError::ResolverTypeNotFound(_) => io::ErrorKind::NotFound,
            AppError::Decode { .. } | AppError::TypeMismatch(_) => io::ErrorKind::InvalidData,
        }
    }
}
