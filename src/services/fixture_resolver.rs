//! Fixture resolution for a single provider.
//!
//! A fixture lives at `<base>/<Provider>/json/<endpoint>/<scenario>.json`,
//! where `<Provider>` is the provider name with its first character
//! upper-cased.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::adapters::LocalFilesystem;
use crate::domain::{AppError, paths, provider_key};
use crate::ports::FixtureFilesystem;

/// Capability contract shared by every fixture resolver.
pub trait FixtureSource {
    /// The provider identifier this resolver serves.
    fn provider(&self) -> &str;

    /// Directory that holds every provider's fixtures.
    fn base_path(&self) -> &Path;

    /// Read the raw fixture for `endpoint` and `scenario`.
    ///
    /// Fails with `AppError::FixtureNotFound` when the file does not exist and
    /// with `AppError::Read` when it exists but cannot be read.
    fn resolve(&self, endpoint: &str, scenario: &str) -> Result<Vec<u8>, AppError>;

    /// `<base>/<Provider>/json`
    fn fixture_root(&self) -> PathBuf {
        paths::fixture_root(self.base_path(), self.provider())
    }

    /// `<base>/<Provider>/json/<endpoint>/<scenario>.json`
    fn fixture_path(&self, endpoint: &str, scenario: &str) -> PathBuf {
        paths::fixture_file(self.base_path(), self.provider(), endpoint, scenario)
    }

    /// Case-insensitive match against [`FixtureSource::provider`].
    fn supports(&self, provider: &str) -> bool {
        provider_key(provider) == provider_key(self.provider())
    }
}

impl fmt::Debug for dyn FixtureSource + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureSource")
            .field("provider", &self.provider())
            .field("base_path", &self.base_path())
            .finish()
    }
}

/// Implemented by the resolver types `apimocker make` generates.
pub trait ProviderFixtures: 'static {
    /// Provider identifier, matched case-insensitively.
    const PROVIDER: &'static str;

    /// Directory that holds every provider's fixtures.
    fn base_path() -> PathBuf;

    /// Build a resolver over the local filesystem.
    fn resolver() -> FixtureResolver {
        FixtureResolver::new(Self::PROVIDER, Self::base_path())
    }
}

/// Filesystem-backed resolver for one provider.
#[derive(Debug, Clone)]
pub struct FixtureResolver<F: FixtureFilesystem = LocalFilesystem> {
    provider: String,
    base_path: PathBuf,
    fs: F,
}

impl FixtureResolver {
    /// Create a resolver over the local filesystem.
    pub fn new(provider: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        Self::with_filesystem(provider, base_path, LocalFilesystem::new())
    }

    /// Create a resolver for a generated provider type.
    pub fn for_provider<T: ProviderFixtures>() -> Self {
        T::resolver()
    }
}

impl<F: FixtureFilesystem> FixtureResolver<F> {
    pub fn with_filesystem(
        provider: impl Into<String>,
        base_path: impl Into<PathBuf>,
        fs: F,
    ) -> Self {
        Self { provider: provider.into(), base_path: base_path.into(), fs }
    }
}

impl<F: FixtureFilesystem> FixtureSource for FixtureResolver<F> {
    fn provider(&self) -> &str {
        &self.provider
    }

    fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, endpoint: &str, scenario: &str) -> Result<Vec<u8>, AppError> {
        let path = self.fixture_path(endpoint, scenario);
        if !self.fs.exists(&path) {
            return Err(AppError::FixtureNotFound { path });
        }
        self.fs.read(&path)
    }
}
