//! apimocker: canned JSON fixtures for mocked API providers.
//!
//! Test code resolves fixtures through a [`FixtureSource`], either directly via
//! [`FixtureResolver`], through a [`ProviderRegistry`], or by naming convention
//! with a [`ResolverCatalog`]. The `apimocker make <provider>` command scaffolds
//! the directory layout and a resolver type for a new provider.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::api::{ScaffoldOutcome, make_resolver, make_resolver_at};
pub use domain::{AppError, ErrorCategory, ProjectConfig, ScaffoldConfig, capitalize};
pub use services::{
    FixtureResolver, FixtureSource, ProviderFixtures, ProviderRegistry, ResolverCatalog,
};
