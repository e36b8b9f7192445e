mod fixture_resolver;
mod provider_registry;
mod resolver_catalog;

pub use fixture_resolver::{FixtureResolver, FixtureSource, ProviderFixtures};
pub use provider_registry::ProviderRegistry;
pub use resolver_catalog::ResolverCatalog;
