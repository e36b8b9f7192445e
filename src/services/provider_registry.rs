//! Provider-keyed collection of fixture resolvers.

use std::collections::HashMap;

use crate::domain::{AppError, provider_key};

use super::FixtureSource;

/// Resolvers in registration order, indexed by lower-cased provider name.
///
/// The first resolver registered for a provider wins; later registrations for
/// the same provider are ignored.
#[derive(Default)]
pub struct ProviderRegistry {
    resolvers: Vec<Box<dyn FixtureSource>>,
    by_provider: HashMap<String, usize>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from resolvers in priority order.
    pub fn from_resolvers<I>(resolvers: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn FixtureSource>>,
    {
        let mut registry = Self::new();
        for resolver in resolvers {
            registry.register_boxed(resolver);
        }
        registry
    }

    /// Register a resolver. Returns `false` if its provider was already taken.
    pub fn register<R: FixtureSource + 'static>(&mut self, resolver: R) -> bool {
        self.register_boxed(Box::new(resolver))
    }

    pub fn register_boxed(&mut self, resolver: Box<dyn FixtureSource>) -> bool {
        let key = provider_key(resolver.provider());
        if self.by_provider.contains_key(&key) {
            return false;
        }
        self.by_provider.insert(key, self.resolvers.len());
        self.resolvers.push(resolver);
        true
    }

    /// Look up the resolver for `provider`, ignoring case.
    ///
    /// A resolver whose own identifier matches is returned directly. Otherwise
    /// the first registered resolver whose `supports` accepts `provider` wins.
    pub fn create(&self, provider: &str) -> Result<&dyn FixtureSource, AppError> {
        let indexed = self.by_provider.get(&provider_key(provider)).map(|&i| &self.resolvers[i]);
        indexed
            .or_else(|| self.resolvers.iter().find(|resolver| resolver.supports(provider)))
            .map(|resolver| resolver.as_ref())
            .ok_or_else(|| AppError::ResolverNotFound(provider.to_string()))
    }

    /// Registered provider identifiers, sorted.
    pub fn providers(&self) -> Vec<&str> {
        let mut providers: Vec<&str> =
            self.resolvers.iter().map(|resolver| resolver.provider()).collect();
        providers.sort_unstable();
        providers
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}
