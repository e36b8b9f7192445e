//! Test-facing lookup of generated resolver types by naming convention.
//!
//! A provider `stripe` is served by a type named `StripeResolver`. Types are
//! registered explicitly; lookups ignore case, so a type generated as
//! `stripeResolver` is found as well.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::io;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::{AppError, conventional_type_name};

use super::{FixtureSource, ProviderFixtures};

struct CatalogEntry {
    type_name: String,
    value: Box<dyn Any>,
}

/// Registry of resolver types, keyed by type name.
#[derive(Default)]
pub struct ResolverCatalog {
    entries: HashMap<String, CatalogEntry>,
}

fn type_key(type_name: &str) -> String {
    type_name.to_lowercase()
}

/// Last path segment of a fully-qualified type name.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl ResolverCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generated resolver type under its own type name.
    pub fn register<T: ProviderFixtures>(&mut self) -> &mut Self {
        self.register_resolver(short_type_name::<T>(), T::resolver())
    }

    /// Register a resolver instance under an explicit type name.
    pub fn register_resolver<R: FixtureSource + 'static>(
        &mut self,
        type_name: &str,
        resolver: R,
    ) -> &mut Self {
        let boxed: Box<dyn FixtureSource> = Box::new(resolver);
        self.insert(type_name, boxed)
    }

    /// Register an arbitrary value under a type name.
    ///
    /// Lookups succeed only for values that are a `Box<dyn FixtureSource>`;
    /// anything else surfaces as `AppError::TypeMismatch`.
    pub fn insert<V: Any>(&mut self, type_name: &str, value: V) -> &mut Self {
        self.entries.insert(
            type_key(type_name),
            CatalogEntry { type_name: type_name.to_string(), value: Box::new(value) },
        );
        self
    }

    /// Resolver for `provider`, found via its `<Provider>Resolver` type.
    pub fn fixture_for(&self, provider: &str) -> Result<&dyn FixtureSource, AppError> {
        let expected = conventional_type_name(provider);
        let entry = self
            .entries
            .get(&type_key(&expected))
            .ok_or_else(|| AppError::ResolverTypeNotFound(expected.clone()))?;

        let resolver = entry
            .value
            .downcast_ref::<Box<dyn FixtureSource>>()
            .ok_or_else(|| AppError::TypeMismatch(entry.type_name.clone()))?;

        if !resolver.supports(provider) {
            return Err(AppError::ResolverNotFound(provider.to_string()));
        }
        Ok(resolver.as_ref())
    }

    /// Fixture content as UTF-8 text.
    pub fn fixture_as_text(
        &self,
        provider: &str,
        endpoint: &str,
        scenario: &str,
    ) -> Result<String, AppError> {
        let resolver = self.fixture_for(provider)?;
        let bytes = resolver.resolve(endpoint, scenario)?;
        String::from_utf8(bytes).map_err(|e| {
            AppError::read(
                resolver.fixture_path(endpoint, scenario),
                io::Error::new(io::ErrorKind::InvalidData, e),
            )
        })
    }

    /// Fixture decoded as a JSON object; empty when the content is not one.
    pub fn fixture_as_structured(
        &self,
        provider: &str,
        endpoint: &str,
        scenario: &str,
    ) -> Result<Map<String, Value>, AppError> {
        let bytes = self.fixture_for(provider)?.resolve(endpoint, scenario)?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    /// Fixture decoded into `T`. Unlike `fixture_as_structured`, decoding
    /// failures are reported.
    pub fn fixture_as<T: DeserializeOwned>(
        &self,
        provider: &str,
        endpoint: &str,
        scenario: &str,
    ) -> Result<T, AppError> {
        let resolver = self.fixture_for(provider)?;
        let bytes = resolver.resolve(endpoint, scenario)?;
        serde_json::from_slice(&bytes).map_err(|e| AppError::Decode {
            path: resolver.fixture_path(endpoint, scenario),
            details: e.to_string(),
        })
    }
}
