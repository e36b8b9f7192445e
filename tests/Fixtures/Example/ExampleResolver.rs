//! Fixture resolver for the Example provider.
//!
//! Drop JSON payloads under `json/<endpoint>/<scenario>.json` next to this file.

use std::path::{Path, PathBuf};

use apimocker::ProviderFixtures;

#[allow(non_camel_case_types)]
pub struct ExampleResolver;

impl ProviderFixtures for ExampleResolver {
    const PROVIDER: &'static str = "Example";

    fn base_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/Fixtures")
    }
}
