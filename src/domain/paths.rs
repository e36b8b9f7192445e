//! Fixture and scaffold path catalog.

use std::path::{Path, PathBuf};

use super::provider::capitalize;

/// Project-relative directory that holds every provider's fixtures.
pub const FIXTURES_DIR: &str = "tests/Fixtures";

/// Subdirectory holding the JSON payloads of one provider.
pub const JSON_DIR: &str = "json";

/// Optional project configuration file.
pub const CONFIG_FILE: &str = "apimocker.toml";

// ── Fixture resolution ─────────────────────────────────────────────────

/// `<base>/<Provider>/json`
pub fn fixture_root(base: &Path, provider: &str) -> PathBuf {
    base.join(capitalize(provider)).join(JSON_DIR)
}

/// `<base>/<Provider>/json/<endpoint>/<scenario>.json`
pub fn fixture_file(base: &Path, provider: &str, endpoint: &str, scenario: &str) -> PathBuf {
    fixture_root(base, provider).join(endpoint).join(format!("{}.json", scenario))
}

// ── Scaffold layout ────────────────────────────────────────────────────

/// `<root>/tests/Fixtures`
pub fn fixtures_dir(root: &Path) -> PathBuf {
    root.join(FIXTURES_DIR)
}

/// `<root>/tests/Fixtures/<Provider>`
pub fn provider_dir(root: &Path, capitalized: &str) -> PathBuf {
    fixtures_dir(root).join(capitalized)
}

/// `<root>/tests/Fixtures/<Provider>/json`
pub fn provider_json_dir(root: &Path, capitalized: &str) -> PathBuf {
    provider_dir(root, capitalized).join(JSON_DIR)
}

/// `<root>/tests/Fixtures/<Provider>/<TypeName>.<ext>`
pub fn resolver_file(root: &Path, capitalized: &str, type_name: &str, extension: &str) -> PathBuf {
    provider_dir(root, capitalized).join(format!("{}.{}", type_name, extension))
}

/// `<root>/apimocker.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
