//! Provider naming rules shared by resolution, registration and scaffolding.

use super::AppError;

/// Suffix appended to provider names to form resolver type names.
pub const RESOLVER_SUFFIX: &str = "Resolver";

/// Upper-case the first character and leave the rest untouched.
///
/// `"stripe"` becomes `"Stripe"`, `"TEST"` stays `"TEST"`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normalized lookup key for a provider (case-insensitive).
pub fn provider_key(provider: &str) -> String {
    provider.to_lowercase()
}

/// Type name the helper expects for a provider: `<Capitalize(provider)>Resolver`.
pub fn conventional_type_name(provider: &str) -> String {
    format!("{}{}", capitalize(provider), RESOLVER_SUFFIX)
}

/// A provider name accepted by the scaffold generator.
///
/// Guarantees:
/// - Non-empty
/// - Usable as a single path component (no separators, not `.` or `..`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderName(String);

impl ProviderName {
    pub fn new(name: &str) -> Result<Self, AppError> {
        if name.is_empty() {
            return Err(AppError::invalid_argument("Provider name is required."));
        }
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(AppError::invalid_argument(format!(
                "Invalid provider name '{}': must be a single path component",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory name and provider identifier written into generated code.
    pub fn capitalized(&self) -> String {
        capitalize(&self.0)
    }

    /// Generated type name, built from the name exactly as typed.
    pub fn type_name(&self) -> String {
        format!("{}{}", self.0, RESOLVER_SUFFIX)
    }
}

impl std::fmt::Display for ProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
