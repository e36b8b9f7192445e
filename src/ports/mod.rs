mod fixture_filesystem;
mod template_store;

pub use fixture_filesystem::FixtureFilesystem;
pub use template_store::{RESOLVER_TEMPLATE, TemplateSource, TemplateStore};
