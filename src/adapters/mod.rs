pub mod embedded_template_store;
pub mod local_filesystem;
pub mod template_engine;

pub use embedded_template_store::EmbeddedTemplateStore;
pub use local_filesystem::LocalFilesystem;
