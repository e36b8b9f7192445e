pub mod api;
pub mod cli;
pub mod commands;
mod configuration;
mod context;

pub use context::AppContext;
