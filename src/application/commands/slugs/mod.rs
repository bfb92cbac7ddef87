// src/application/commands/slugs/mod.rs
mod service;
mod sync;
mod validate;

pub use service::SlugCommandService;
pub use validate::humanize_attribute;
