mod resolution;
mod service;

pub use resolution::ColumnResolution;
pub use service::ColumnQueryService;
