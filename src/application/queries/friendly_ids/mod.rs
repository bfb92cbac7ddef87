mod diagnostics;
mod resolution;
mod resolve_many;
mod resolve_one;
mod service;

pub use diagnostics::ScopeDiagnostics;
pub use resolution::{FoundBy, Resolution};
pub use service::FriendlyIdQueryService;
