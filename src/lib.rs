//! Human-friendly identifiers for database records.
//!
//! Records keep a numeric primary key and gain a history of slugs. A slug's
//! external form is `name` or `name--sequence`, where the sequence
//! disambiguates records whose names normalize to the same text. Old slugs
//! stay resolvable after a rename.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
