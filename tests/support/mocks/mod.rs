// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod authors;
pub mod records;
pub mod slugs;
pub mod time;

pub use authors::InMemoryAuthors;
pub use records::InMemoryRecords;
pub use slugs::{FailingSlugRepo, RacingSlugRepo};
pub use time::{SteppingClock, fixed_now};
