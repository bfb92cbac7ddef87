pub mod authors;
pub mod posts;
pub mod slugs;
