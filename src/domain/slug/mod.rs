pub mod codec;
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use codec::FriendlyId;
pub use entity::{NewSlug, Slug};
pub use repository::SlugRepository;
pub use services::{SequenceAssigner, SlugAssignment};
pub use value_objects::{OwnerId, Sequence, SlugId, SlugName, SlugScope, SluggableType};
