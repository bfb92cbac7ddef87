// src/domain/sluggable.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::{OwnerId, Slug, SlugId, SlugScope, SluggableType, codec};
use async_trait::async_trait;
use std::fmt;

/// A record type that owns slugs.
pub trait Sluggable: Clone + Send + Sync + 'static {
    /// Discriminator stored on every slug of this type.
    const SLUGGABLE_TYPE: &'static str;
    /// Attribute whose value seeds new slugs, used in validation messages.
    const SOURCE_ATTRIBUTE: &'static str = "name";

    fn id(&self) -> OwnerId;

    fn friendly_id_source(&self) -> Option<&str>;

    fn slug_scope(&self) -> Option<SlugScope> {
        None
    }

    fn sluggable_type() -> SluggableType {
        SluggableType::from_static(Self::SLUGGABLE_TYPE)
    }
}

/// What a caller hands a resolver: a primary key or a string token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Id(OwnerId),
    Token(String),
}

impl Identifier {
    /// A string token that reads as a raw primary key.
    pub fn numeric_fallback(&self) -> Option<OwnerId> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Token(token) => codec::numeric_id(token).map(OwnerId),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Token(token) => f.write_str(token),
        }
    }
}

impl From<OwnerId> for Identifier {
    fn from(value: OwnerId) -> Self {
        Self::Id(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Token(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Token(value)
    }
}

/// Records matched by primary key or through one of the given slugs.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub ids: Vec<OwnerId>,
    pub slugs: Vec<Slug>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.slugs.is_empty()
    }

    pub fn slug_ids(&self) -> Vec<SlugId> {
        self.slugs.iter().map(|slug| slug.id).collect()
    }

    /// Primary keys reachable through either side of the filter.
    pub fn owner_ids(&self) -> Vec<OwnerId> {
        let mut ids = self.ids.clone();
        ids.extend(self.slugs.iter().map(|slug| slug.sluggable_id));
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl Pagination {
    /// How many of `requested` records a page can hold.
    pub fn expected_size(&self, requested: usize) -> usize {
        let size = requested.saturating_sub(self.offset.unwrap_or(0));
        match self.limit {
            Some(limit) if size > limit => limit,
            _ => size,
        }
    }
}

/// Persistence collaborator for an owning record type.
#[async_trait]
pub trait RecordRepository<R: Sluggable>: Send + Sync {
    async fn find_by_primary_key(&self, id: OwnerId) -> DomainResult<Option<R>>;

    /// Ordered by primary key; the same record may appear more than once.
    async fn find_where(&self, filter: &RecordFilter, pagination: Pagination)
    -> DomainResult<Vec<R>>;
}
