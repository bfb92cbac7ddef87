// src/domain/slug/entity.rs
use crate::domain::slug::codec;
use crate::domain::slug::value_objects::{
    OwnerId, Sequence, SlugId, SlugName, SlugScope, SluggableType,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug {
    pub id: SlugId,
    pub name: SlugName,
    pub sequence: Sequence,
    pub scope: Option<SlugScope>,
    pub sluggable_type: SluggableType,
    pub sluggable_id: OwnerId,
    pub created_at: DateTime<Utc>,
}

impl Slug {
    /// External form of this slug, `name` or `name--sequence`.
    pub fn friendly_id(&self) -> String {
        codec::format(self.name.as_str(), self.sequence)
    }

    pub fn has_name_in_scope(&self, name: &SlugName, scope: Option<&SlugScope>) -> bool {
        self.name == *name && self.scope.as_ref() == scope
    }
}

#[derive(Debug, Clone)]
pub struct NewSlug {
    pub name: SlugName,
    pub sequence: Sequence,
    pub scope: Option<SlugScope>,
    pub sluggable_type: SluggableType,
    pub sluggable_id: OwnerId,
    pub created_at: DateTime<Utc>,
}

impl NewSlug {
    pub fn into_slug(self, id: SlugId) -> Slug {
        Slug {
            id,
            name: self.name,
            sequence: self.sequence,
            scope: self.scope,
            sluggable_type: self.sluggable_type,
            sluggable_id: self.sluggable_id,
            created_at: self.created_at,
        }
    }
}
