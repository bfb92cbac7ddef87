// tests/support/models.rs
use friendly_ids::domain::slug::{OwnerId, SlugScope};
use friendly_ids::domain::sluggable::Sluggable;

/// A record type whose slugs are namespaced per city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: OwnerId,
    pub street: String,
    pub city: Option<String>,
}

impl Address {
    pub fn new(id: i64, street: &str, city: Option<&str>) -> Self {
        Self {
            id: OwnerId(id),
            street: street.to_string(),
            city: city.map(str::to_string),
        }
    }
}

impl Sluggable for Address {
    const SLUGGABLE_TYPE: &'static str = "Address";
    const SOURCE_ATTRIBUTE: &'static str = "street";

    fn id(&self) -> OwnerId {
        self.id
    }

    fn friendly_id_source(&self) -> Option<&str> {
        Some(&self.street)
    }

    fn slug_scope(&self) -> Option<SlugScope> {
        self.city.clone().and_then(|city| SlugScope::new(city).ok())
    }
}

/// An unscoped record type sharing the slug store with posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct District {
    pub id: OwnerId,
    pub name: Option<String>,
}

impl District {
    pub fn new(id: i64, name: Option<&str>) -> Self {
        Self {
            id: OwnerId(id),
            name: name.map(str::to_string),
        }
    }
}

impl Sluggable for District {
    const SLUGGABLE_TYPE: &'static str = "District";

    fn id(&self) -> OwnerId {
        self.id
    }

    fn friendly_id_source(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
