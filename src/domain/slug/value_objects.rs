use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Separator between a slug name and its sequence in the external form.
pub const SEQUENCE_SEPARATOR: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlugId(pub i64);

impl SlugId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("slug id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SlugId> for i64 {
    fn from(value: SlugId) -> Self {
        value.0
    }
}

/// Primary key of the record a slug belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(pub i64);

impl OwnerId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<OwnerId> for i64 {
    fn from(value: OwnerId) -> Self {
        value.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized slug text. Never blank and never contains the sequence separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlugName(String);

impl SlugName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug name cannot be empty".into()));
        }
        if value.contains(SEQUENCE_SEPARATOR) {
            return Err(DomainError::Validation(format!(
                "slug name cannot contain '{SEQUENCE_SEPARATOR}'"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SlugName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SlugName> for String {
    fn from(value: SlugName) -> Self {
        value.0
    }
}

/// Disambiguator for slugs sharing a name within one scope. Starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence(u32);

impl Sequence {
    pub const FIRST: Sequence = Sequence(1);

    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            Err(DomainError::Validation("sequence must be at least 1".into()))
        } else {
            Ok(Self(value))
        }
    }

    /// The sequence following `max`, where `max == 0` means nothing is taken yet.
    pub fn after(max: u32) -> DomainResult<Self> {
        max.checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::Validation("sequence overflow".into()))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Namespace partitioning slug uniqueness, e.g. a parent record's friendly id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlugScope(String);

impl SlugScope {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("scope cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlugScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discriminator naming the owning record type, shared slug tables use it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SluggableType(String);

impl SluggableType {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("sluggable type cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// For compile-time type names such as `Sluggable::SLUGGABLE_TYPE`.
    pub fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SluggableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_name_rejects_blank_and_separator() {
        assert!(SlugName::new("   ").is_err());
        assert!(SlugName::new("a--b").is_err());
        assert_eq!(SlugName::new("test-post").unwrap().as_str(), "test-post");
    }

    #[test]
    fn sequence_starts_at_one() {
        assert!(Sequence::new(0).is_err());
        assert_eq!(Sequence::default(), Sequence::FIRST);
        assert_eq!(Sequence::after(0).unwrap(), Sequence::FIRST);
        assert_eq!(Sequence::after(4).unwrap().get(), 5);
        assert!(Sequence::after(u32::MAX).is_err());
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(OwnerId::new(0).is_err());
        assert!(SlugId::new(-1).is_err());
        assert_eq!(i64::from(OwnerId::new(7).unwrap()), 7);
    }
}
