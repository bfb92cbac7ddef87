// src/application/queries/friendly_ids/resolution.rs
use crate::domain::slug::Slug;
use crate::domain::sluggable::Identifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoundBy {
    FriendlyId,
    NumericId,
}

/// A resolved record plus the metadata describing how it was reached.
#[derive(Debug, Clone)]
pub struct Resolution<R> {
    pub record: R,
    /// The identifier the caller used to reach this record.
    pub identifier: Identifier,
    pub found_by: FoundBy,
    /// Slug that matched the lookup; `None` when found by numeric id.
    pub finder_slug: Option<Slug>,
    /// The record's most recent slug at lookup time.
    pub current_slug: Option<Slug>,
}

impl<R> Resolution<R> {
    pub fn found_using_friendly_id(&self) -> bool {
        self.found_by == FoundBy::FriendlyId
    }

    pub fn found_using_numeric_id(&self) -> bool {
        self.found_by == FoundBy::NumericId
    }

    /// True when the record is reachable under a friendlier or newer id than
    /// the one used.
    pub fn has_better_id(&self) -> bool {
        match (&self.current_slug, &self.finder_slug) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(current), Some(finder)) => current.id != finder.id,
        }
    }

    /// Current friendly id of the record, if it has a slug.
    pub fn friendly_id(&self) -> Option<String> {
        self.current_slug.as_ref().map(Slug::friendly_id)
    }

    pub fn into_record(self) -> R {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::{OwnerId, Sequence, SlugId, SlugName, SluggableType};
    use chrono::Utc;

    fn slug(id: i64, name: &str) -> Slug {
        Slug {
            id: SlugId::new(id).unwrap(),
            name: SlugName::new(name).unwrap(),
            sequence: Sequence::FIRST,
            scope: None,
            sluggable_type: SluggableType::new("Post").unwrap(),
            sluggable_id: OwnerId::new(1).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn resolution(finder: Option<Slug>, current: Option<Slug>) -> Resolution<()> {
        Resolution {
            record: (),
            identifier: Identifier::from("x"),
            found_by: if finder.is_some() {
                FoundBy::FriendlyId
            } else {
                FoundBy::NumericId
            },
            finder_slug: finder,
            current_slug: current,
        }
    }

    #[test]
    fn found_by_current_slug_has_no_better_id() {
        let res = resolution(Some(slug(1, "test-post")), Some(slug(1, "test-post")));
        assert!(res.found_using_friendly_id());
        assert!(!res.has_better_id());
        assert_eq!(res.friendly_id().as_deref(), Some("test-post"));
    }

    #[test]
    fn found_by_numeric_id_has_better_id_when_slugged() {
        let res = resolution(None, Some(slug(1, "test-post")));
        assert!(res.found_using_numeric_id());
        assert!(res.has_better_id());

        let bare = resolution(None, None);
        assert!(!bare.has_better_id());
    }

    #[test]
    fn historical_slug_has_better_id() {
        let res = resolution(Some(slug(1, "old-title")), Some(slug(2, "new-title")));
        assert!(res.has_better_id());
    }
}
