use crate::application::queries::friendly_ids::FoundBy;
use crate::domain::friendly_column::FriendlyColumn;
use crate::domain::sluggable::Identifier;

/// A record found through its friendly column or its primary key.
#[derive(Debug, Clone)]
pub struct ColumnResolution<R> {
    pub record: R,
    /// The identifier the caller used to reach this record.
    pub identifier: Identifier,
    pub found_by: FoundBy,
}

impl<R: FriendlyColumn> ColumnResolution<R> {
    pub fn found_using_friendly_id(&self) -> bool {
        self.found_by == FoundBy::FriendlyId
    }

    pub fn found_using_numeric_id(&self) -> bool {
        self.found_by == FoundBy::NumericId
    }

    /// A column value is the only better id there is, so this is true
    /// exactly for numeric lookups of records that have one.
    pub fn has_better_id(&self) -> bool {
        self.found_using_numeric_id() && self.friendly_id().is_some()
    }

    pub fn friendly_id(&self) -> Option<&str> {
        self.record.friendly_id()
    }

    pub fn into_record(self) -> R {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::Author;
    use crate::domain::slug::OwnerId;
    use chrono::Utc;

    fn found(found_by: FoundBy) -> ColumnResolution<Author> {
        ColumnResolution {
            record: Author {
                id: OwnerId(1),
                handle: "ada".into(),
                name: "Ada Lovelace".into(),
                created_at: Utc::now(),
            },
            identifier: Identifier::from("ada"),
            found_by,
        }
    }

    #[test]
    fn only_numeric_lookups_have_a_better_id() {
        let by_handle = found(FoundBy::FriendlyId);
        assert!(by_handle.found_using_friendly_id());
        assert!(!by_handle.has_better_id());

        let by_id = found(FoundBy::NumericId);
        assert!(by_id.has_better_id());
        assert_eq!(by_id.friendly_id(), Some("ada"));
    }
}
