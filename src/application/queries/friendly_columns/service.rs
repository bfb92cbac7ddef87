use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;

use super::ColumnResolution;
use crate::application::{error::ApplicationResult, queries::friendly_ids::FoundBy};
use crate::domain::{
    errors::{DomainResult, RecordNotFound},
    friendly_column::{ColumnFilter, ColumnRecordRepository, FriendlyColumn},
    slug::OwnerId,
    sluggable::{Identifier, Pagination},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Target {
    Record(OwnerId),
    Unknown(String),
}

#[derive(Default)]
struct Classified {
    ids: Vec<(OwnerId, Identifier)>,
    values: Vec<(String, Identifier)>,
    targets: HashSet<Target>,
}

/// Looks records of type `R` up by their friendly column or primary key.
///
/// A string token is tried against the column first. Only when no row holds
/// that value does a token made of digits fall back to the primary key.
pub struct ColumnQueryService<R: FriendlyColumn> {
    records: Arc<dyn ColumnRecordRepository<R>>,
    _record: PhantomData<fn() -> R>,
}

impl<R: FriendlyColumn> ColumnQueryService<R> {
    pub fn new(records: Arc<dyn ColumnRecordRepository<R>>) -> Self {
        Self {
            records,
            _record: PhantomData,
        }
    }

    pub async fn resolve_one(
        &self,
        identifier: impl Into<Identifier>,
    ) -> ApplicationResult<ColumnResolution<R>> {
        Ok(self.lookup_one(identifier.into()).await?)
    }

    /// All or nothing, like the slug batch resolver: the call fails unless
    /// every requested record left after `offset` and `limit` is found.
    pub async fn resolve_many(
        &self,
        identifiers: &[Identifier],
        pagination: Pagination,
    ) -> ApplicationResult<Vec<ColumnResolution<R>>> {
        Ok(self.lookup_many(identifiers, pagination).await?)
    }

    async fn lookup_one(&self, identifier: Identifier) -> DomainResult<ColumnResolution<R>> {
        if let Identifier::Token(token) = &identifier {
            if let Some(record) = self.records.find_by_friendly_column(token).await? {
                return Ok(ColumnResolution {
                    record,
                    identifier,
                    found_by: FoundBy::FriendlyId,
                });
            }
        }

        let record = match identifier.numeric_fallback() {
            Some(id) => self.records.find_by_primary_key(id).await?,
            None => None,
        };
        match record {
            Some(record) => Ok(ColumnResolution {
                record,
                identifier,
                found_by: FoundBy::NumericId,
            }),
            None => {
                tracing::debug!(identifier = %identifier, record_type = R::RECORD_TYPE, column = R::COLUMN, "no record matches identifier");
                Err(RecordNotFound::single(R::RECORD_TYPE, identifier.to_string()).into())
            }
        }
    }

    async fn lookup_many(
        &self,
        identifiers: &[Identifier],
        pagination: Pagination,
    ) -> DomainResult<Vec<ColumnResolution<R>>> {
        let classified = self.classify(identifiers).await?;

        let filter = ColumnFilter {
            ids: classified.ids.iter().map(|(id, _)| *id).collect(),
            values: classified
                .values
                .iter()
                .map(|(value, _)| value.clone())
                .collect(),
        };
        let found = if filter.is_empty() {
            Vec::new()
        } else {
            self.records.find_where(&filter, pagination).await?
        };

        let mut seen = HashSet::new();
        let records: Vec<R> = found
            .into_iter()
            .filter(|record| seen.insert(record.id()))
            .collect();

        let expected = pagination.expected_size(classified.targets.len());
        if records.len() != expected {
            let tokens = identifiers.iter().map(ToString::to_string).collect();
            return Err(
                RecordNotFound::batch(R::RECORD_TYPE, tokens, expected, records.len()).into(),
            );
        }

        Ok(records
            .into_iter()
            .map(|record| {
                let by_value = classified
                    .values
                    .iter()
                    .find(|(value, _)| record.friendly_id() == Some(value.as_str()));
                match by_value {
                    Some((_, identifier)) => ColumnResolution {
                        identifier: identifier.clone(),
                        record,
                        found_by: FoundBy::FriendlyId,
                    },
                    None => {
                        let identifier = classified
                            .ids
                            .iter()
                            .find(|(id, _)| *id == record.id())
                            .map(|(_, identifier)| identifier.clone())
                            .unwrap_or_else(|| Identifier::Id(record.id()));
                        ColumnResolution {
                            record,
                            identifier,
                            found_by: FoundBy::NumericId,
                        }
                    }
                }
            })
            .collect())
    }

    async fn classify(&self, identifiers: &[Identifier]) -> DomainResult<Classified> {
        let mut classified = Classified::default();

        for identifier in identifiers {
            if let Identifier::Token(token) = identifier {
                if let Some(record) = self.records.find_by_friendly_column(token).await? {
                    classified.targets.insert(Target::Record(record.id()));
                    classified.values.push((token.clone(), identifier.clone()));
                    continue;
                }
            }

            match identifier.numeric_fallback() {
                Some(id) => {
                    classified.targets.insert(Target::Record(id));
                    classified.ids.push((id, identifier.clone()));
                }
                None => {
                    tracing::debug!(identifier = %identifier, record_type = R::RECORD_TYPE, "no record matches batch token");
                    classified
                        .targets
                        .insert(Target::Unknown(identifier.to_string()));
                }
            }
        }

        Ok(classified)
    }
}
