use std::collections::HashSet;

use super::{FriendlyIdQueryService, Resolution};
use crate::{
    application::{error::ApplicationResult, options::FindOptions},
    domain::{
        errors::{DomainResult, RecordNotFound},
        slug::{FriendlyId, OwnerId, Slug, codec},
        sluggable::{Identifier, RecordFilter, Sluggable},
    },
};

/// What one requested identifier stands for once classified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Target {
    Record(OwnerId),
    Unknown(String),
}

#[derive(Default)]
struct Classified {
    ids: Vec<(OwnerId, Identifier)>,
    slugs: Vec<(Slug, Identifier)>,
    targets: HashSet<Target>,
}

impl<R: Sluggable> FriendlyIdQueryService<R> {
    /// Resolves a mix of friendly ids and primary keys in one query.
    ///
    /// All or nothing: unless every requested record (after `offset` and
    /// `limit`) is found, the whole call fails. Identifiers that land on
    /// the same record count once and yield one result.
    pub async fn resolve_many(
        &self,
        identifiers: &[Identifier],
        options: &FindOptions,
    ) -> ApplicationResult<Vec<Resolution<R>>> {
        self.lookup_many(identifiers, options)
            .await
            .map_err(|err| self.diagnostics.annotate(err, options.scope.as_ref()).into())
    }

    async fn lookup_many(
        &self,
        identifiers: &[Identifier],
        options: &FindOptions,
    ) -> DomainResult<Vec<Resolution<R>>> {
        let classified = self.classify(identifiers, options).await?;

        let filter = RecordFilter {
            ids: classified.ids.iter().map(|(id, _)| *id).collect(),
            slugs: classified.slugs.iter().map(|(slug, _)| slug.clone()).collect(),
        };
        let pagination = options.pagination();
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
                RecordNotFound::batch(R::SLUGGABLE_TYPE, tokens, expected, records.len()).into(),
            );
        }

        let mut resolutions = Vec::with_capacity(records.len());
        for record in records {
            let finder = classified
                .slugs
                .iter()
                .find(|(slug, _)| slug.sluggable_id == record.id())
                .cloned();
            let resolution = match finder {
                Some((slug, identifier)) => self.resolution(record, identifier, Some(slug)).await?,
                None => {
                    let identifier = classified
                        .ids
                        .iter()
                        .find(|(id, _)| *id == record.id())
                        .map(|(_, identifier)| identifier.clone())
                        .unwrap_or_else(|| Identifier::Id(record.id()));
                    self.resolution(record, identifier, None).await?
                }
            };
            resolutions.push(resolution);
        }

        Ok(resolutions)
    }

    /// Splits identifiers into primary keys and matched slugs. A token without
    /// a slug counts as a primary key only when it is made of digits.
    async fn classify(
        &self,
        identifiers: &[Identifier],
        options: &FindOptions,
    ) -> DomainResult<Classified> {
        let sluggable_type = R::sluggable_type();
        let mut classified = Classified::default();

        for identifier in identifiers {
            let token = match identifier {
                Identifier::Id(id) => {
                    classified.ids.push((*id, identifier.clone()));
                    classified.targets.insert(Target::Record(*id));
                    continue;
                }
                Identifier::Token(token) => token,
            };

            let friendly = FriendlyId::parse(token);
            let slug = self
                .slugs
                .find_exact(
                    &friendly.name,
                    options.scope.as_ref(),
                    &sluggable_type,
                    friendly.sequence,
                )
                .await?;

            match (slug, codec::numeric_id(token)) {
                (Some(slug), _) => {
                    classified.targets.insert(Target::Record(slug.sluggable_id));
                    classified.slugs.push((slug, identifier.clone()));
                }
                (None, Some(id)) => {
                    let id = OwnerId(id);
                    classified.targets.insert(Target::Record(id));
                    classified.ids.push((id, identifier.clone()));
                }
                (None, None) => {
                    tracing::debug!(token = %token, record_type = R::SLUGGABLE_TYPE, "no slug matches batch token");
                    classified.targets.insert(Target::Unknown(token.clone()));
                }
            }
        }

        Ok(classified)
    }
}
