use super::SlugCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{errors::DomainError, sluggable::Sluggable},
};

impl SlugCommandService {
    /// Slug text the normalizer derives from `source`, without validation.
    pub fn slug_text(&self, source: &str) -> String {
        self.normalizer.normalize(source, &self.options.normalize)
    }

    /// Normalizes and validates a friendly id source for record type `R`.
    ///
    /// Failures read like record errors, e.g. `Name can not be "new"`.
    pub fn validate_source<R: Sluggable>(&self, source: Option<&str>) -> ApplicationResult<String> {
        let raw = source.unwrap_or_default();
        let attribute = humanize_attribute(R::SOURCE_ATTRIBUTE);

        let text = self.slug_text(raw);
        if text.trim().is_empty() {
            return Err(DomainError::BlankSlug {
                attribute,
                text: raw.to_string(),
            }
            .into());
        }
        if self.options.is_reserved(&text) {
            return Err(DomainError::ReservedSlug {
                attribute,
                text: raw.to_string(),
            }
            .into());
        }

        Ok(text)
    }
}

/// `"title_text"` becomes `"Title text"`.
pub fn humanize_attribute(attribute: &str) -> String {
    let spaced = attribute.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
