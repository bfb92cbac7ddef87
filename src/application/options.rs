// src/application/options.rs
use crate::application::ports::util::NormalizeOptions;
use crate::domain::slug::SlugScope;
use crate::domain::slug::services::DEFAULT_MAX_ATTEMPTS;
use crate::domain::sluggable::Pagination;

/// Per-type friendly id settings.
#[derive(Debug, Clone)]
pub struct FriendlyIdOptions {
    pub normalize: NormalizeOptions,
    /// Slug texts that may never be used, compared after normalization.
    pub reserved_words: Vec<String>,
    /// Whether slugs of this type live in per-scope namespaces.
    pub scoped: bool,
    /// Insert attempts before sequence assignment gives up.
    pub max_attempts: u32,
}

impl Default for FriendlyIdOptions {
    fn default() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            reserved_words: vec!["new".into(), "index".into()],
            scoped: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl FriendlyIdOptions {
    pub fn scoped(mut self) -> Self {
        self.scoped = true;
        self
    }

    pub fn is_reserved(&self, slug_text: &str) -> bool {
        self.reserved_words.iter().any(|word| word == slug_text)
    }
}

/// Options accepted by the resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Slug namespace to search in. `None` only matches unscoped slugs.
    pub scope: Option<SlugScope>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl FindOptions {
    pub fn in_scope(scope: SlugScope) -> Self {
        Self {
            scope: Some(scope),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            limit: self.limit,
            offset: self.offset,
        }
    }
}
