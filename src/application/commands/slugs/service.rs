// src/application/commands/slugs/service.rs
use std::sync::Arc;

use crate::{
    application::{options::FriendlyIdOptions, ports::util::SlugNormalizer},
    domain::slug::{SequenceAssigner, SlugRepository},
};

/// Keeps an owning record's slugs in step with its friendly id source.
pub struct SlugCommandService {
    pub(super) assigner: Arc<SequenceAssigner>,
    pub(super) slug_repo: Arc<dyn SlugRepository>,
    pub(super) normalizer: Arc<dyn SlugNormalizer>,
    pub(super) options: FriendlyIdOptions,
}

impl SlugCommandService {
    pub fn new(
        assigner: Arc<SequenceAssigner>,
        slug_repo: Arc<dyn SlugRepository>,
        normalizer: Arc<dyn SlugNormalizer>,
        options: FriendlyIdOptions,
    ) -> Self {
        Self {
            assigner,
            slug_repo,
            normalizer,
            options,
        }
    }
}
