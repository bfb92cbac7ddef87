use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::author::AuthorWriteRepository};

pub struct AuthorCommandService {
    pub(super) write_repo: Arc<dyn AuthorWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AuthorCommandService {
    pub fn new(write_repo: Arc<dyn AuthorWriteRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { write_repo, clock }
    }
}
