// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::article::ArticleRepository;

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
