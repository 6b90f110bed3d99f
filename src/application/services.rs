// src/application/services.rs
use std::sync::Arc;

use crate::application::{
    commands::articles::ArticleCommandService, ports::time::Clock,
    queries::articles::ArticleQueryService,
};
use crate::domain::article::ArticleRepository;

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&repo)));

        Self {
            article_commands,
            article_queries,
        }
    }
}
