// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};
use crate::domain::article::{ArticleSlug, NewArticle, slugify};

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub author: String,
    pub published: bool,
    pub tags: Vec<String>,
}

impl ArticleCommandService {
    /// Persists a new article with a slug derived from the title and a zero
    /// view counter. A slug collision surfaces as a conflict from the store.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let now = self.clock.now();
        let slug = ArticleSlug::new(slugify(&command.title))?;

        let new_article = NewArticle {
            title: command.title,
            slug,
            content: command.content,
            summary: command.summary,
            author: command.author,
            published: command.published,
            published_at: command.published.then_some(now),
            tags: command.tags,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.insert(new_article).await?;
        tracing::info!(id = %created.id, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
