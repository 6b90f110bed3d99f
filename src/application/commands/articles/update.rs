// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::{ArticleId, ArticleSlug, ArticleUpdate, slugify};

/// Shallow merge: absent fields leave the stored value untouched. Serves
/// both PUT and PATCH, as in the original API.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl ArticleCommandService {
    /// The lookup here is deliberately side-effect free: updating an article
    /// does not count as reading it, so the view counter stays put.
    pub async fn update_article(
        &self,
        id: i64,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)
            .map_err(|_| ApplicationError::not_found(format!("article with id {id}")))?;
        let mut article = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article with id {id}")))?;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, now);

        if let Some(title) = command.title {
            let slug = ArticleSlug::new(slugify(&title))?;
            update = update.with_title(title).with_slug(slug);
        }
        if let Some(content) = command.content {
            update = update.with_content(content);
        }
        if let Some(summary) = command.summary {
            update = update.with_summary(summary);
        }
        if let Some(author) = command.author {
            update = update.with_author(author);
        }
        if let Some(tags) = command.tags {
            update = update.with_tags(tags);
        }
        if let Some(publish) = command.published {
            if publish {
                article.publish(now);
            } else {
                article.unpublish(now);
            }
            update = update.with_publish_state(article.published, article.published_at);
        }

        let updated = self.repo.update(update).await?;
        tracing::info!(id = %updated.id, "article updated");
        Ok(updated.into())
    }
}
