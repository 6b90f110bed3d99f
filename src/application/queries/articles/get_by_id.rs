use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::ArticleId;

impl ArticleQueryService {
    /// Public single read: counts as a view. The returned DTO carries the
    /// post-increment counter. Ids outside the valid range cannot match any
    /// stored article, so they read as not found rather than bad input.
    pub async fn get_article_by_id(&self, id: i64) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)
            .map_err(|_| ApplicationError::not_found(format!("article with id {id}")))?;
        let article = self
            .repo
            .fetch_and_bump_views(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article with id {id}")))?;
        Ok(article.into())
    }
}
