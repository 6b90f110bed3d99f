use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::ArticleSlug;

impl ArticleQueryService {
    pub async fn get_article_by_slug(&self, slug: String) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(slug)?;
        let article = self
            .repo
            .fetch_and_bump_views_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article with slug {slug}")))?;
        Ok(article.into())
    }
}
