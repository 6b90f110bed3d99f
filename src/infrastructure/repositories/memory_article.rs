// src/infrastructure/repositories/memory_article.rs
//
// Mutex-guarded in-memory store. Backs the integration tests and is handy
// for running the API without Postgres; it shares the filter semantics with
// the SQL backend through `ArticleFilter::matches`/`compare`.

use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleRepository, ArticleSlug, ArticleUpdate, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct State {
    next_id: i64,
    rows: Vec<Article>,
}

#[derive(Default)]
pub struct InMemoryArticleRepository {
    inner: Mutex<State>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state();
        if state.rows.iter().any(|row| row.slug == article.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        state.next_id += 1;
        let stored = Article {
            id: ArticleId::new(state.next_id)?,
            title: article.title,
            slug: article.slug,
            content: article.content,
            summary: article.summary,
            author: article.author,
            published: article.published,
            published_at: article.published_at,
            tags: article.tags,
            view_count: 0,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        state.rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state().rows.iter().find(|row| row.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .state()
            .rows
            .iter()
            .find(|row| &row.slug == slug)
            .cloned())
    }

    async fn fetch_and_bump_views(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut state = self.state();
        Ok(state.rows.iter_mut().find(|row| row.id == id).map(|row| {
            row.view_count += 1;
            row.clone()
        }))
    }

    async fn fetch_and_bump_views_by_slug(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>> {
        let mut state = self.state();
        Ok(state
            .rows
            .iter_mut()
            .find(|row| &row.slug == slug)
            .map(|row| {
                row.view_count += 1;
                row.clone()
            }))
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<(Vec<Article>, u64)> {
        let state = self.state();
        let mut matches: Vec<&Article> = state
            .rows
            .iter()
            .filter(|row| filter.matches(row))
            .collect();
        matches.sort_by(|a, b| filter.compare(a, b));

        let total = matches.len() as u64;
        let offset = usize::try_from(filter.offset()).unwrap_or(usize::MAX);
        let page = matches
            .into_iter()
            .skip(offset)
            .take(filter.limit as usize)
            .cloned()
            .collect();

        Ok((page, total))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state();

        if let Some(slug) = &update.slug
            && state
                .rows
                .iter()
                .any(|row| &row.slug == slug && row.id != update.id)
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let row = state
            .rows
            .iter_mut()
            .find(|row| row.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(content) = update.content {
            row.content = content;
        }
        if let Some(summary) = update.summary {
            row.summary = Some(summary);
        }
        if let Some(author) = update.author {
            row.author = author;
        }
        if let Some(tags) = update.tags {
            row.tags = tags;
        }
        if let Some(state_update) = update.publish_state {
            row.published = state_update.published;
            row.published_at = state_update.published_at;
        }
        row.updated_at = update.updated_at;

        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state();
        let before = state.rows.len();
        state.rows.retain(|row| row.id != id);
        if state.rows.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}
