// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainError;

impl ArticleCommandService {
    /// Removal is permanent; like update, it does not bump the view counter.
    pub async fn delete_article(&self, id: i64) -> ApplicationResult<()> {
        let id = ArticleId::new(id)
            .map_err(|_| ApplicationError::not_found(format!("article with id {id}")))?;
        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(%id, "article deleted");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => Err(ApplicationError::not_found(format!(
                "article with id {id}"
            ))),
            Err(other) => Err(other.into()),
        }
    }
}
