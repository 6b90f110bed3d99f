// tests/article_command_tests.rs
mod support;

use plume_core::application::commands::articles::UpdateArticleCommand;
use plume_core::application::error::ApplicationError;
use plume_core::domain::errors::DomainError;
use support::{create_command, harness, published_command};

#[tokio::test]
async fn create_derives_slug_and_zeroes_views() {
    let h = harness();
    let article = h
        .commands
        .create_article(create_command("Introduction to Nest!", "Ana Souza"))
        .await
        .unwrap();

    assert_eq!(article.slug, "introduction-to-nest");
    assert_eq!(article.view_count, 0);
    assert!(!article.published);
    assert!(article.published_at.is_none());
}

#[tokio::test]
async fn create_published_stamps_published_at() {
    let h = harness();
    let article = h
        .commands
        .create_article(published_command("Launch day", "Ana", &[]))
        .await
        .unwrap();

    assert!(article.published);
    let stamp = article.published_at.expect("publish stamp");
    assert_eq!(stamp, article.created_at);
}

#[tokio::test]
async fn symbol_only_title_is_rejected_at_create() {
    let h = harness();
    // "!!!" slugifies to an empty string, which no article may carry
    let err = h
        .commands
        .create_article(create_command("!!!", "Ana"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn duplicate_slug_is_a_conflict() {
    let h = harness();
    h.commands
        .create_article(create_command("Same Title", "Ana"))
        .await
        .unwrap();

    // different punctuation, same normalized slug
    let err = h
        .commands
        .create_article(create_command("Same, Title!", "Bruno"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn update_merges_only_present_fields() {
    let h = harness();
    let created = h
        .commands
        .create_article(published_command("Original title", "Ana", &["rust"]))
        .await
        .unwrap();

    let updated = h
        .commands
        .update_article(
            created.id,
            UpdateArticleCommand {
                content: Some("completely new content body".into()),
                ..UpdateArticleCommand::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.content, "completely new content body");
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.slug, created.slug);
    assert_eq!(updated.author, created.author);
    assert_eq!(updated.tags, created.tags);
    assert_eq!(updated.published_at, created.published_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_title_regenerates_slug() {
    let h = harness();
    let created = h
        .commands
        .create_article(create_command("First draft", "Ana"))
        .await
        .unwrap();

    let updated = h
        .commands
        .update_article(
            created.id,
            UpdateArticleCommand {
                title: Some("São Paulo — Hoje".into()),
                ..UpdateArticleCommand::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "São Paulo — Hoje");
    assert_eq!(updated.slug, "sao-paulo-hoje");
}

#[tokio::test]
async fn publish_transition_stamps_once() {
    let h = harness();
    let created = h
        .commands
        .create_article(create_command("Draft post", "Ana"))
        .await
        .unwrap();
    assert!(created.published_at.is_none());

    let published = h
        .commands
        .update_article(
            created.id,
            UpdateArticleCommand {
                published: Some(true),
                ..UpdateArticleCommand::default()
            },
        )
        .await
        .unwrap();
    let stamp = published.published_at.expect("stamp on first publish");

    // unpublish keeps the stamp
    let unpublished = h
        .commands
        .update_article(
            created.id,
            UpdateArticleCommand {
                published: Some(false),
                ..UpdateArticleCommand::default()
            },
        )
        .await
        .unwrap();
    assert!(!unpublished.published);
    assert_eq!(unpublished.published_at, Some(stamp));

    // re-publish does not refresh it
    let republished = h
        .commands
        .update_article(
            created.id,
            UpdateArticleCommand {
                published: Some(true),
                ..UpdateArticleCommand::default()
            },
        )
        .await
        .unwrap();
    assert!(republished.published);
    assert_eq!(republished.published_at, Some(stamp));
}

#[tokio::test]
async fn update_does_not_bump_view_count() {
    let h = harness();
    let created = h
        .commands
        .create_article(create_command("Quiet update", "Ana"))
        .await
        .unwrap();

    let updated = h
        .commands
        .update_article(
            created.id,
            UpdateArticleCommand {
                content: Some("new content, still no view".into()),
                ..UpdateArticleCommand::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.view_count, 0);
}

#[tokio::test]
async fn empty_update_changes_only_updated_at() {
    let h = harness();
    let created = h
        .commands
        .create_article(published_command("Untouched", "Ana", &["rust", "web"]))
        .await
        .unwrap();

    let updated = h
        .commands
        .update_article(created.id, UpdateArticleCommand::default())
        .await
        .unwrap();

    assert_eq!(updated.title, created.title);
    assert_eq!(updated.slug, created.slug);
    assert_eq!(updated.content, created.content);
    assert_eq!(updated.summary, created.summary);
    assert_eq!(updated.author, created.author);
    assert_eq!(updated.published, created.published);
    assert_eq!(updated.published_at, created.published_at);
    assert_eq!(updated.tags, created.tags);
    assert_eq!(updated.view_count, created.view_count);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_missing_article_is_not_found() {
    let h = harness();
    let err = h
        .commands
        .update_article(999, UpdateArticleCommand::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_removes_article() {
    let h = harness();
    let created = h
        .commands
        .create_article(create_command("Short lived", "Ana"))
        .await
        .unwrap();

    h.commands.delete_article(created.id).await.unwrap();

    let err = h
        .queries
        .get_article_by_id(created.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_missing_article_is_not_found() {
    let h = harness();
    let err = h.commands.delete_article(12345).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn non_positive_ids_read_as_not_found() {
    let h = harness();
    for id in [0, -1] {
        let err = h
            .commands
            .update_article(id, UpdateArticleCommand::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));

        let err = h.commands.delete_article(id).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }
}

#[tokio::test]
async fn update_to_colliding_slug_is_a_conflict() {
    let h = harness();
    h.commands
        .create_article(create_command("Taken Slot", "Ana"))
        .await
        .unwrap();
    let other = h
        .commands
        .create_article(create_command("Free Slot", "Ana"))
        .await
        .unwrap();

    let err = h
        .commands
        .update_article(
            other.id,
            UpdateArticleCommand {
                title: Some("Taken Slot".into()),
                ..UpdateArticleCommand::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}
