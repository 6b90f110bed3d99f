// src/application/validation.rs
//
// Explicit field validation, called at the HTTP boundary before the
// services run. Returns every violated constraint, not just the first.

use crate::application::commands::articles::{CreateArticleCommand, UpdateArticleCommand};
use crate::application::error::ApplicationError;
use crate::application::queries::articles::ListArticlesQuery;
use crate::domain::article::filter::MAX_LIMIT;
use std::fmt;

pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 255;
pub const CONTENT_MIN: usize = 10;
pub const SUMMARY_MAX: usize = 500;
pub const AUTHOR_MIN: usize = 3;
pub const AUTHOR_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_create(command: &CreateArticleCommand) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_title(&command.title, &mut errors);
    check_content(&command.content, &mut errors);
    if let Some(summary) = &command.summary {
        check_summary(summary, &mut errors);
    }
    check_author(&command.author, &mut errors);
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn validate_update(command: &UpdateArticleCommand) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if let Some(title) = &command.title {
        check_title(title, &mut errors);
    }
    if let Some(content) = &command.content {
        check_content(content, &mut errors);
    }
    if let Some(summary) = &command.summary {
        check_summary(summary, &mut errors);
    }
    if let Some(author) = &command.author {
        check_author(author, &mut errors);
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn validate_listing(query: &ListArticlesQuery) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if let Some(page) = query.page
        && page < 1
    {
        errors.push(FieldError::new("page", "must be a positive integer"));
    }
    if let Some(limit) = query.limit
        && !(1..=MAX_LIMIT).contains(&limit)
    {
        errors.push(FieldError::new(
            "limit",
            format!("must be between 1 and {MAX_LIMIT}"),
        ));
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Collapses field errors into a single `ApplicationError::Validation`
/// message suitable for the HTTP error body.
pub fn into_validation_error(errors: Vec<FieldError>) -> ApplicationError {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    ApplicationError::validation(joined)
}

fn check_title(title: &str, errors: &mut Vec<FieldError>) {
    let len = title.chars().count();
    if !(TITLE_MIN..=TITLE_MAX).contains(&len) {
        errors.push(FieldError::new(
            "title",
            format!("must be between {TITLE_MIN} and {TITLE_MAX} characters"),
        ));
    }
}

fn check_content(content: &str, errors: &mut Vec<FieldError>) {
    if content.chars().count() < CONTENT_MIN {
        errors.push(FieldError::new(
            "content",
            format!("must be at least {CONTENT_MIN} characters"),
        ));
    }
}

fn check_summary(summary: &str, errors: &mut Vec<FieldError>) {
    if summary.chars().count() > SUMMARY_MAX {
        errors.push(FieldError::new(
            "summary",
            format!("must be at most {SUMMARY_MAX} characters"),
        ));
    }
}

fn check_author(author: &str, errors: &mut Vec<FieldError>) {
    let len = author.chars().count();
    if !(AUTHOR_MIN..=AUTHOR_MAX).contains(&len) {
        errors.push(FieldError::new(
            "author",
            format!("must be between {AUTHOR_MIN} and {AUTHOR_MAX} characters"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateArticleCommand {
        CreateArticleCommand {
            title: "A valid title".into(),
            content: "long enough content".into(),
            summary: None,
            author: "Ana Souza".into(),
            published: false,
            tags: vec![],
        }
    }

    #[test]
    fn accepts_valid_input() {
        assert!(validate_create(&valid_create()).is_ok());
    }

    #[test]
    fn rejects_boundary_violations() {
        let mut command = valid_create();
        command.title = "ab".into();
        command.content = "too short".chars().take(9).collect();
        command.author = "xy".into();
        command.summary = Some("s".repeat(501));

        let errors = validate_create(&command).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "content", "summary", "author"]);
    }

    #[test]
    fn boundary_lengths_are_inclusive() {
        let mut command = valid_create();
        command.title = "a".repeat(255);
        command.content = "c".repeat(10);
        command.summary = Some("s".repeat(500));
        command.author = "a".repeat(100);
        assert!(validate_create(&command).is_ok());

        command.title = "a".repeat(256);
        assert!(validate_create(&command).is_err());
    }

    #[test]
    fn update_checks_only_present_fields() {
        let command = UpdateArticleCommand {
            title: None,
            content: None,
            summary: None,
            author: None,
            published: None,
            tags: None,
        };
        assert!(validate_update(&command).is_ok());

        let command = UpdateArticleCommand {
            title: Some("no".into()),
            ..command
        };
        let errors = validate_update(&command).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn listing_bounds() {
        let mut query = ListArticlesQuery::default();
        assert!(validate_listing(&query).is_ok());

        query.page = Some(0);
        query.limit = Some(101);
        let errors = validate_listing(&query).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
