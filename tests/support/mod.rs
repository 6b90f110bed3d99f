// tests/support/mod.rs
#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

use plume_core::application::commands::articles::{ArticleCommandService, CreateArticleCommand};
use plume_core::application::ports::time::Clock;
use plume_core::application::queries::articles::ArticleQueryService;
use plume_core::domain::article::ArticleRepository;
use plume_core::infrastructure::repositories::InMemoryArticleRepository;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .expect("invalid RFC3339 in tests/support/mod.rs")
        .with_timezone(&Utc)
});

/// Deterministic base timestamp shared by the fixtures.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock that advances one second per call, so consecutive creates get
/// distinct, ordered timestamps.
pub struct TickingClock {
    next: Mutex<DateTime<Utc>>,
}

impl TickingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut guard = self.next.lock().unwrap();
        let current = *guard;
        *guard = current + Duration::seconds(1);
        current
    }
}

pub struct Harness {
    pub repo: Arc<InMemoryArticleRepository>,
    pub commands: ArticleCommandService,
    pub queries: ArticleQueryService,
}

pub fn harness_with_clock(clock: Arc<dyn Clock>) -> Harness {
    let repo = Arc::new(InMemoryArticleRepository::new());
    let repo_dyn: Arc<dyn ArticleRepository> = Arc::clone(&repo) as Arc<dyn ArticleRepository>;
    Harness {
        repo,
        commands: ArticleCommandService::new(Arc::clone(&repo_dyn), Arc::clone(&clock)),
        queries: ArticleQueryService::new(repo_dyn),
    }
}

pub fn harness() -> Harness {
    harness_with_clock(Arc::new(TickingClock::starting_at(fixed_now())))
}

pub fn create_command(title: &str, author: &str) -> CreateArticleCommand {
    CreateArticleCommand {
        title: title.into(),
        content: format!("long enough content for {title}"),
        summary: None,
        author: author.into(),
        published: false,
        tags: vec![],
    }
}

pub fn published_command(title: &str, author: &str, tags: &[&str]) -> CreateArticleCommand {
    CreateArticleCommand {
        published: true,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        ..create_command(title, author)
    }
}
