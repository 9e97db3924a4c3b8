use std::sync::Arc;

use chrono::NaiveTime;
use tracing::instrument;

use crate::data::news_repository::NewsRepository;
use crate::domain::error::DomainError;
use crate::domain::form::ValidNewsItem;
use crate::domain::news::{News, NewsDraft};

#[derive(Clone)]
pub struct NewsService<R: NewsRepository + 'static> {
    repo: Arc<R>,
}

impl<R> NewsService<R>
where
    R: NewsRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_news(&self) -> Result<Vec<News>, DomainError> {
        self.repo.list_all().await
    }

    pub async fn news_by_link(&self, link: i64) -> Result<News, DomainError> {
        self.repo.get_by_link(link).await
    }

    pub async fn news_count(&self) -> Result<i64, DomainError> {
        self.repo.count().await
    }

    /// Persists a validated submission. The form's date becomes the stored
    /// creation timestamp (midnight UTC), and the item gets the next free
    /// link so the detail page can address it.
    #[instrument(skip(self))]
    pub async fn create_news(&self, item: ValidNewsItem) -> Result<News, DomainError> {
        let link = self.repo.max_link().await?.unwrap_or(0) + 1;
        let created = item.created_on.and_time(NaiveTime::MIN).and_utc();

        let draft = NewsDraft::new(item.title, item.text)
            .with_created(created)
            .with_link(link);
        self.repo.create(draft).await
    }
}
