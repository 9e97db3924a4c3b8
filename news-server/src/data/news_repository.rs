use crate::domain::error::DomainError;
use crate::domain::news::{News, NewsDraft};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, info};

/// Create/read access to the news store. Constructed explicitly and passed
/// in; handlers never reach for a global connection.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn create(&self, draft: NewsDraft) -> Result<News, DomainError>;
    async fn list_all(&self) -> Result<Vec<News>, DomainError>;
    async fn get_by_link(&self, link: i64) -> Result<News, DomainError>;
    async fn max_link(&self) -> Result<Option<i64>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
}

#[derive(Clone)]
pub struct SqliteNewsRepository {
    pool: SqlitePool,
}

impl SqliteNewsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for SqliteNewsRepository {
    async fn create(&self, draft: NewsDraft) -> Result<News, DomainError> {
        draft.validate()?;

        let news = sqlx::query_as::<_, News>(
            r#"
            INSERT INTO news (title, text, created, link)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, text, created, link
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.text)
        .bind(draft.created)
        .bind(draft.link.unwrap_or(0))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create news item: {}", e);
            DomainError::Internal(format!("database error: {}", e))
        })?;

        info!(news_id = news.id, link = news.link, "news item persisted");
        Ok(news)
    }

    async fn list_all(&self) -> Result<Vec<News>, DomainError> {
        sqlx::query_as::<_, News>(
            r#"
            SELECT id, title, text, created, link
            FROM news
            ORDER BY title ASC, created ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to list news items: {}", e);
            DomainError::Internal(format!("database error: {}", e))
        })
    }

    async fn get_by_link(&self, link: i64) -> Result<News, DomainError> {
        // The schema does not declare `link` unique, so fetch up to two
        // rows and refuse to pick one when the key turns out ambiguous.
        let mut rows = sqlx::query_as::<_, News>(
            r#"
            SELECT id, title, text, created, link
            FROM news
            WHERE link = ?
            LIMIT 2
            "#,
        )
        .bind(link)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to fetch news item by link {}: {}", link, e);
            DomainError::Internal(format!("database error: {}", e))
        })?;

        match rows.len() {
            0 => Err(DomainError::NotFound(link)),
            1 => Ok(rows.remove(0)),
            _ => {
                error!(link, "link matches more than one news item");
                Err(DomainError::MultipleResults(link))
            }
        }
    }

    async fn max_link(&self) -> Result<Option<i64>, DomainError> {
        sqlx::query_scalar::<_, Option<i64>>("SELECT MAX(link) FROM news")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to read max link: {}", e);
                DomainError::Internal(format!("database error: {}", e))
            })
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to count news items: {}", e);
                DomainError::Internal(format!("database error: {}", e))
            })
    }
}
