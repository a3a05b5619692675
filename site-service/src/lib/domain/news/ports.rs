use async_trait::async_trait;

use crate::domain::news::errors::NewsError;
use crate::domain::news::models::CreateNewsCommand;
use crate::domain::news::models::News;
use crate::domain::news::models::NewsFilter;
use crate::domain::news::models::UpdateNewsCommand;

/// Port for news operations.
#[async_trait]
pub trait NewsServicePort: Send + Sync + 'static {
    async fn list_news(&self, filter: NewsFilter) -> Result<Vec<News>, NewsError>;

    /// Retrieve a news item and count the view.
    ///
    /// # Errors
    /// * `NotFound` - No news item with this id
    async fn view_news(&self, id: i64) -> Result<News, NewsError>;

    /// # Errors
    /// * `EmptyTitle` - Title is blank
    async fn create_news(&self, command: CreateNewsCommand) -> Result<News, NewsError>;

    /// # Errors
    /// * `NotFound` - No news item with this id
    /// * `EmptyTitle` - Patch blanks the title
    async fn update_news(&self, id: i64, command: UpdateNewsCommand) -> Result<News, NewsError>;

    async fn delete_news(&self, id: i64) -> Result<(), NewsError>;
}

/// Persistence operations for news.
#[async_trait]
pub trait NewsRepository: Send + Sync + 'static {
    async fn list(&self, filter: &NewsFilter) -> Result<Vec<News>, NewsError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<News>, NewsError>;

    /// Bump the view counter atomically and return the updated row.
    async fn increment_view_count(&self, id: i64) -> Result<Option<News>, NewsError>;

    async fn create(&self, command: CreateNewsCommand) -> Result<News, NewsError>;

    /// Write back a patched item; the store refreshes `updated_at`.
    async fn update(&self, news: News) -> Result<News, NewsError>;

    /// # Returns
    /// false when no row matched
    async fn delete(&self, id: i64) -> Result<bool, NewsError>;
}
