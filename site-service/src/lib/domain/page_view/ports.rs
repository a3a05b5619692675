use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::page_view::errors::PageViewError;
use crate::domain::page_view::models::DailyCount;
use crate::domain::page_view::models::PageCount;
use crate::domain::page_view::models::PageView;
use crate::domain::page_view::models::PageViewStats;
use crate::domain::page_view::models::RecordPageViewCommand;

/// Port for page view tracking.
#[async_trait]
pub trait PageViewServicePort: Send + Sync + 'static {
    async fn record_view(&self, command: RecordPageViewCommand) -> Result<PageView, PageViewError>;

    /// Summarise traffic as seen on `today`.
    async fn stats(&self, today: NaiveDate) -> Result<PageViewStats, PageViewError>;
}

/// Persistence and aggregation queries for page views.
#[async_trait]
pub trait PageViewRepository: Send + Sync + 'static {
    async fn record(&self, command: RecordPageViewCommand) -> Result<PageView, PageViewError>;

    async fn count_all(&self) -> Result<i64, PageViewError>;

    async fn count_on(&self, date: NaiveDate) -> Result<i64, PageViewError>;

    /// Views dated on or after `date`.
    async fn count_since(&self, date: NaiveDate) -> Result<i64, PageViewError>;

    /// Per-day totals on or after `date`, ascending.
    async fn daily_counts_since(&self, date: NaiveDate) -> Result<Vec<DailyCount>, PageViewError>;

    /// Pages with the most views, busiest first.
    async fn top_pages(&self, limit: i64) -> Result<Vec<PageCount>, PageViewError>;
}
