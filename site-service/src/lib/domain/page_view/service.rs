use std::sync::Arc;

use async_trait::async_trait;
use chrono::Days;
use chrono::NaiveDate;

use crate::domain::page_view::errors::PageViewError;
use crate::domain::page_view::models::PageView;
use crate::domain::page_view::models::PageViewStats;
use crate::domain::page_view::models::RecordPageViewCommand;
use crate::domain::page_view::ports::PageViewRepository;
use crate::domain::page_view::ports::PageViewServicePort;

const TOP_PAGES: i64 = 10;

pub struct PageViewService<PR>
where
    PR: PageViewRepository,
{
    repository: Arc<PR>,
}

impl<PR> PageViewService<PR>
where
    PR: PageViewRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

#[async_trait]
impl<PR> PageViewServicePort for PageViewService<PR>
where
    PR: PageViewRepository,
{
    async fn record_view(&self, command: RecordPageViewCommand) -> Result<PageView, PageViewError> {
        let view = self.repository.record(command).await?;
        tracing::debug!(page = %view.page, view_date = %view.view_date, "Page view recorded");

        Ok(view)
    }

    async fn stats(&self, today: NaiveDate) -> Result<PageViewStats, PageViewError> {
        let yesterday = days_before(today, 1);
        let week_ago = days_before(today, 7);
        let month_ago = days_before(today, 30);

        Ok(PageViewStats {
            total_views: self.repository.count_all().await?,
            today_views: self.repository.count_on(today).await?,
            yesterday_views: self.repository.count_on(yesterday).await?,
            week_views: self.repository.count_since(week_ago).await?,
            month_views: self.repository.count_since(month_ago).await?,
            daily_stats: self.repository.daily_counts_since(week_ago).await?,
            page_stats: self.repository.top_pages(TOP_PAGES).await?,
        })
    }
}
