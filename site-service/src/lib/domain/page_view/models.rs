use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

use crate::domain::page_view::errors::PageViewError;

/// One recorded visit to a public page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub id: i64,
    pub page: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub view_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordPageViewCommand {
    pub page: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub view_date: NaiveDate,
}

impl RecordPageViewCommand {
    const MAX_PAGE_LENGTH: usize = 100;
    const MAX_USER_AGENT_LENGTH: usize = 500;

    /// Build a record for a visit on `view_date`.
    ///
    /// The user agent is cut to its first 500 characters; an empty one is dropped.
    ///
    /// # Errors
    /// * `EmptyPage` - Page name is blank
    /// * `PageTooLong` - Page name longer than 100 characters
    pub fn new(
        page: String,
        ip_address: Option<String>,
        user_agent: Option<String>,
        view_date: NaiveDate,
    ) -> Result<Self, PageViewError> {
        let length = page.chars().count();
        if page.trim().is_empty() {
            return Err(PageViewError::EmptyPage);
        }
        if length > Self::MAX_PAGE_LENGTH {
            return Err(PageViewError::PageTooLong {
                max: Self::MAX_PAGE_LENGTH,
                actual: length,
            });
        }

        let user_agent = user_agent
            .filter(|agent| !agent.is_empty())
            .map(|agent| agent.chars().take(Self::MAX_USER_AGENT_LENGTH).collect());

        Ok(Self {
            page,
            ip_address,
            user_agent,
            view_date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCount {
    pub page: String,
    pub count: i64,
}

/// Traffic summary relative to one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewStats {
    pub total_views: i64,
    pub today_views: i64,
    pub yesterday_views: i64,
    pub week_views: i64,
    pub month_views: i64,
    /// Ascending by date; days without views are absent.
    pub daily_stats: Vec<DailyCount>,
    /// Busiest pages first.
    pub page_stats: Vec<PageCount>,
}
