use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactStatus;
use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::models::DashboardStats;
use crate::domain::dashboard::models::RecentContact;

/// Port for dashboard read models.
#[async_trait]
pub trait DashboardServicePort: Send + Sync + 'static {
    /// Counters, with the month taken from `today`.
    async fn stats(&self, today: NaiveDate) -> Result<DashboardStats, DashboardError>;

    /// Newest contacts first, phones masked.
    async fn recent_contacts(&self, limit: i64) -> Result<Vec<RecentContact>, DashboardError>;
}

/// Cross-table counting queries.
#[async_trait]
pub trait DashboardRepository: Send + Sync + 'static {
    async fn count_contacts(&self, status: Option<ContactStatus>) -> Result<i64, DashboardError>;

    /// Contacts created on or after the start of `date`.
    async fn count_contacts_since(&self, date: NaiveDate) -> Result<i64, DashboardError>;

    async fn count_news(&self) -> Result<i64, DashboardError>;

    async fn count_cases(&self) -> Result<i64, DashboardError>;

    async fn count_offerings(&self) -> Result<i64, DashboardError>;

    async fn latest_contacts(&self, limit: i64) -> Result<Vec<Contact>, DashboardError>;
}
