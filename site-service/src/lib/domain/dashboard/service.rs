use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use chrono::NaiveDate;

use crate::domain::contact::models::ContactStatus;
use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::models::DashboardStats;
use crate::domain::dashboard::models::RecentContact;
use crate::domain::dashboard::ports::DashboardRepository;
use crate::domain::dashboard::ports::DashboardServicePort;

pub struct DashboardService<DR>
where
    DR: DashboardRepository,
{
    repository: Arc<DR>,
}

impl<DR> DashboardService<DR>
where
    DR: DashboardRepository,
{
    pub fn new(repository: Arc<DR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<DR> DashboardServicePort for DashboardService<DR>
where
    DR: DashboardRepository,
{
    async fn stats(&self, today: NaiveDate) -> Result<DashboardStats, DashboardError> {
        let month_start = today.with_day(1).unwrap_or(today);

        Ok(DashboardStats {
            pending_contacts: self
                .repository
                .count_contacts(Some(ContactStatus::Pending))
                .await?,
            total_contacts: self.repository.count_contacts(None).await?,
            total_news: self.repository.count_news().await?,
            total_cases: self.repository.count_cases().await?,
            total_services: self.repository.count_offerings().await?,
            contacts_this_month: self.repository.count_contacts_since(month_start).await?,
        })
    }

    async fn recent_contacts(&self, limit: i64) -> Result<Vec<RecentContact>, DashboardError> {
        let contacts = self.repository.latest_contacts(limit.max(0)).await?;

        Ok(contacts.into_iter().map(RecentContact::from).collect())
    }
}
