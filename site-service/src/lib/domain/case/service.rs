use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::case::errors::CaseError;
use crate::domain::case::models::Case;
use crate::domain::case::models::CaseFilter;
use crate::domain::case::models::CreateCaseCommand;
use crate::domain::case::models::UpdateCaseCommand;
use crate::domain::case::ports::CaseRepository;
use crate::domain::case::ports::CaseServicePort;

pub struct CaseService<CR>
where
    CR: CaseRepository,
{
    repository: Arc<CR>,
}

impl<CR> CaseService<CR>
where
    CR: CaseRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CaseServicePort for CaseService<CR>
where
    CR: CaseRepository,
{
    async fn list_cases(&self, filter: CaseFilter) -> Result<Vec<Case>, CaseError> {
        self.repository.list(&filter).await
    }

    async fn get_case(&self, id: i64) -> Result<Case, CaseError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CaseError::NotFound(id))
    }

    async fn create_case(&self, command: CreateCaseCommand) -> Result<Case, CaseError> {
        if command.title.trim().is_empty() {
            return Err(CaseError::EmptyTitle);
        }

        let case = self.repository.create(command).await?;
        tracing::info!(case_id = case.id, title = %case.title, "Case created");

        Ok(case)
    }

    async fn update_case(&self, id: i64, command: UpdateCaseCommand) -> Result<Case, CaseError> {
        let mut case = self.get_case(id).await?;

        command.apply(&mut case);
        if case.title.trim().is_empty() {
            return Err(CaseError::EmptyTitle);
        }

        self.repository.update(case).await
    }

    async fn delete_case(&self, id: i64) -> Result<(), CaseError> {
        if !self.repository.delete(id).await? {
            return Err(CaseError::NotFound(id));
        }

        tracing::info!(case_id = id, "Case deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;

    mock! {
        pub TestCaseRepository {}

        #[async_trait]
        impl CaseRepository for TestCaseRepository {
            async fn list(&self, filter: &CaseFilter) -> Result<Vec<Case>, CaseError>;
            async fn find_by_id(&self, id: i64) -> Result<Option<Case>, CaseError>;
            async fn create(&self, command: CreateCaseCommand) -> Result<Case, CaseError>;
            async fn update(&self, case: Case) -> Result<Case, CaseError>;
            async fn delete(&self, id: i64) -> Result<bool, CaseError>;
        }
    }

    #[tokio::test]
    async fn test_get_missing_case() {
        let mut repository = MockTestCaseRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = CaseService::new(Arc::new(repository));
        assert_eq!(service.get_case(5).await, Err(CaseError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_update_missing_case_never_saves() {
        let mut repository = MockTestCaseRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = CaseService::new(Arc::new(repository));
        let result = service
            .update_case(5, UpdateCaseCommand::default())
            .await;
        assert_eq!(result, Err(CaseError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_create_case_rejects_blank_title() {
        let mut repository = MockTestCaseRepository::new();
        repository.expect_create().times(0);

        let service = CaseService::new(Arc::new(repository));
        let command = CreateCaseCommand {
            title: String::new(),
            description: None,
            location: None,
            service_type: None,
            area: None,
            cover_image: None,
            images: vec![],
            is_featured: 0,
        };

        assert_eq!(service.create_case(command).await, Err(CaseError::EmptyTitle));
    }

    #[tokio::test]
    async fn test_list_passes_filter_through() {
        let mut repository = MockTestCaseRepository::new();
        repository
            .expect_list()
            .withf(|filter| filter.featured_flag() == Some(1) && filter.page.limit == 100)
            .times(1)
            .returning(|_| {
                Ok(vec![Case {
                    id: 1,
                    title: "福州某小区全屋翻新".to_string(),
                    description: None,
                    location: None,
                    service_type: Some("墙面翻新".to_string()),
                    area: Some("120㎡".to_string()),
                    cover_image: None,
                    images: vec![],
                    is_featured: 1,
                    created_at: Utc::now(),
                    updated_at: None,
                }])
            });

        let service = CaseService::new(Arc::new(repository));
        let filter = CaseFilter {
            featured: Some(true),
            ..Default::default()
        };

        let cases = service.list_cases(filter).await.unwrap();
        assert_eq!(cases.len(), 1);
    }
}
