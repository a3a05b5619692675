use async_trait::async_trait;

use crate::domain::case::errors::CaseError;
use crate::domain::case::models::Case;
use crate::domain::case::models::CaseFilter;
use crate::domain::case::models::CreateCaseCommand;
use crate::domain::case::models::UpdateCaseCommand;

/// Port for case study operations.
#[async_trait]
pub trait CaseServicePort: Send + Sync + 'static {
    async fn list_cases(&self, filter: CaseFilter) -> Result<Vec<Case>, CaseError>;

    async fn get_case(&self, id: i64) -> Result<Case, CaseError>;

    async fn create_case(&self, command: CreateCaseCommand) -> Result<Case, CaseError>;

    async fn update_case(&self, id: i64, command: UpdateCaseCommand) -> Result<Case, CaseError>;

    async fn delete_case(&self, id: i64) -> Result<(), CaseError>;
}

/// Persistence operations for case studies.
#[async_trait]
pub trait CaseRepository: Send + Sync + 'static {
    async fn list(&self, filter: &CaseFilter) -> Result<Vec<Case>, CaseError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Case>, CaseError>;

    async fn create(&self, command: CreateCaseCommand) -> Result<Case, CaseError>;

    async fn update(&self, case: Case) -> Result<Case, CaseError>;

    async fn delete(&self, id: i64) -> Result<bool, CaseError>;
}
