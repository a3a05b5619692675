use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyProfile;
use crate::domain::company::models::UpdateCompanyCommand;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::company::ports::CompanyServicePort;

pub struct CompanyService<CR>
where
    CR: CompanyRepository,
{
    repository: Arc<CR>,
}

impl<CR> CompanyService<CR>
where
    CR: CompanyRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CompanyServicePort for CompanyService<CR>
where
    CR: CompanyRepository,
{
    async fn get_profile(&self) -> Result<Company, CompanyError> {
        match self.repository.find().await? {
            Some(company) => Ok(company),
            None => {
                tracing::info!("No company profile stored, creating default");
                self.repository.ensure(&CompanyProfile::default()).await
            }
        }
    }

    async fn update_profile(&self, command: UpdateCompanyCommand) -> Result<Company, CompanyError> {
        let mut company = self.get_profile().await?;

        command.apply(&mut company.profile);
        if company.profile.name.trim().is_empty() {
            return Err(CompanyError::EmptyName);
        }

        let company = self.repository.update(company).await?;
        tracing::info!(company_id = company.id, "Company profile updated");

        Ok(company)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub TestCompanyRepository {}

        #[async_trait]
        impl CompanyRepository for TestCompanyRepository {
            async fn find(&self) -> Result<Option<Company>, CompanyError>;
            async fn ensure(&self, profile: &CompanyProfile) -> Result<Company, CompanyError>;
            async fn update(&self, company: Company) -> Result<Company, CompanyError>;
        }
    }

    #[tokio::test]
    async fn test_get_profile_creates_default_when_absent() {
        let mut repository = MockTestCompanyRepository::new();
        repository.expect_find().times(1).returning(|| Ok(None));
        repository
            .expect_ensure()
            .withf(|profile| *profile == CompanyProfile::default())
            .times(1)
            .returning(|profile| {
                Ok(Company {
                    id: 1,
                    profile: profile.clone(),
                })
            });

        let service = CompanyService::new(Arc::new(repository));
        let company = service.get_profile().await.unwrap();

        assert_eq!(company.profile.short_name.as_deref(), Some("宜然焕新"));
    }

    #[tokio::test]
    async fn test_get_profile_returns_stored_row() {
        let mut repository = MockTestCompanyRepository::new();
        repository.expect_find().returning(|| {
            Ok(Some(Company {
                id: 1,
                profile: CompanyProfile {
                    name: "宜然焕新".to_string(),
                    ..CompanyProfile::default()
                },
            }))
        });
        repository.expect_ensure().times(0);

        let service = CompanyService::new(Arc::new(repository));
        assert_eq!(service.get_profile().await.unwrap().profile.name, "宜然焕新");
    }

    #[tokio::test]
    async fn test_update_profile_rejects_blank_name() {
        let mut repository = MockTestCompanyRepository::new();
        repository.expect_find().returning(|| {
            Ok(Some(Company {
                id: 1,
                profile: CompanyProfile::default(),
            }))
        });
        repository.expect_update().times(0);

        let service = CompanyService::new(Arc::new(repository));
        let command = UpdateCompanyCommand {
            name: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(
            service.update_profile(command).await,
            Err(CompanyError::EmptyName)
        );
    }
}
