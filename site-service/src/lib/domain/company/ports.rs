use async_trait::async_trait;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyProfile;
use crate::domain::company::models::UpdateCompanyCommand;

/// Port for the company profile.
#[async_trait]
pub trait CompanyServicePort: Send + Sync + 'static {
    /// Return the profile, storing the default one when none exists.
    async fn get_profile(&self) -> Result<Company, CompanyError>;

    /// Patch the profile, storing the default one first when none exists.
    ///
    /// Callers check the superuser flag before calling.
    async fn update_profile(&self, command: UpdateCompanyCommand) -> Result<Company, CompanyError>;
}

/// Persistence for the singleton profile row.
#[async_trait]
pub trait CompanyRepository: Send + Sync + 'static {
    async fn find(&self) -> Result<Option<Company>, CompanyError>;

    /// Insert `profile` unless a row exists, then return the stored row.
    async fn ensure(&self, profile: &CompanyProfile) -> Result<Company, CompanyError>;

    async fn update(&self, company: Company) -> Result<Company, CompanyError>;
}
