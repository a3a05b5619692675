use async_trait::async_trait;

use crate::domain::offering::errors::OfferingError;
use crate::domain::offering::models::CreateOfferingCommand;
use crate::domain::offering::models::ServiceOffering;
use crate::domain::offering::models::Slug;
use crate::domain::offering::models::UpdateOfferingCommand;

/// Port for service offering operations.
#[async_trait]
pub trait OfferingServicePort: Send + Sync + 'static {
    /// List offerings by ascending sort order, newest first within a rank.
    async fn list_offerings(
        &self,
        featured: Option<bool>,
    ) -> Result<Vec<ServiceOffering>, OfferingError>;

    /// # Errors
    /// * `NotFoundBySlug` - No offering with this slug
    async fn get_offering_by_slug(&self, slug: &Slug) -> Result<ServiceOffering, OfferingError>;

    /// # Errors
    /// * `SlugAlreadyExists` - Slug is taken
    async fn create_offering(
        &self,
        command: CreateOfferingCommand,
    ) -> Result<ServiceOffering, OfferingError>;

    /// # Errors
    /// * `NotFound` - No offering with this id
    /// * `SlugAlreadyExists` - Patch moves the slug onto a taken one
    async fn update_offering(
        &self,
        id: i64,
        command: UpdateOfferingCommand,
    ) -> Result<ServiceOffering, OfferingError>;

    async fn delete_offering(&self, id: i64) -> Result<(), OfferingError>;
}

/// Persistence operations for service offerings.
#[async_trait]
pub trait OfferingRepository: Send + Sync + 'static {
    async fn list(&self, featured: Option<bool>) -> Result<Vec<ServiceOffering>, OfferingError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceOffering>, OfferingError>;

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<ServiceOffering>, OfferingError>;

    /// # Errors
    /// * `SlugAlreadyExists` - Unique constraint on the slug tripped
    async fn create(
        &self,
        command: CreateOfferingCommand,
    ) -> Result<ServiceOffering, OfferingError>;

    async fn update(&self, offering: ServiceOffering) -> Result<ServiceOffering, OfferingError>;

    async fn delete(&self, id: i64) -> Result<bool, OfferingError>;
}
