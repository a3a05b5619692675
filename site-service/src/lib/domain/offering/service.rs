use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::offering::errors::OfferingError;
use crate::domain::offering::models::CreateOfferingCommand;
use crate::domain::offering::models::ServiceOffering;
use crate::domain::offering::models::Slug;
use crate::domain::offering::models::UpdateOfferingCommand;
use crate::domain::offering::ports::OfferingRepository;
use crate::domain::offering::ports::OfferingServicePort;

pub struct OfferingService<OR>
where
    OR: OfferingRepository,
{
    repository: Arc<OR>,
}

impl<OR> OfferingService<OR>
where
    OR: OfferingRepository,
{
    pub fn new(repository: Arc<OR>) -> Self {
        Self { repository }
    }

    async fn ensure_slug_free(&self, slug: &Slug) -> Result<(), OfferingError> {
        match self.repository.find_by_slug(slug).await? {
            Some(_) => Err(OfferingError::SlugAlreadyExists(slug.to_string())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<OR> OfferingServicePort for OfferingService<OR>
where
    OR: OfferingRepository,
{
    async fn list_offerings(
        &self,
        featured: Option<bool>,
    ) -> Result<Vec<ServiceOffering>, OfferingError> {
        self.repository.list(featured).await
    }

    async fn get_offering_by_slug(&self, slug: &Slug) -> Result<ServiceOffering, OfferingError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| OfferingError::NotFoundBySlug(slug.to_string()))
    }

    async fn create_offering(
        &self,
        command: CreateOfferingCommand,
    ) -> Result<ServiceOffering, OfferingError> {
        if command.name.trim().is_empty() {
            return Err(OfferingError::EmptyName);
        }
        self.ensure_slug_free(&command.slug).await?;

        let offering = self.repository.create(command).await?;
        tracing::info!(
            offering_id = offering.id,
            slug = %offering.slug,
            "Service offering created"
        );

        Ok(offering)
    }

    async fn update_offering(
        &self,
        id: i64,
        command: UpdateOfferingCommand,
    ) -> Result<ServiceOffering, OfferingError> {
        let mut offering = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(OfferingError::NotFound(id))?;

        if let Some(slug) = command.slug_change(&offering) {
            self.ensure_slug_free(slug).await?;
        }

        command.apply(&mut offering);
        if offering.name.trim().is_empty() {
            return Err(OfferingError::EmptyName);
        }

        self.repository.update(offering).await
    }

    async fn delete_offering(&self, id: i64) -> Result<(), OfferingError> {
        if !self.repository.delete(id).await? {
            return Err(OfferingError::NotFound(id));
        }

        tracing::info!(offering_id = id, "Service offering deleted");
        Ok(())
    }
}
