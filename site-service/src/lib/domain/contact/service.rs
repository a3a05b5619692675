use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactStatus;
use crate::domain::contact::models::SubmitContactCommand;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::page::Page;

pub struct ContactService<CR>
where
    CR: ContactRepository,
{
    repository: Arc<CR>,
}

impl<CR> ContactService<CR>
where
    CR: ContactRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ContactServicePort for ContactService<CR>
where
    CR: ContactRepository,
{
    async fn submit_contact(&self, command: SubmitContactCommand) -> Result<Contact, ContactError> {
        if command.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if command.phone.trim().is_empty() {
            return Err(ContactError::MissingField("phone"));
        }

        let contact = self.repository.create(command).await?;
        tracing::info!(
            contact_id = contact.id,
            service_type = ?contact.service_type,
            "Contact request received"
        );

        Ok(contact)
    }

    async fn list_contacts(&self, page: Page) -> Result<Vec<Contact>, ContactError> {
        self.repository.list(page).await
    }

    async fn get_contact(&self, id: i64) -> Result<Contact, ContactError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ContactError::NotFound(id))
    }

    async fn update_status(
        &self,
        id: i64,
        status: ContactStatus,
    ) -> Result<Contact, ContactError> {
        let contact = self
            .repository
            .update_status(id, status)
            .await?
            .ok_or(ContactError::NotFound(id))?;

        tracing::info!(contact_id = id, status = %status, "Contact status changed");
        Ok(contact)
    }
}
