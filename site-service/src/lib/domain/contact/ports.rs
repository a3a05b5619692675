use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactStatus;
use crate::domain::contact::models::SubmitContactCommand;
use crate::domain::page::Page;

/// Port for contact request operations.
#[async_trait]
pub trait ContactServicePort: Send + Sync + 'static {
    /// Record a new enquiry with status `pending`.
    ///
    /// # Errors
    /// * `MissingField` - Name or phone is blank
    async fn submit_contact(&self, command: SubmitContactCommand) -> Result<Contact, ContactError>;

    async fn list_contacts(&self, page: Page) -> Result<Vec<Contact>, ContactError>;

    async fn get_contact(&self, id: i64) -> Result<Contact, ContactError>;

    async fn update_status(&self, id: i64, status: ContactStatus)
        -> Result<Contact, ContactError>;
}

/// Persistence operations for contact requests.
#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    async fn create(&self, command: SubmitContactCommand) -> Result<Contact, ContactError>;

    async fn list(&self, page: Page) -> Result<Vec<Contact>, ContactError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, ContactError>;

    /// # Returns
    /// The updated contact, or None when no row matched
    async fn update_status(
        &self,
        id: i64,
        status: ContactStatus,
    ) -> Result<Option<Contact>, ContactError>;
}
