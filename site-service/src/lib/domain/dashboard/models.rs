use chrono::DateTime;
use chrono::Utc;

use crate::domain::contact::models::mask_phone;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactStatus;

/// Headline counters for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub pending_contacts: i64,
    pub total_contacts: i64,
    pub total_news: i64,
    pub total_cases: i64,
    pub total_services: i64,
    pub contacts_this_month: i64,
}

/// Contact summary with the phone number masked.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentContact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub service_type: Option<String>,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Contact> for RecentContact {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            phone: mask_phone(&contact.phone),
            service_type: contact.service_type,
            status: contact.status,
            created_at: contact.created_at,
        }
    }
}
