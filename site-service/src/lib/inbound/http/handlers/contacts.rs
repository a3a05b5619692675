use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::PageParams;
use crate::domain::account::models::EmailAddress;
use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactStatus;
use crate::domain::contact::models::SubmitContactCommand;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::router::AppState;

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<SubmitContactRequest>,
) -> Result<ApiSuccess<ContactResponseData>, ApiError> {
    state
        .contact_service
        .submit_contact(body.try_into()?)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}

pub async fn list_contacts(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<ApiSuccess<Vec<ContactResponseData>>, ApiError> {
    state
        .contact_service
        .list_contacts(page.into())
        .await
        .map_err(ApiError::from)
        .map(|contacts| ApiSuccess::new(StatusCode::OK, contacts.iter().map(Into::into).collect()))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<ContactResponseData>, ApiError> {
    state
        .contact_service
        .get_contact(id)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    status: String,
}

pub async fn update_contact_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> Result<ApiSuccess<ContactResponseData>, ApiError> {
    let status: ContactStatus = query.status.parse().map_err(ContactError::from)?;

    state
        .contact_service
        .update_status(id, status)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitContactRequest {
    name: String,
    phone: String,
    email: Option<String>,
    address: Option<String>,
    service_type: Option<String>,
    message: Option<String>,
}

impl TryFrom<SubmitContactRequest> for SubmitContactCommand {
    type Error = ContactError;

    /// A blank email counts as not given.
    fn try_from(body: SubmitContactRequest) -> Result<Self, Self::Error> {
        let email = body
            .email
            .filter(|email| !email.trim().is_empty())
            .map(EmailAddress::new)
            .transpose()?;

        Ok(Self {
            name: body.name,
            phone: body.phone,
            email,
            address: body.address,
            service_type: body.service_type,
            message: body.message,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactResponseData {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub service_type: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Contact> for ContactResponseData {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.as_ref().map(|e| e.as_str().to_string()),
            address: contact.address.clone(),
            service_type: contact.service_type.clone(),
            message: contact.message.clone(),
            status: contact.status.to_string(),
            created_at: contact.created_at,
        }
    }
}
