use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::account::models::EmailAddress;
use crate::domain::contact::errors::ContactStatusError;

/// Inbound enquiry left through the public contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<EmailAddress>,
    pub address: Option<String>,
    pub service_type: Option<String>,
    pub message: Option<String>,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Follow-up state of an enquiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContactStatus {
    #[default]
    Pending,
    Processing,
    Completed,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Pending => "pending",
            ContactStatus::Processing => "processing",
            ContactStatus::Completed => "completed",
        }
    }
}

impl FromStr for ContactStatus {
    type Err = ContactStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ContactStatus::Pending),
            "processing" => Ok(ContactStatus::Processing),
            "completed" => Ok(ContactStatus::Completed),
            other => Err(ContactStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitContactCommand {
    pub name: String,
    pub phone: String,
    pub email: Option<EmailAddress>,
    pub address: Option<String>,
    pub service_type: Option<String>,
    pub message: Option<String>,
}

/// Hide the middle of a phone number: first 3 chars, `****`, last 4 chars.
///
/// Numbers shorter than 7 characters are returned as is.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() < 7 {
        return phone.to_string();
    }

    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}****{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("13812345678"), "138****5678");
        assert_eq!(mask_phone("1234567"), "123****4567");
        assert_eq!(mask_phone("123456"), "123456");
        assert_eq!(mask_phone(""), "");
    }

    #[test]
    fn test_status_round_trip_through_text() {
        for status in [
            ContactStatus::Pending,
            ContactStatus::Processing,
            ContactStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<ContactStatus>(), Ok(status));
        }
        assert_eq!(ContactStatus::default(), ContactStatus::Pending);
        assert_eq!(
            "done".parse::<ContactStatus>(),
            Err(ContactStatusError::Unknown("done".to_string()))
        );
    }
}
