use serde::Deserialize;
use validator::Validate;

use crate::domain::contact::{ContactStatus, NewContact, UpdateContact, parse_date_of_birth};
use crate::domain::types::{
    ContactEmail, ContactName, ContactNotes, ContactPhone, ContactRole, TypeConstraintError,
};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for creating a contact.
pub struct CreateContactForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    #[serde(default)]
    pub status: ContactStatus,
    /// ISO `YYYY-MM-DD`.
    pub date_of_birth: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Partial update payload. Omitted fields keep their current value.
pub struct UpdateContactForm {
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: Option<String>,
    #[validate(email(message = "Valid email is required"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Phone cannot be empty"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Role cannot be empty"))]
    pub role: Option<String>,
    pub status: Option<ContactStatus>,
    pub date_of_birth: Option<String>,
    pub notes: Option<String>,
}

/// Blank optional text is treated as absent.
fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl TryFrom<CreateContactForm> for NewContact {
    type Error = TypeConstraintError;

    fn try_from(form: CreateContactForm) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: ContactName::new(form.first_name)?,
            last_name: ContactName::new(form.last_name)?,
            email: ContactEmail::new(form.email)?,
            phone: ContactPhone::new(form.phone)?,
            role: ContactRole::new(form.role)?,
            status: form.status,
            date_of_birth: optional_text(form.date_of_birth)
                .map(|d| parse_date_of_birth(&d))
                .transpose()?,
            notes: optional_text(form.notes)
                .map(ContactNotes::new)
                .transpose()?,
        })
    }
}

impl TryFrom<UpdateContactForm> for UpdateContact {
    type Error = TypeConstraintError;

    fn try_from(form: UpdateContactForm) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: form.first_name.map(ContactName::new).transpose()?,
            last_name: form.last_name.map(ContactName::new).transpose()?,
            email: form.email.map(ContactEmail::new).transpose()?,
            phone: form.phone.map(ContactPhone::new).transpose()?,
            role: form.role.map(ContactRole::new).transpose()?,
            status: form.status,
            date_of_birth: optional_text(form.date_of_birth)
                .map(|d| parse_date_of_birth(&d))
                .transpose()?,
            notes: optional_text(form.notes)
                .map(ContactNotes::new)
                .transpose()?,
        })
    }
}
