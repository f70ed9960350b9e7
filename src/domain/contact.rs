use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ContactEmail, ContactId, ContactName, ContactNotes, ContactPhone, ContactRole,
    TypeConstraintError,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub first_name: ContactName,
    pub last_name: ContactName,
    pub email: ContactEmail,
    pub phone: ContactPhone,
    pub role: ContactRole,
    pub status: ContactStatus,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<ContactNotes>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Lifecycle state of a contact.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Active,
    Inactive,
}

impl ContactStatus {
    /// Value stored in the `contacts.status` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContactStatus::Active => "active",
            ContactStatus::Inactive => "inactive",
        }
    }
}

impl Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ContactStatus::Active),
            "inactive" => Ok(ContactStatus::Inactive),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown status `{other}`"
            ))),
        }
    }
}

/// Status constraint requested by a list caller. `All` places no constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ContactStatus),
}

impl StatusFilter {
    pub const fn status(self) -> Option<ContactStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            other => other.parse::<ContactStatus>().map(StatusFilter::Only),
        }
    }
}

/// Fields a contact list may be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactSortField {
    #[default]
    FirstName,
    LastName,
    Email,
    CreatedAt,
}

impl FromStr for ContactSortField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(ContactSortField::FirstName),
            "lastName" => Ok(ContactSortField::LastName),
            "email" => Ok(ContactSortField::Email),
            "createdAt" => Ok(ContactSortField::CreatedAt),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "cannot sort by `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown sort order `{other}`"
            ))),
        }
    }
}

/// Validated payload for inserting a contact.
#[derive(Clone, Debug, PartialEq)]
pub struct NewContact {
    pub first_name: ContactName,
    pub last_name: ContactName,
    pub email: ContactEmail,
    pub phone: ContactPhone,
    pub role: ContactRole,
    pub status: ContactStatus,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<ContactNotes>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateContact {
    pub first_name: Option<ContactName>,
    pub last_name: Option<ContactName>,
    pub email: Option<ContactEmail>,
    pub phone: Option<ContactPhone>,
    pub role: Option<ContactRole>,
    pub status: Option<ContactStatus>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<ContactNotes>,
}

impl UpdateContact {
    pub fn is_empty(&self) -> bool {
        self == &UpdateContact::default()
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date_of_birth(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| TypeConstraintError::InvalidDate)
}
