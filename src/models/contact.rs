use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::contact::{
    Contact as DomainContact, NewContact as DomainNewContact,
    UpdateContact as DomainUpdateContact,
};
use crate::domain::types::{
    ContactEmail, ContactId, ContactName, ContactNotes, ContactPhone, ContactRole,
    TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::contact::Contact`].
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: String,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contacts)]
/// Insertable form of [`Contact`].
pub struct NewContact<'a> {
    pub id: String,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub role: &'a str,
    pub status: &'static str,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::contacts)]
/// Changeset for a partial update; `None` fields are left untouched.
pub struct UpdateContact<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub role: Option<&'a str>,
    pub status: Option<&'static str>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl<'a> NewContact<'a> {
    pub fn new(contact: &'a DomainNewContact, id: ContactId, now: NaiveDateTime) -> Self {
        Self {
            id: id.to_string(),
            first_name: contact.first_name.as_str(),
            last_name: contact.last_name.as_str(),
            email: contact.email.as_str(),
            phone: contact.phone.as_str(),
            role: contact.role.as_str(),
            status: contact.status.as_str(),
            date_of_birth: contact.date_of_birth,
            notes: contact.notes.as_ref().map(ContactNotes::as_str),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> UpdateContact<'a> {
    pub fn new(updates: &'a DomainUpdateContact, now: NaiveDateTime) -> Self {
        Self {
            first_name: updates.first_name.as_ref().map(ContactName::as_str),
            last_name: updates.last_name.as_ref().map(ContactName::as_str),
            email: updates.email.as_ref().map(ContactEmail::as_str),
            phone: updates.phone.as_ref().map(ContactPhone::as_str),
            role: updates.role.as_ref().map(ContactRole::as_str),
            status: updates.status.map(|s| s.as_str()),
            date_of_birth: updates.date_of_birth,
            notes: updates.notes.as_ref().map(ContactNotes::as_str),
            updated_at: now,
        }
    }
}

impl TryFrom<Contact> for DomainContact {
    type Error = TypeConstraintError;

    fn try_from(contact: Contact) -> Result<Self, Self::Error> {
        Ok(Self {
            id: contact.id.parse()?,
            first_name: ContactName::new(contact.first_name)?,
            last_name: ContactName::new(contact.last_name)?,
            email: ContactEmail::new(contact.email)?,
            phone: ContactPhone::new(contact.phone)?,
            role: ContactRole::new(contact.role)?,
            status: contact.status.parse()?,
            date_of_birth: contact.date_of_birth,
            notes: contact.notes.map(ContactNotes::new).transpose()?,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        })
    }
}
