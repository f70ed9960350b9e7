//! Diesel implementation of the contact repository traits.
//!
//! [`filtered_contacts`] is the only place the list predicate is assembled.
//! The count and the page fetch both start from it, so the reported total
//! always describes the same set the page was cut from.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::contact::{Contact, ContactSortField, NewContact, SortOrder, UpdateContact};
use crate::domain::types::ContactId;
use crate::models::contact::{
    Contact as DbContact, NewContact as DbNewContact, UpdateContact as DbUpdateContact,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ContactListQuery, ContactReader, ContactWriter, DieselRepository};
use crate::schema::contacts;

type BoxedContacts = contacts::BoxedQuery<'static, Sqlite>;

const LIKE_ESCAPE: char = '\\';

/// Wraps `term` in `%` after escaping LIKE metacharacters.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Contacts matching every constraint in `query`. No constraints match all rows.
///
/// SQLite's `LIKE` folds ASCII case, which gives the search its
/// case-insensitivity. Only ASCII: `ÉMILE` does not match `Émile`.
fn filtered_contacts(query: &ContactListQuery) -> BoxedContacts {
    let mut items = contacts::table.into_boxed::<Sqlite>();

    if let Some(term) = query.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = contains_pattern(term);
        items = items.filter(
            contacts::first_name
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(contacts::last_name.like(pattern.clone()).escape(LIKE_ESCAPE))
                .or(contacts::email.like(pattern.clone()).escape(LIKE_ESCAPE))
                .or(contacts::role.like(pattern).escape(LIKE_ESCAPE)),
        );
    }

    if let Some(status) = query.status {
        items = items.filter(contacts::status.eq(status.as_str()));
    }

    if let Some(role) = query.role.as_deref().filter(|s| !s.is_empty()) {
        items = items.filter(contacts::role.eq(role.to_string()));
    }

    items
}

/// Applies the requested ordering with the id as a tie-breaker.
fn sorted(items: BoxedContacts, sort_by: ContactSortField, order: SortOrder) -> BoxedContacts {
    let items = match (sort_by, order) {
        (ContactSortField::FirstName, SortOrder::Asc) => items.order(contacts::first_name.asc()),
        (ContactSortField::FirstName, SortOrder::Desc) => items.order(contacts::first_name.desc()),
        (ContactSortField::LastName, SortOrder::Asc) => items.order(contacts::last_name.asc()),
        (ContactSortField::LastName, SortOrder::Desc) => items.order(contacts::last_name.desc()),
        (ContactSortField::Email, SortOrder::Asc) => items.order(contacts::email.asc()),
        (ContactSortField::Email, SortOrder::Desc) => items.order(contacts::email.desc()),
        (ContactSortField::CreatedAt, SortOrder::Asc) => items.order(contacts::created_at.asc()),
        (ContactSortField::CreatedAt, SortOrder::Desc) => {
            items.order(contacts::created_at.desc())
        }
    };
    items.then_order_by(contacts::id.asc())
}

fn into_domain(row: DbContact) -> RepositoryResult<Contact> {
    Contact::try_from(row).map_err(RepositoryError::from)
}

impl ContactReader for DieselRepository {
    fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>> {
        let mut conn = self.conn()?;

        contacts::table
            .find(id.to_string())
            .first::<DbContact>(&mut conn)
            .optional()?
            .map(into_domain)
            .transpose()
    }

    fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<(usize, Vec<Contact>)> {
        let mut conn = self.conn()?;

        let total = filtered_contacts(&query)
            .count()
            .get_result::<i64>(&mut conn)?;
        let total = usize::try_from(total)
            .map_err(|e| RepositoryError::Unexpected(format!("Negative row count: {e}")))?;

        // An offset SQLite cannot represent lies past any stored row.
        let Ok(offset) = i64::try_from(query.pagination.offset()) else {
            return Ok((total, Vec::new()));
        };
        let limit = i64::try_from(query.pagination.per_page())
            .map_err(|e| RepositoryError::ValidationError(format!("Limit too large: {e}")))?;

        let items = sorted(filtered_contacts(&query), query.sort_by, query.sort_order)
            .offset(offset)
            .limit(limit)
            .load::<DbContact>(&mut conn)?
            .into_iter()
            .map(into_domain)
            .collect::<RepositoryResult<Vec<Contact>>>()?;

        Ok((total, items))
    }
}

impl ContactWriter for DieselRepository {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact> {
        let mut conn = self.conn()?;

        let row = DbNewContact::new(new_contact, ContactId::new(), Utc::now().naive_utc());
        let created = diesel::insert_into(contacts::table)
            .values(&row)
            .get_result::<DbContact>(&mut conn)?;

        into_domain(created)
    }

    fn update_contact(&self, id: ContactId, updates: &UpdateContact) -> RepositoryResult<Contact> {
        let mut conn = self.conn()?;

        let changeset = DbUpdateContact::new(updates, Utc::now().naive_utc());
        let updated = diesel::update(contacts::table.find(id.to_string()))
            .set(&changeset)
            .get_result::<DbContact>(&mut conn)?;

        into_domain(updated)
    }

    fn delete_contact(&self, id: ContactId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let removed = diesel::delete(contacts::table.find(id.to_string())).execute(&mut conn)?;
        if removed == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
