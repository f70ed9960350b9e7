use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::contact::{
    Contact, ContactSortField, ContactStatus, NewContact, SortOrder, UpdateContact,
};
use crate::domain::types::ContactId;
use crate::repository::errors::RepositoryResult;

pub use crate::pagination::Pagination;

pub mod contact;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Filter, ordering and page window for [`ContactReader::list_contacts`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactListQuery {
    /// Case-insensitive substring matched against names, email and role.
    pub search: Option<String>,
    pub status: Option<ContactStatus>,
    /// Exact role match.
    pub role: Option<String>,
    pub sort_by: ContactSortField,
    pub sort_order: SortOrder,
    pub pagination: Pagination,
}

impl ContactListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: ContactStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn sort(mut self, sort_by: ContactSortField, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Pagination::new(page, per_page);
        self
    }
}

pub trait ContactReader {
    fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>>;
    /// Returns the number of contacts matching the filter and the requested page.
    fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<(usize, Vec<Contact>)>;
}

pub trait ContactWriter {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
    fn update_contact(&self, id: ContactId, updates: &UpdateContact) -> RepositoryResult<Contact>;
    fn delete_contact(&self, id: ContactId) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
