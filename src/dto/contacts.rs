//! List parameters and responses of the `/api/v1/contacts` endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::contact::{Contact, ContactSortField, SortOrder, StatusFilter};
use crate::domain::types::TypeConstraintError;
use crate::pagination::{
    DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE, MAX_ITEMS_PER_PAGE, PageInfo, Paginated, Pagination,
};
use crate::repository::ContactListQuery;

/// Raw query string accepted by `GET /api/v1/contacts`.
///
/// Every field is optional; defaults are applied when converting into a
/// [`ContactListQuery`].
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContactsParams {
    pub search: Option<String>,
    /// `all`, `active` or `inactive`.
    pub status: Option<String>,
    pub role: Option<String>,
    /// `firstName`, `lastName`, `email` or `createdAt`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_order: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

fn page_from(value: Option<i64>) -> Result<usize, TypeConstraintError> {
    match value {
        None => Ok(DEFAULT_PAGE),
        Some(page) if page >= 1 => usize::try_from(page)
            .map_err(|_| TypeConstraintError::InvalidValue("page is too large".to_string())),
        Some(page) => Err(TypeConstraintError::InvalidValue(format!(
            "page must be at least 1, got {page}"
        ))),
    }
}

fn limit_from(value: Option<i64>) -> Result<usize, TypeConstraintError> {
    match value {
        None => Ok(DEFAULT_ITEMS_PER_PAGE),
        Some(limit) if (1..=MAX_ITEMS_PER_PAGE as i64).contains(&limit) => Ok(limit as usize),
        Some(limit) => Err(TypeConstraintError::InvalidValue(format!(
            "limit must be between 1 and {MAX_ITEMS_PER_PAGE}, got {limit}"
        ))),
    }
}

impl TryFrom<ListContactsParams> for ContactListQuery {
    type Error = TypeConstraintError;

    fn try_from(params: ListContactsParams) -> Result<Self, Self::Error> {
        let status = match params.status.as_deref() {
            Some(value) => value.parse::<StatusFilter>()?,
            None => StatusFilter::All,
        };
        let sort_by = match params.sort_by.as_deref() {
            Some(value) => value.parse::<ContactSortField>()?,
            None => ContactSortField::default(),
        };
        let sort_order = match params.sort_order.as_deref() {
            Some(value) => value.parse::<SortOrder>()?,
            None => SortOrder::default(),
        };
        let pagination = Pagination::new(page_from(params.page)?, limit_from(params.limit)?);

        // Trimmed on purpose: `" jane "` searches for `jane` rather than the
        // padded text. A blank term disables search.
        let search = params
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let role = params.role.filter(|s| !s.is_empty());

        Ok(ContactListQuery {
            search,
            status: status.status(),
            role,
            sort_by,
            sort_order,
            pagination,
        })
    }
}

/// Body returned by `GET /api/v1/contacts`.
#[derive(Debug, Serialize)]
pub struct ContactsPage {
    pub contacts: Vec<Contact>,
    pub pagination: PageInfo,
}

impl From<Paginated<Contact>> for ContactsPage {
    fn from(page: Paginated<Contact>) -> Self {
        Self {
            contacts: page.items,
            pagination: page.pagination,
        }
    }
}
