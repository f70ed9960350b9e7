//! Contact use cases: the paginated listing plus single-record operations.

use validator::Validate;

use crate::domain::contact::{Contact, NewContact, UpdateContact};
use crate::domain::types::ContactId;
use crate::dto::contacts::ListContactsParams;
use crate::forms::contact::{CreateContactForm, UpdateContactForm};
use crate::pagination::Paginated;
use crate::repository::{ContactListQuery, ContactReader, ContactWriter};
use crate::services::{ServiceError, ServiceResult};

fn parse_id(id: &str) -> ServiceResult<ContactId> {
    id.parse::<ContactId>().map_err(ServiceError::from)
}

/// Validates the list parameters, then counts and fetches the requested page.
///
/// Nothing reaches the repository unless every parameter is in range.
pub fn list_contacts<R>(repo: &R, params: ListContactsParams) -> ServiceResult<Paginated<Contact>>
where
    R: ContactReader + ?Sized,
{
    let query = ContactListQuery::try_from(params).map_err(|err| {
        log::warn!("Rejected contact list parameters: {err}");
        ServiceError::from(err)
    })?;
    let pagination = query.pagination;

    let (total, contacts) = repo.list_contacts(query).map_err(|err| {
        log::error!("Failed to list contacts: {err}");
        ServiceError::from(err)
    })?;

    Ok(Paginated::new(contacts, total, pagination))
}

/// Fetches a single contact by its UUID.
pub fn get_contact<R>(repo: &R, id: &str) -> ServiceResult<Contact>
where
    R: ContactReader + ?Sized,
{
    let id = parse_id(id)?;
    repo.get_contact_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the form and persists a new contact.
pub fn create_contact<R>(repo: &R, form: CreateContactForm) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::warn!("Failed to validate contact form: {err}");
        return Err(ServiceError::Validation(err.to_string()));
    }

    let new_contact = NewContact::try_from(form)?;

    repo.create_contact(&new_contact).map_err(|err| {
        log::error!("Failed to create a contact: {err}");
        ServiceError::from(err)
    })
}

/// Merges the provided fields into the stored contact.
pub fn update_contact<R>(repo: &R, id: &str, form: UpdateContactForm) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    let id = parse_id(id)?;

    if let Err(err) = form.validate() {
        log::warn!("Failed to validate contact update: {err}");
        return Err(ServiceError::Validation(err.to_string()));
    }

    let updates = UpdateContact::try_from(form)?;
    if updates.is_empty() {
        return Err(ServiceError::Validation("no fields to update".to_string()));
    }

    repo.update_contact(id, &updates).map_err(|err| {
        log::error!("Failed to update contact {id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_contact<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: ContactWriter + ?Sized,
{
    let id = parse_id(id)?;
    repo.delete_contact(id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::contact::{ContactSortField, ContactStatus, SortOrder};
    use crate::domain::types::{ContactEmail, ContactName, ContactPhone, ContactRole};
    use crate::pagination::Pagination;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn contact(first_name: &str, role: &str) -> Contact {
        let now = Utc::now().naive_utc();
        Contact {
            id: ContactId::new(),
            first_name: ContactName::new(first_name).unwrap(),
            last_name: ContactName::new("Doe").unwrap(),
            email: ContactEmail::new(format!("{}@company.com", first_name.to_lowercase())).unwrap(),
            phone: ContactPhone::new("+1 (555) 000-0000").unwrap(),
            role: ContactRole::new(role).unwrap(),
            status: ContactStatus::Active,
            date_of_birth: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn create_form() -> CreateContactForm {
        CreateContactForm {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@company.com".into(),
            phone: "+1 (555) 123-4567".into(),
            role: "Developer".into(),
            status: ContactStatus::Active,
            date_of_birth: Some("1990-05-15".into()),
            notes: Some("Senior full-stack developer".into()),
        }
    }

    /// Ensures the typed query handed to the repository mirrors the parameters.
    #[test]
    fn list_passes_typed_query_to_repository() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts()
            .withf(|query| {
                query.status == Some(ContactStatus::Active)
                    && query.search.is_none()
                    && query.sort_by == ContactSortField::LastName
                    && query.sort_order == SortOrder::Desc
                    && query.pagination == Pagination::new(1, 5)
            })
            .times(1)
            .returning(|_| {
                Ok((
                    8,
                    (0..5).map(|i| contact(&format!("C{i}"), "Developer")).collect(),
                ))
            });

        let params = ListContactsParams {
            status: Some("active".into()),
            sort_by: Some("lastName".into()),
            sort_order: Some("desc".into()),
            page: Some(1),
            limit: Some(5),
            ..Default::default()
        };
        let page = list_contacts(&repo, params).unwrap();

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.pagination.total_count(), 8);
        assert_eq!(page.pagination.total_pages(), 2);
        assert!(page.pagination.has_next_page());
        assert!(!page.pagination.has_previous_page());
    }

    /// Invalid parameters must fail before any store access.
    #[test]
    fn list_rejects_invalid_params_without_querying() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts().times(0);

        for params in [
            ListContactsParams {
                limit: Some(101),
                ..Default::default()
            },
            ListContactsParams {
                page: Some(0),
                ..Default::default()
            },
            ListContactsParams {
                sort_by: Some("notes".into()),
                ..Default::default()
            },
            ListContactsParams {
                status: Some("deleted".into()),
                ..Default::default()
            },
        ] {
            let result = list_contacts(&repo, params);
            assert!(matches!(result, Err(ServiceError::Validation(_))));
        }
    }

    #[test]
    fn list_propagates_store_failures() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts()
            .returning(|_| Err(RepositoryError::ConnectionError("pool timed out".into())));

        let result = list_contacts(&repo, ListContactsParams::default());

        assert!(matches!(result, Err(ServiceError::Store(_))));
    }

    #[test]
    fn get_missing_contact_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_contact_by_id().times(1).returning(|_| Ok(None));

        let result = get_contact(&repo, &ContactId::new().to_string());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn get_with_malformed_id_is_validation_error() {
        let mut repo = MockRepository::new();
        repo.expect_get_contact_by_id().times(0);

        let result = get_contact(&repo, "42");

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn create_persists_normalized_contact() {
        let mut repo = MockRepository::new();
        repo.expect_create_contact()
            .withf(|new_contact| {
                new_contact.email.as_str() == "john.doe@company.com"
                    && new_contact.date_of_birth.is_some()
            })
            .times(1)
            .returning(|_| Ok(contact("John", "Developer")));

        let created = create_contact(&repo, create_form()).unwrap();

        assert_eq!(created.first_name.as_str(), "John");
    }

    #[test]
    fn create_rejects_invalid_form() {
        let mut repo = MockRepository::new();
        repo.expect_create_contact().times(0);
        let form = CreateContactForm {
            email: "not-an-email".into(),
            ..create_form()
        };

        let result = create_contact(&repo, form);

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn create_reports_duplicate_email_as_conflict() {
        let mut repo = MockRepository::new();
        repo.expect_create_contact().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed: contacts.email".into(),
            ))
        });

        let result = create_contact(&repo, create_form());

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn update_requires_at_least_one_field() {
        let mut repo = MockRepository::new();
        repo.expect_update_contact().times(0);

        let result = update_contact(
            &repo,
            &ContactId::new().to_string(),
            UpdateContactForm::default(),
        );

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn update_forwards_partial_changes() {
        let id = ContactId::new();
        let mut repo = MockRepository::new();
        repo.expect_update_contact()
            .withf(move |target, updates| {
                *target == id
                    && updates.role.as_ref().map(|r| r.as_str()) == Some("Manager")
                    && updates.first_name.is_none()
            })
            .times(1)
            .returning(|_, _| Ok(contact("John", "Manager")));

        let form = UpdateContactForm {
            role: Some("Manager".into()),
            ..Default::default()
        };
        let updated = update_contact(&repo, &id.to_string(), form).unwrap();

        assert_eq!(updated.role.as_str(), "Manager");
    }

    #[test]
    fn delete_missing_contact_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_contact()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = delete_contact(&repo, &ContactId::new().to_string());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
