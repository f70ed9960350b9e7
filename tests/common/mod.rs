#![allow(dead_code)]

use chrono::NaiveDate;
use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_contacts::db::{DbPool, establish_connection_pool};
use pushkind_contacts::domain::contact::{Contact, ContactStatus, NewContact};
use pushkind_contacts::domain::types::{
    ContactEmail, ContactName, ContactNotes, ContactPhone, ContactRole,
};
use pushkind_contacts::repository::{ContactWriter, DieselRepository};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("utf-8 database path").to_string();

        let mut conn = SqliteConnection::establish(&url).expect("sqlite connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("migrations should apply");
        drop(conn);

        let pool = establish_connection_pool(&url).expect("connection pool");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub fn new_contact(
    first_name: &str,
    last_name: &str,
    role: &str,
    status: ContactStatus,
) -> NewContact {
    NewContact {
        first_name: ContactName::new(first_name).unwrap(),
        last_name: ContactName::new(last_name).unwrap(),
        email: ContactEmail::new(format!(
            "{}.{}@company.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ))
        .unwrap(),
        phone: ContactPhone::new("+1 (555) 123-4567").unwrap(),
        role: ContactRole::new(role).unwrap(),
        status,
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
        notes: Some(ContactNotes::new(format!("{role} on file")).unwrap()),
    }
}

/// The ten contacts shipped in `seed/contacts.csv`: eight active, two
/// inactive, three developers.
pub fn seed_contacts<R: ContactWriter>(repo: &R) -> Vec<Contact> {
    use ContactStatus::{Active, Inactive};

    [
        ("John", "Doe", "Developer", Active),
        ("Jane", "Smith", "Designer", Active),
        ("Bob", "Johnson", "Manager", Inactive),
        ("Alice", "Wilson", "Developer", Active),
        ("Charlie", "Brown", "Analyst", Active),
        ("Diana", "Martinez", "Designer", Active),
        ("Eva", "Davis", "Manager", Active),
        ("Frank", "Miller", "Developer", Inactive),
        ("Grace", "Lee", "Analyst", Active),
        ("Henry", "Taylor", "Coordinator", Active),
    ]
    .into_iter()
    .map(|(first, last, role, status)| {
        repo.create_contact(&new_contact(first, last, role, status))
            .expect("seed contact")
    })
    .collect()
}
