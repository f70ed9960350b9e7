//! Loads contacts from a CSV file into the configured database.
//!
//! Usage: `seed [path/to/contacts.csv]` (defaults to `seed/contacts.csv`).
//! Expects the `contacts` table to exist.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use serde::Deserialize;

use pushkind_contacts::db::establish_connection_pool;
use pushkind_contacts::domain::contact::ContactStatus;
use pushkind_contacts::forms::contact::CreateContactForm;
use pushkind_contacts::repository::DieselRepository;
use pushkind_contacts::services::contacts::create_contact;

/// One CSV row; headers are snake_case.
#[derive(Debug, Deserialize)]
struct SeedRecord {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    role: String,
    status: ContactStatus,
    date_of_birth: Option<String>,
    notes: Option<String>,
}

impl From<SeedRecord> for CreateContactForm {
    fn from(record: SeedRecord) -> Self {
        Self {
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            phone: record.phone,
            role: record.role,
            status: record.status,
            date_of_birth: record.date_of_birth,
            notes: record.notes,
        }
    }
}

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("seed/contacts.csv"));
    let database_url = env::var("APP_DATABASE_URL").unwrap_or_else(|_| "app.db".into());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let mut reader = match csv::Reader::from_path(&path) {
        Ok(reader) => reader,
        Err(err) => {
            log::error!("Failed to open {}: {err}", path.display());
            std::process::exit(1);
        }
    };

    log::info!("Seeding database from {}", path.display());

    let (mut inserted, mut failed) = (0usize, 0usize);
    for (line, record) in reader.deserialize::<SeedRecord>().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                log::error!("Skipping row {}: {err}", line + 1);
                failed += 1;
                continue;
            }
        };

        match create_contact(&repo, record.into()) {
            Ok(contact) => {
                log::info!(
                    "- {} {} ({})",
                    contact.first_name,
                    contact.last_name,
                    contact.role
                );
                inserted += 1;
            }
            Err(err) => {
                log::error!("Failed to insert row {}: {err}", line + 1);
                failed += 1;
            }
        }
    }

    log::info!("Inserted {inserted} contacts, {failed} failed");
    if failed > 0 {
        std::process::exit(1);
    }
}
