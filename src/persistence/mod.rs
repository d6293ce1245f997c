pub mod contact;
pub mod db;

use crate::config::{Config, StoreKind};
use crate::service::contact_service::Contact;
use db::{contact::SurrealContactStore, get_surreal_db, SurrealDbConfig};
use log::info;
use std::sync::Arc;
use thiserror::Error;

/// Generic persistence result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic persistence error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("SurrealDB connection error {0}")]
    SurrealDb(#[from] surrealdb::Error),

    #[error("malformed {0} id {1}")]
    MalformedId(String, String),

    #[error("{0} with name {1} already exists")]
    DuplicateName(String, String),

    #[error("Failed to insert into database: {0}")]
    InsertFailed(String),

    #[error("{0} record without id")]
    MissingId(String),
}

pub use contact::{ContactStoreApi, InMemoryContactStore};

/// A container for all persistence related dependencies.
#[derive(Clone)]
pub struct DbContext {
    pub contact_store: Arc<dyn ContactStoreApi>,
}

/// Creates a new instance of the DbContext with the store selected in the config.
pub async fn get_db_context(conf: &Config) -> Result<DbContext> {
    let contact_store: Arc<dyn ContactStoreApi> = match conf.store {
        StoreKind::Memory => {
            info!("Using in-memory contact store");
            let contacts = if conf.seed_contacts {
                seed_contacts()
            } else {
                vec![]
            };
            Arc::new(InMemoryContactStore::with_contacts(contacts))
        }
        StoreKind::Surreal => {
            info!(
                "Using SurrealDB contact store at {}",
                conf.surreal_db_connection
            );
            let surreal_db_config = SurrealDbConfig::new(
                &conf.surreal_db_connection,
                &conf.surreal_namespace,
                &conf.surreal_database,
            );
            let db = get_surreal_db(&surreal_db_config).await?;
            Arc::new(SurrealContactStore::new(db))
        }
    };

    Ok(DbContext { contact_store })
}

/// The demo contacts the in-memory store starts with
pub fn seed_contacts() -> Vec<Contact> {
    crate::constants::SEED_CONTACTS
        .iter()
        .map(|(id, name, number)| Contact::new_numeric(*id, name, number))
        .collect()
}
