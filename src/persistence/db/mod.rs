use super::Result;
use log::error;
use surrealdb::{
    engine::any::{connect, Any},
    Surreal,
};

pub mod contact;

/// Configuration for the SurrealDB connection string, namespace and
/// database name
#[derive(Clone, Debug)]
pub struct SurrealDbConfig {
    connection_string: String,
    namespace: String,
    database: String,
}

impl SurrealDbConfig {
    pub fn new(connection_string: &str, namespace: &str, database: &str) -> Self {
        Self {
            connection_string: connection_string.to_owned(),
            namespace: namespace.to_owned(),
            database: database.to_owned(),
        }
    }
}

/// Connect to the SurrealDB instance using the provided configuration.
pub async fn get_surreal_db(config: &SurrealDbConfig) -> Result<Surreal<Any>> {
    let db = connect(&config.connection_string).await.map_err(|e| {
        error!("Error connecting to SurrealDB with config: {config:?}. Error: {e}");
        e
    })?;
    db.use_ns(&config.namespace)
        .use_db(&config.database)
        .await?;
    Ok(db)
}

/// In-memory SurrealDB for store tests, needs the mem:// backend which is only
/// enabled for dev builds.
#[cfg(test)]
pub async fn get_memory_db(namespace: &str, database: &str) -> Result<Surreal<Any>> {
    let db = connect("mem://").await?;
    db.use_ns(namespace).use_db(database).await?;
    Ok(db)
}
