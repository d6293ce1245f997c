use clap::{Parser, ValueEnum};

/// Which contact store backs the service
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    /// process-local list, lost on restart
    Memory,
    /// SurrealDB reached via `surreal_db_connection`
    Surreal,
}

/// Configuration for the phonebook application
/// Allows to set the http address and the contact store either via command line
/// or environment variables
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[arg(default_value_t = 3001, long, env = "PORT")]
    pub http_port: u16,
    #[arg(default_value_t = String::from("127.0.0.1"), long, env = "HTTP_ADDRESS")]
    pub http_address: String,
    #[arg(value_enum, default_value_t = StoreKind::Memory, long, env = "STORE")]
    pub store: StoreKind,
    #[arg(default_value_t = String::from("ws://localhost:8800"), long, env = "SURREAL_DB_CONNECTION")]
    pub surreal_db_connection: String,
    #[arg(default_value_t = String::from("default"), long, env = "SURREAL_NAMESPACE")]
    pub surreal_namespace: String,
    #[arg(default_value_t = String::from("phonebook"), long, env = "SURREAL_DATABASE")]
    pub surreal_database: String,
    /// Seeds the in-memory store with the demo contacts
    #[arg(default_value_t = true, long, env = "SEED_CONTACTS", action = clap::ArgAction::Set)]
    pub seed_contacts: bool,
}

impl Config {
    pub fn http_listen_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }
}
