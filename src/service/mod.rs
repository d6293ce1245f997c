pub mod contact_service;

use crate::config::Config;
use crate::persistence::{self, DbContext};
use contact_service::{ContactService, ContactServiceApi};
use log::{error, warn};
use rocket::http::ContentType;
use rocket::Response;
use rocket::{http::Status, response::Responder};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the persistence layer
    #[error("Persistence error: {0}")]
    Persistence(#[from] persistence::Error),

    /// errors that stem from validation
    #[error("Validation Error: {0}")]
    Validation(String),

    /// the requested entity does not exist
    #[error("not found: {0}")]
    NotFound(String),
}

impl Error {
    /// The http status and message the error is reported to clients with.
    pub fn status_and_message(&self) -> (Status, String) {
        match self {
            Error::Validation(msg) => (Status::BadRequest, msg.to_owned()),
            Error::NotFound(_) => (Status::NotFound, String::from("person not found")),
            Error::Persistence(persistence::Error::MalformedId(_, _)) => {
                (Status::BadRequest, String::from(crate::constants::MALFORMED_ID))
            }
            Error::Persistence(persistence::Error::DuplicateName(_, _)) => (
                Status::Conflict,
                String::from(crate::constants::NAME_NOT_UNIQUE),
            ),
            // the store is unreachable or misbehaving, we can only tell the caller
            // that something went wrong on our end
            Error::Persistence(_) => (
                Status::InternalServerError,
                String::from("internal server error"),
            ),
        }
    }
}

/// Map from service errors directly to rocket status codes. This allows us to
/// write handlers that return `Result<T, service::Error>` and still return the correct
/// status code.
impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _req: &rocket::Request) -> rocket::response::Result<'o> {
        let (status, msg) = self.status_and_message();
        if status.code >= 500 {
            error!("{self}");
        } else {
            warn!("{self}");
        }
        build_error_response(status, msg)
    }
}

fn build_error_response<'o>(status: Status, msg: String) -> rocket::response::Result<'o> {
    let body = json!({ "error": msg }).to_string();
    Response::build()
        .status(status)
        .header(ContentType::JSON)
        .sized_body(body.len(), Cursor::new(body))
        .ok()
}

/// A dependency container for all services that are used by the application
#[derive(Clone)]
pub struct ServiceContext {
    pub config: Config,
    pub contact_service: Arc<dyn ContactServiceApi>,
}

impl ServiceContext {
    pub fn new(config: Config, contact_service: ContactService) -> Self {
        Self {
            config,
            contact_service: Arc::new(contact_service),
        }
    }
}

/// building up the service context dependencies here
pub async fn create_service_context(config: Config, db: DbContext) -> Result<ServiceContext> {
    let contact_service = ContactService::new(db.contact_store);
    Ok(ServiceContext::new(config, contact_service))
}
