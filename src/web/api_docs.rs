use super::data::{ContactPayload, ErrorResponse};
use super::handlers;
use crate::service::contact_service::{Contact, ContactId};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Phonebook API",
        description = "Allows to list, create, update and delete phonebook contacts",
        version = "1.0.0",
    ),
    paths(
        handlers::info,
        handlers::contacts::return_contacts,
        handlers::contacts::return_contact,
        handlers::contacts::new_contact,
        handlers::contacts::edit_contact,
        handlers::contacts::remove_contact,
    ),
    components(schemas(Contact, ContactId, ContactPayload, ErrorResponse))
)]
pub struct ApiDocs;
