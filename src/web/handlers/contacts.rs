use super::super::data::{ContactPayload, ErrorResponse};
use crate::service::contact_service::Contact;
use crate::service::{Result, ServiceContext};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

#[utoipa::path(
    get,
    path = "/api/persons",
    tag = "Persons",
    description = "Get all contacts",
    responses(
        (status = 200, description = "List of contacts", body = Vec<Contact>)
    )
)]
#[get("/")]
pub async fn return_contacts(state: &State<ServiceContext>) -> Result<Json<Vec<Contact>>> {
    let contacts: Vec<Contact> = state.contact_service.get_contacts().await?;
    Ok(Json(contacts))
}

#[utoipa::path(
    get,
    path = "/api/persons/{id}",
    tag = "Persons",
    description = "Get a single contact",
    params(
        ("id" = String, description = "Id of the contact")
    ),
    responses(
        (status = 200, description = "The contact", body = Contact),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No contact with this id", body = ErrorResponse)
    )
)]
#[get("/<id>")]
pub async fn return_contact(state: &State<ServiceContext>, id: &str) -> Result<Json<Contact>> {
    let contact: Contact = state.contact_service.get_contact(id).await?;
    Ok(Json(contact))
}

#[utoipa::path(
    post,
    path = "/api/persons",
    tag = "Persons",
    description = "Create a contact, the id is assigned by the server",
    request_body = ContactPayload,
    responses(
        (status = 200, description = "The created contact", body = Contact),
        (status = 400, description = "Name or number missing", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse)
    )
)]
#[post("/", data = "<new_contact_payload>")]
pub async fn new_contact(
    state: &State<ServiceContext>,
    new_contact_payload: Json<ContactPayload>,
) -> Result<Json<Contact>> {
    let payload = new_contact_payload.0;
    let contact = state
        .contact_service
        .add_contact(payload.name(), payload.number())
        .await?;
    Ok(Json(contact))
}

#[utoipa::path(
    put,
    path = "/api/persons/{id}",
    tag = "Persons",
    description = "Replace name and number of a contact",
    params(
        ("id" = String, description = "Id of the contact")
    ),
    request_body = ContactPayload,
    responses(
        (status = 200, description = "The updated contact", body = Contact),
        (status = 400, description = "Name or number missing, or malformed id", body = ErrorResponse),
        (status = 404, description = "No contact with this id", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse)
    )
)]
#[put("/<id>", data = "<edit_contact_payload>")]
pub async fn edit_contact(
    state: &State<ServiceContext>,
    id: &str,
    edit_contact_payload: Json<ContactPayload>,
) -> Result<Json<Contact>> {
    let payload = edit_contact_payload.0;
    let contact = state
        .contact_service
        .update_contact(id, payload.name(), payload.number())
        .await?;
    Ok(Json(contact))
}

#[utoipa::path(
    delete,
    path = "/api/persons/{id}",
    tag = "Persons",
    description = "Delete a contact",
    params(
        ("id" = String, description = "Id of the contact")
    ),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 404, description = "No contact with this id", body = ErrorResponse)
    )
)]
#[delete("/<id>")]
pub async fn remove_contact(state: &State<ServiceContext>, id: &str) -> Result<Status> {
    state.contact_service.delete_contact(id).await?;
    Ok(Status::NoContent)
}
