use crate::service::{Result, ServiceContext};
use rocket::response::content::RawHtml;
use rocket::{get, State};

pub mod contacts;

#[utoipa::path(
    get,
    path = "/info",
    tag = "Info",
    description = "Number of contacts and the current time as a html fragment",
    responses(
        (status = 200, description = "Html summary", body = String, content_type = "text/html")
    )
)]
#[get("/info")]
pub async fn info(state: &State<ServiceContext>) -> Result<RawHtml<String>> {
    let summary = state.contact_service.info_summary().await?;
    Ok(RawHtml(summary))
}
