use actix_web::{get, Responder};

use crate::{modules::content::application::domain::schema::schema_types, shared::api::ApiResponse};

/// Content document types as registered with the CMS.
#[get("/api/schema")]
pub async fn get_schema_handler() -> impl Responder {
    ApiResponse::success(schema_types())
}
