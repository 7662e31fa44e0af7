use actix_web::{post, web, Responder};
use serde::Serialize;

use crate::modules::contact::application::domain::contact_form::{
    ContactError, ContactFields, ContactOutcome,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ContactSent {
    pub message: String,
}

fn map_contact_error(err: &ContactError) -> actix_web::HttpResponse {
    match err {
        ContactError::EmptyFields | ContactError::InvalidEmail => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
        ContactError::RelayFailed => ApiResponse::bad_gateway("RELAY_FAILED", &err.to_string()),
    }
}

#[post("/api/contact")]
pub async fn submit_contact_api_handler(
    data: web::Data<AppState>,
    payload: web::Json<ContactFields>,
) -> impl Responder {
    let form = data.submit_contact_use_case.execute(payload.into_inner()).await;

    match form.outcome() {
        Some(ContactOutcome::Success(message)) => ApiResponse::success(ContactSent {
            message: message.clone(),
        }),
        Some(ContactOutcome::Error(err)) => map_contact_error(err),
        None => map_contact_error(&ContactError::RelayFailed),
    }
}
