use actix_web::{get, http::StatusCode, post, web, Responder};

use crate::modules::contact::adapter::incoming::web::views;
use crate::modules::contact::application::domain::contact_form::{
    ContactError, ContactFields, ContactForm, ContactOutcome,
};
use crate::shared::web::html_response;
use crate::AppState;

fn status_for(form: &ContactForm) -> StatusCode {
    match form.outcome() {
        Some(ContactOutcome::Error(ContactError::RelayFailed)) => StatusCode::BAD_GATEWAY,
        Some(ContactOutcome::Error(_)) => StatusCode::BAD_REQUEST,
        _ => StatusCode::OK,
    }
}

#[get("/contact")]
pub async fn contact_page_handler(data: web::Data<AppState>) -> impl Responder {
    let html = views::contact::render(&data.site, &ContactForm::idle());
    html_response(StatusCode::OK, html.into_string())
}

#[post("/contact")]
pub async fn submit_contact_form_handler(
    data: web::Data<AppState>,
    form: web::Form<ContactFields>,
) -> impl Responder {
    let result = data.submit_contact_use_case.execute(form.into_inner()).await;
    let html = views::contact::render(&data.site, &result);
    html_response(status_for(&result), html.into_string())
}
