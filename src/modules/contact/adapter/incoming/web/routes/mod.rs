mod contact_page;
mod submit_contact_api;

pub use contact_page::{contact_page_handler, submit_contact_form_handler};
pub use submit_contact_api::submit_contact_api_handler;
