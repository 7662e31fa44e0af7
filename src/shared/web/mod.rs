pub mod html;
pub mod layout;

pub use html::{html_response, status_page};
