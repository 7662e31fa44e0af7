use maud::{html, Markup};

use crate::config::SiteConfig;
use crate::modules::contact::application::domain::contact_form::{
    ContactForm, ContactFormState, ContactOutcome,
};
use crate::shared::web::layout;

pub fn render(site: &SiteConfig, form: &ContactForm) -> Markup {
    let submitting = form.state == ContactFormState::Submitting;

    let content = html! {
        h1 { "Contact Me" }
        @match form.outcome() {
            Some(ContactOutcome::Success(msg)) => {
                div.notice.success role="status" { (msg) }
            },
            Some(ContactOutcome::Error(err)) => {
                div.notice.error role="alert" { (err.to_string()) }
            },
            None => {},
        }
        form.contact method="post" action="/contact" {
            label for="name" { "Name" }
            input #name type="text" name="name" value=(form.fields.name) required;
            label for="email" { "Email" }
            input #email type="email" name="email" value=(form.fields.email) required;
            label for="message" { "Message" }
            textarea #message name="message" rows="5" required { (form.fields.message) }
            button type="submit" disabled[submitting] {
                @if submitting { "Sending..." } @else { "Send Message" }
            }
        }
    };

    layout::page(site, "/contact", Some("Contact"), content)
}
