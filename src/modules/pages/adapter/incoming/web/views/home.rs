use maud::{html, Markup, PreEscaped};

use super::projects::project_grid;
use crate::config::SiteConfig;
use crate::modules::pages::application::ports::incoming::use_cases::HomePage;
use crate::shared::web::layout;

const ROLES_JS: &str = include_str!("../../../../../../../static/roles.js");

pub fn render(site: &SiteConfig, page: &HomePage) -> Markup {
    // Rotated client side; the first role is the no-script fallback.
    let roles_json = serde_json::to_string(&page.roles).unwrap_or_else(|_| "[]".to_string());
    let first_role = page.roles.first().map(String::as_str).unwrap_or_default();

    let content = html! {
        section.hero {
            h1 {
                "Hi, I'm "
                span.owner { (site.owner_name) }
            }
            @if !page.roles.is_empty() {
                p.roles {
                    "I'm a "
                    span data-roles=(roles_json) { (first_role) }
                }
            }
            p { (site.tagline) }
            div.actions {
                @if let Some(resume) = &site.resume_url {
                    a.button href=(resume) download { "Download CV" }
                }
                a.button href="/contact" { "Contact Me" }
            }
        }
        (project_grid(&page.projects, false))
        script { (PreEscaped(ROLES_JS)) }
    };

    layout::page(site, "/", None, content)
}
