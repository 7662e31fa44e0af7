use maud::{html, Markup};

use crate::config::SiteConfig;
use crate::modules::content::application::domain::entities::{format_date, Experience, Profile};
use crate::shared::web::layout;

fn experience_entry(exp: &Experience) -> Markup {
    html! {
        div.experience {
            h3 { (exp.company.as_deref().unwrap_or_default()) }
            p.meta { em { (exp.role.as_deref().unwrap_or_default()) } }
            p { (exp.description.as_deref().unwrap_or_default()) }
            p.meta {
                span { "From: " (format_date(exp.start_date)) }
                @if exp.is_present() {
                    span { " - Present" }
                } @else {
                    span { " - " (format_date(exp.ended_on())) }
                }
            }
        }
    }
}

pub fn render(site: &SiteConfig, profile: &Profile) -> Markup {
    let name = profile.name.as_deref().unwrap_or(&site.owner_name);

    let content = html! {
        h1 { "About Me" }
        section.panel {
            h2 { "Who I Am" }
            p { "Hi, my name is " strong { (name) } ". " (site.description) }
        }
        section.panel {
            h2 { "Skills" }
            p { "My technical toolkit includes:" }
            ul {
                @for skill in &profile.skills {
                    li { (skill) }
                }
            }
        }
        section.panel {
            h2 { "Experience" }
            @for exp in &profile.experience {
                (experience_entry(exp))
            }
        }
        @if site.github_url.is_some() || site.linkedin_url.is_some() || site.email.is_some() {
            section.panel {
                h2 { "Connect with Me" }
                ul {
                    @if let Some(url) = &site.github_url {
                        li { strong { "GitHub: " } a href=(url) target="_blank" rel="noopener noreferrer" { (url) } }
                    }
                    @if let Some(url) = &site.linkedin_url {
                        li { strong { "LinkedIn: " } a href=(url) target="_blank" rel="noopener noreferrer" { (url) } }
                    }
                    @if let Some(email) = &site.email {
                        li { strong { "Email: " } a href={ "mailto:" (email) } { (email) } }
                    }
                }
            }
        }
    };

    layout::page(site, "/about", Some("About"), content)
}
