use maud::{html, Markup};

use super::portable_text;
use crate::config::SiteConfig;
use crate::modules::content::application::domain::entities::{format_timestamp, Project};
use crate::shared::web::layout;

pub const NO_IMAGE_TEXT: &str = "No Image Available";

/// Card shared by the home page and `/projects`. Only the projects page shows
/// a placeholder when the image is missing.
pub fn project_card(project: &Project, with_placeholder: bool) -> Markup {
    let title = project.title.as_deref().unwrap_or_default();

    html! {
        div.card {
            @if let Some(url) = project.image_url() {
                img src=(url) alt=(title);
            } @else if with_placeholder {
                div.placeholder { span { (NO_IMAGE_TEXT) } }
            }
            h2 { (title) }
            p.meta { (format_timestamp(project.created_at)) }
            div.excerpt { (portable_text::render(&project.description)) }
            div.links {
                @if let Some(link) = project.project_link.as_deref().filter(|l| !l.is_empty()) {
                    a href=(link) target="_blank" rel="noopener noreferrer"
                        aria-label={ "Live demo for " (title) } { "Live Demo" }
                }
                @if let Some(link) = project.github_link.as_deref().filter(|l| !l.is_empty()) {
                    a href=(link) target="_blank" rel="noopener noreferrer"
                        aria-label={ "GitHub repository for " (title) } { "GitHub" }
                }
            }
        }
    }
}

pub fn project_grid(projects: &[Project], with_placeholder: bool) -> Markup {
    html! {
        h1 { "My Projects" }
        div.card-grid {
            @for project in projects {
                (project_card(project, with_placeholder))
            }
        }
    }
}

pub fn render(site: &SiteConfig, projects: &[Project]) -> Markup {
    layout::page(
        site,
        "/projects",
        Some("Projects"),
        project_grid(projects, true),
    )
}
