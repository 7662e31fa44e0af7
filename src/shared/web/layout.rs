//! Shared page chrome: document head, top navigation and footer.

use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::SiteConfig;

const CSS: &str = include_str!("../../../static/site.css");

pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("About", "/about"),
    ("Projects", "/projects"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

/// Wraps page content in the full HTML document.
pub fn page(site: &SiteConfig, current_path: &str, title: Option<&str>, content: Markup) -> Markup {
    let full_title = match title {
        Some(t) => format!("{} | {}", t, site.title),
        None => site.title.clone(),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(site.description);
                meta name="author" content=(site.owner_name);
                title { (full_title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (site_nav(site, current_path))
                main { (content) }
                (site_footer(site))
            }
        }
    }
}

fn site_nav(site: &SiteConfig, current_path: &str) -> Markup {
    html! {
        nav.site-nav {
            a.brand href="/" { (site.brand) }
            ul {
                @for (name, href) in NAV_ITEMS {
                    @let is_current = current_path == href
                        || current_path.starts_with(&format!("{}/", href));
                    li class=[is_current.then_some("current")] {
                        a href=(href) { (name) }
                    }
                }
            }
        }
    }
}

fn site_footer(site: &SiteConfig) -> Markup {
    let year = Utc::now().year();

    html! {
        footer {
            div.columns {
                div {
                    a.brand href="/" { (site.brand) }
                    p { (site.tagline) }
                }
                div {
                    h3 { "Quick Links" }
                    ul {
                        @for (name, href) in NAV_ITEMS {
                            li { a href=(href) { (name) } }
                        }
                    }
                }
                div {
                    h3 { "Connect" }
                    ul {
                        @if let Some(url) = &site.github_url {
                            li { a href=(url) target="_blank" rel="noopener noreferrer" { "GitHub" } }
                        }
                        @if let Some(url) = &site.linkedin_url {
                            li { a href=(url) target="_blank" rel="noopener noreferrer" { "LinkedIn" } }
                        }
                        @if let Some(email) = &site.email {
                            li { a href={ "mailto:" (email) } { (email) } }
                        }
                    }
                }
            }
            p.copyright { "© " (year) " " (site.owner_name) ". All rights reserved." }
        }
    }
}
