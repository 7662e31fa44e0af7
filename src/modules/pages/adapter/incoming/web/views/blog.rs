use maud::{html, Markup};

use super::portable_text;
use crate::config::SiteConfig;
use crate::modules::content::application::domain::{
    entities::{format_timestamp, BlogPost},
    portable_text::first_text,
};
use crate::shared::web::layout;

pub const NO_CONTENT_TEXT: &str = "No content available";

fn byline(post: &BlogPost) -> String {
    format!("{} - {}", format_timestamp(post.created_at), post.author_name())
}

pub fn render_index(site: &SiteConfig, posts: &[BlogPost]) -> Markup {
    let content = html! {
        h1 { "Blog Posts" }
        div.card-grid {
            @for post in posts {
                div.card {
                    h2 { (post.title.as_deref().unwrap_or_default()) }
                    p.meta { (byline(post)) }
                    p.excerpt { (first_text(&post.content).unwrap_or(NO_CONTENT_TEXT)) }
                    a href={ "/blog/" (post.slug.as_deref().unwrap_or_default()) } { "Read More" }
                }
            }
        }
    };

    layout::page(site, "/blog", Some("Blog"), content)
}

pub fn render_post(site: &SiteConfig, path: &str, post: &BlogPost) -> Markup {
    let title = post.title.as_deref().unwrap_or_default();
    let author_image = post.author.as_ref().and_then(|a| a.image_url());

    let content = html! {
        article {
            h1 { (title) }
            p.meta { (byline(post)) }
            @if let Some(url) = author_image {
                div.author-chip {
                    img src=(url) alt=(post.author_name());
                    span { strong { (post.author_name()) } }
                }
            }
            (portable_text::render(&post.content))
        }
    };

    layout::page(site, path, Some(title), content)
}
