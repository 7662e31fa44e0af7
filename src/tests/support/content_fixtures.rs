use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::json;

use crate::modules::content::application::domain::{
    entities::{Author, BlogPost, EndDate, Experience, Profile, Project},
    portable_text::PortableText,
};

pub fn created_at() -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2024, 12, 23, 10, 0, 0).single()
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn paragraph(text: &str) -> PortableText {
    serde_json::from_value(json!([{
        "_type": "block",
        "_key": "p1",
        "style": "normal",
        "markDefs": [],
        "children": [{ "_type": "span", "text": text, "marks": [] }]
    }]))
    .unwrap()
}

pub fn project(id: &str, title: &str) -> Project {
    Project {
        id: id.to_string(),
        title: Some(title.to_string()),
        slug: Some(title.to_lowercase()),
        description: paragraph(&format!("Description of {}", title)),
        created_at: created_at(),
        ..Default::default()
    }
}

pub fn blog_post(slug: &str, title: &str) -> BlogPost {
    BlogPost {
        id: format!("blog-{}", slug),
        title: Some(title.to_string()),
        slug: Some(slug.to_string()),
        content: paragraph(&format!("First paragraph of {}", slug)),
        created_at: created_at(),
        author: Some(Author {
            id: Some("author-1".to_string()),
            name: Some("Ada Lovelace".to_string()),
            ..Default::default()
        }),
    }
}

/// Two positions: a current one listed first, then a finished one.
pub fn profile() -> Profile {
    Profile {
        name: Some("Ada Lovelace".to_string()),
        skills: vec!["Rust".to_string(), "SQL".to_string(), "Docker".to_string()],
        experience: vec![
            Experience {
                company: Some("Analytical Engines".to_string()),
                role: Some("Engineer".to_string()),
                description: Some("Builds engines.".to_string()),
                start_date: date(2023, 1, 15),
                end_date: Some(EndDate {
                    is_present: Some(true),
                    date: date(2024, 2, 1),
                }),
            },
            Experience {
                company: Some("Babbage & Co".to_string()),
                role: Some("Analyst".to_string()),
                description: Some("Wrote the first program.".to_string()),
                start_date: date(2020, 3, 1),
                end_date: Some(EndDate {
                    is_present: Some(false),
                    date: date(2022, 12, 31),
                }),
            },
        ],
        roles: vec!["Rust Developer".to_string(), "Writer".to_string()],
    }
}
