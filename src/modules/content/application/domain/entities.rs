use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::portable_text::PortableText;

/// Short US-style date used on every card (`12/23/2024`).
pub const DISPLAY_DATE_FORMAT: &str = "%-m/%-d/%Y";

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    format_date(ts.map(|t| t.date_naive()))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(default)]
    pub url: Option<String>,
}

/// Image field with its asset dereferenced (`image{ asset->{ url } }`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<ImageAsset>,
}

impl ImageRef {
    pub fn url(&self) -> Option<&str> {
        self.asset
            .as_ref()
            .and_then(|a| a.url.as_deref())
            .filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndDate {
    #[serde(default)]
    pub is_present: Option<bool>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<EndDate>,
}

impl Experience {
    pub fn is_present(&self) -> bool {
        self.end_date
            .as_ref()
            .and_then(|e| e.is_present)
            .unwrap_or(false)
    }

    /// End date, or `None` while the position is current.
    pub fn ended_on(&self) -> Option<NaiveDate> {
        if self.is_present() {
            return None;
        }
        self.end_date.as_ref().and_then(|e| e.date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: PortableText,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub project_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().and_then(ImageRef::url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

impl Author {
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().and_then(ImageRef::url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: PortableText,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<Author>,
}

impl BlogPost {
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or("")
    }
}

/// The CMS returns `null` for unset arrays; treat that like an empty list.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
