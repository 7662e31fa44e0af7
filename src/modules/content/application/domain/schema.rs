//! Document types registered with the CMS studio.
//!
//! The CMS owns validation and persistence; these declarations are the
//! contract the GROQ projections in the query adapter rely on.

use serde::Serialize;

pub const BLOG_SLUG_MAX_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentType {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: Vec<Field>,
}

impl DocumentType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// Hidden in the editor while this sibling boolean is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_when_parent: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    String,
    Text,
    Url,
    Date,
    Datetime,
    Boolean,
    Image,
    Slug {
        source: &'static str,
        #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    BlockArray,
    StringArray,
    ObjectArray { fields: Vec<Field> },
    Object { fields: Vec<Field> },
    Reference { to: Vec<&'static str> },
}

impl Field {
    fn new(name: &'static str, title: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            title,
            kind,
            description: None,
            hidden_when_parent: None,
        }
    }

    fn described(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    fn hidden_when(mut self, sibling: &'static str) -> Self {
        self.hidden_when_parent = Some(sibling);
        self
    }
}

pub fn schema_types() -> Vec<DocumentType> {
    vec![blog(), author(), project(), profile()]
}

fn blog() -> DocumentType {
    DocumentType {
        name: "blog",
        title: "Blog",
        fields: vec![
            Field::new("title", "Title", FieldKind::String),
            Field::new(
                "slug",
                "Slug",
                FieldKind::Slug {
                    source: "title",
                    max_length: Some(BLOG_SLUG_MAX_LEN),
                },
            ),
            Field::new("content", "Content", FieldKind::BlockArray),
            Field::new("createdAt", "Created At", FieldKind::Datetime),
            Field::new("author", "Author", FieldKind::Reference { to: vec!["author"] }),
        ],
    }
}

fn author() -> DocumentType {
    DocumentType {
        name: "author",
        title: "Author",
        fields: vec![
            Field::new("name", "Name", FieldKind::String),
            Field::new("about", "About", FieldKind::String),
            Field::new("image", "Image", FieldKind::Image),
        ],
    }
}

fn project() -> DocumentType {
    DocumentType {
        name: "project",
        title: "Project",
        fields: vec![
            Field::new("title", "Title", FieldKind::String),
            Field::new(
                "slug",
                "Slug",
                FieldKind::Slug {
                    source: "title",
                    max_length: None,
                },
            ),
            Field::new("description", "Description", FieldKind::BlockArray),
            Field::new("image", "Project Image", FieldKind::Image),
            Field::new("projectLink", "Project Link", FieldKind::Url),
            Field::new("githubLink", "Github Link", FieldKind::Url),
            Field::new("createdAt", "Created At", FieldKind::Datetime),
        ],
    }
}

fn profile() -> DocumentType {
    let end_date = Field::new(
        "endDate",
        "End Date",
        FieldKind::Object {
            fields: vec![
                Field::new("isPresent", "Currently Working Here", FieldKind::Boolean),
                Field::new("date", "End Date", FieldKind::Date).hidden_when("isPresent"),
            ],
        },
    );

    DocumentType {
        name: "profile",
        title: "Profile",
        fields: vec![
            Field::new("name", "Name", FieldKind::String),
            Field::new("skills", "Skills", FieldKind::StringArray),
            Field::new(
                "experience",
                "Experience",
                FieldKind::ObjectArray {
                    fields: vec![
                        Field::new("company", "Company", FieldKind::String),
                        Field::new("role", "Role", FieldKind::String),
                        Field::new("description", "Description", FieldKind::Text),
                        Field::new("startDate", "Start Date", FieldKind::Date),
                        end_date,
                    ],
                },
            ),
            Field::new("roles", "Animation Roles", FieldKind::StringArray).described(
                "Roles for type animation (e.g. Full Stack Developer, UI/UX Designer)",
            ),
        ],
    }
}

/// Slug rule used by the editor for blog posts: lowercase, whitespace runs
/// become `-`, cut at `max_len` characters.
pub fn slugify(input: &str, max_len: usize) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut in_whitespace = false;
    for c in input.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    slug.chars().take(max_len).collect()
}
