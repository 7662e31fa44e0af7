//! GROQ queries issued by the site. Projections mirror the document types in
//! `application::domain::schema`.

pub const PROFILE: &str = r#"*[_type == "profile"][0]{
  name,
  skills,
  experience[] {
    company,
    role,
    description,
    startDate,
    endDate {
      isPresent,
      date
    }
  },
  roles
}"#;

pub const HERO_ROLES: &str = r#"*[_type == "profile"][0].roles"#;

const PROJECT_PROJECTION: &str = r#"{
  _id,
  title,
  "slug": slug.current,
  description,
  image {
    asset->{
      url
    }
  },
  projectLink,
  githubLink,
  createdAt
}"#;

const BLOG_PROJECTION: &str = r#"{
  _id,
  title,
  "slug": slug.current,
  content,
  createdAt,
  author->{
    _id,
    name,
    about,
    image {
      asset->{
        url
      }
    }
  }
}"#;

pub const BLOG_SLUGS: &str = r#"*[_type == "blog"].slug.current"#;

/// Cheap query used by the readiness probe.
pub const PING: &str = r#"count(*[_type == "profile"])"#;

pub fn latest_projects(limit: usize) -> String {
    format!(
        r#"*[_type == "project"] | order(createdAt desc)[0...{}]{}"#,
        limit, PROJECT_PROJECTION
    )
}

pub fn all_projects() -> String {
    format!(r#"*[_type == "project"]{}"#, PROJECT_PROJECTION)
}

pub fn all_blog_posts() -> String {
    format!(r#"*[_type == "blog"]{}"#, BLOG_PROJECTION)
}

/// Expects `$slug`.
pub fn blog_post_by_slug() -> String {
    format!(
        r#"*[_type == "blog" && slug.current == $slug][0]{}"#,
        BLOG_PROJECTION
    )
}
