use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::queries;
use crate::modules::content::application::{
    domain::entities::{BlogPost, Profile, Project},
    ports::outgoing::{
        ContentClient, ContentQuery, ContentQueryError, ProjectListing, QueryParams,
    },
};

/// `ContentQuery` backed by the fixed GROQ queries in [`queries`].
#[derive(Clone)]
pub struct GroqContentQuery {
    client: Arc<dyn ContentClient + Send + Sync>,
}

impl GroqContentQuery {
    pub fn new(client: Arc<dyn ContentClient + Send + Sync>) -> Self {
        Self { client }
    }

    async fn fetch_as<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &QueryParams,
    ) -> Result<T, ContentQueryError> {
        let value = self.client.fetch(query, params).await?;
        decode(value)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ContentQueryError> {
    serde_json::from_value(value).map_err(|e| ContentQueryError::Decode(e.to_string()))
}

#[async_trait]
impl ContentQuery for GroqContentQuery {
    async fn profile(&self) -> Result<Option<Profile>, ContentQueryError> {
        self.fetch_as(queries::PROFILE, &QueryParams::new()).await
    }

    async fn hero_roles(&self) -> Result<Vec<String>, ContentQueryError> {
        let roles: Option<Vec<String>> = self
            .fetch_as(queries::HERO_ROLES, &QueryParams::new())
            .await?;
        Ok(roles.unwrap_or_default())
    }

    async fn projects(&self, listing: ProjectListing) -> Result<Vec<Project>, ContentQueryError> {
        let query = match listing {
            ProjectListing::Latest(limit) => queries::latest_projects(limit),
            ProjectListing::All => queries::all_projects(),
        };
        let projects: Option<Vec<Project>> = self.fetch_as(&query, &QueryParams::new()).await?;
        Ok(projects.unwrap_or_default())
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, ContentQueryError> {
        let posts: Option<Vec<BlogPost>> = self
            .fetch_as(&queries::all_blog_posts(), &QueryParams::new())
            .await?;
        Ok(posts.unwrap_or_default())
    }

    async fn blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, ContentQueryError> {
        let mut params = QueryParams::new();
        params.insert("slug".to_string(), json!(slug));
        self.fetch_as(&queries::blog_post_by_slug(), &params).await
    }

    async fn blog_slugs(&self) -> Result<Vec<String>, ContentQueryError> {
        // Posts without a slug come back as null entries.
        let slugs: Option<Vec<Option<String>>> = self
            .fetch_as(queries::BLOG_SLUGS, &QueryParams::new())
            .await?;
        Ok(slugs.unwrap_or_default().into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::modules::content::application::ports::outgoing::ContentClientError;

    /* --------------------------------------------------
     * Fake ContentClient
     * -------------------------------------------------- */

    struct FakeClient {
        response: Result<Value, ContentClientError>,
        calls: Mutex<Vec<(String, QueryParams)>>,
    }

    impl FakeClient {
        fn returning(value: Value) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(value),
                calls: Mutex::new(vec![]),
            })
        }

        fn failing(err: ContentClientError) -> Arc<Self> {
            Arc::new(Self {
                response: Err(err),
                calls: Mutex::new(vec![]),
            })
        }

        fn calls(&self) -> Vec<(String, QueryParams)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContentClient for FakeClient {
        async fn fetch(
            &self,
            query: &str,
            params: &QueryParams,
        ) -> Result<Value, ContentClientError> {
            self.calls
                .lock()
                .unwrap()
                .push((query.to_string(), params.clone()));
            self.response.clone()
        }
    }

    fn query_over(client: Arc<FakeClient>) -> GroqContentQuery {
        GroqContentQuery::new(client)
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn profile_null_is_none() {
        let client = FakeClient::returning(Value::Null);
        let query = query_over(client.clone());

        let profile = query.profile().await.unwrap();

        assert!(profile.is_none());
        assert_eq!(client.calls()[0].0, queries::PROFILE);
    }

    #[tokio::test]
    async fn profile_decodes_experience_in_document_order() {
        let client = FakeClient::returning(json!({
            "name": "Ada",
            "skills": ["Rust", "SQL"],
            "experience": [
                { "company": "First", "startDate": "2020-01-01", "endDate": { "isPresent": false, "date": "2021-01-01" } },
                { "company": "Second", "startDate": "2021-02-01", "endDate": { "isPresent": true } }
            ]
        }));

        let profile = query_over(client).profile().await.unwrap().unwrap();

        assert_eq!(profile.skills, vec!["Rust", "SQL"]);
        let companies: Vec<_> = profile
            .experience
            .iter()
            .map(|e| e.company.as_deref().unwrap())
            .collect();
        assert_eq!(companies, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn hero_roles_null_is_empty() {
        let client = FakeClient::returning(Value::Null);

        let roles = query_over(client).hero_roles().await.unwrap();

        assert!(roles.is_empty());
    }

    #[tokio::test]
    async fn latest_projects_use_limited_query() {
        let client = FakeClient::returning(json!([
            { "_id": "p1", "title": "One" },
            { "_id": "p2", "title": "Two" }
        ]));
        let query = query_over(client.clone());

        let projects = query.projects(ProjectListing::Latest(4)).await.unwrap();

        assert_eq!(projects.len(), 2);
        assert!(client.calls()[0].0.contains("[0...4]"));
    }

    #[tokio::test]
    async fn blog_post_by_slug_passes_slug_parameter() {
        let client = FakeClient::returning(json!({ "_id": "b1", "title": "Hello" }));
        let query = query_over(client.clone());

        let post = query.blog_post_by_slug("hello").await.unwrap().unwrap();

        assert_eq!(post.title.as_deref(), Some("Hello"));
        let (_, params) = &client.calls()[0];
        assert_eq!(params.get("slug"), Some(&json!("hello")));
    }

    #[tokio::test]
    async fn blog_slugs_drop_null_entries() {
        let client = FakeClient::returning(json!(["first", null, "second"]));

        let slugs = query_over(client).blog_slugs().await.unwrap();

        assert_eq!(slugs, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn unexpected_shape_is_decode_error() {
        let client = FakeClient::returning(json!({ "not": "a list" }));

        let result = query_over(client).blog_posts().await;

        assert!(matches!(result, Err(ContentQueryError::Decode(_))));
    }

    #[tokio::test]
    async fn client_errors_pass_through() {
        let client = FakeClient::failing(ContentClientError::Transport("down".to_string()));

        let result = query_over(client).blog_slugs().await;

        assert_eq!(
            result.unwrap_err(),
            ContentQueryError::Client(ContentClientError::Transport("down".to_string()))
        );
    }
}
