pub mod content_client;
pub mod content_query;

pub use content_client::{ContentClient, ContentClientError, QueryParams};
pub use content_query::{ContentQuery, ContentQueryError, ProjectListing};
