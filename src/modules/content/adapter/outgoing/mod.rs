pub mod groq_content_query;
pub mod queries;
pub mod sanity_client;

pub use groq_content_query::GroqContentQuery;
pub use sanity_client::SanityContentClient;
