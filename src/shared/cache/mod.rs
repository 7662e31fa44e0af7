pub mod page_cache;

pub use page_cache::{CachePolicy, PageCache};
