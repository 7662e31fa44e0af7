mod revalidate_content;

pub use revalidate_content::{RevalidateContentError, RevalidateContentUseCase};
