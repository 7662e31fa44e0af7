mod get_about_page;
mod get_blog_index;
mod get_blog_post;
mod get_home_page;
mod get_projects_page;
mod page_error;

pub use get_about_page::GetAboutPageUseCase;
pub use get_blog_index::GetBlogIndexUseCase;
pub use get_blog_post::GetBlogPostUseCase;
pub use get_home_page::{GetHomePageUseCase, HomePage};
pub use get_projects_page::GetProjectsPageUseCase;
pub use page_error::PageError;
