mod get_about_page_service;
mod get_blog_index_service;
mod get_blog_post_service;
mod get_home_page_service;
mod get_projects_page_service;

pub use get_about_page_service::GetAboutPageService;
pub use get_blog_index_service::GetBlogIndexService;
pub use get_blog_post_service::GetBlogPostService;
pub use get_home_page_service::{GetHomePageService, HOME_PROJECT_LIMIT};
pub use get_projects_page_service::GetProjectsPageService;
