mod about;
mod blog;
mod home;
mod page_error;
mod projects;

pub use about::about_handler;
pub use blog::{blog_index_handler, blog_post_handler};
pub use home::home_handler;
pub use projects::projects_handler;
