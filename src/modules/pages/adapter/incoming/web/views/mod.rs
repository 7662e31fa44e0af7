pub mod about;
pub mod blog;
pub mod home;
pub mod portable_text;
pub mod projects;
