pub mod entities;
pub mod portable_text;
pub mod schema;
