mod get_schema;

pub use get_schema::get_schema_handler;
