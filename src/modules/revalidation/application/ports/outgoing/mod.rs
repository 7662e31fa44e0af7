pub mod path_revalidator;

pub use path_revalidator::PathRevalidator;
