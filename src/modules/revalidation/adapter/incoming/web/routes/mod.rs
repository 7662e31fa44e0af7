mod revalidate;

pub use revalidate::revalidate_handler;
