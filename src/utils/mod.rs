pub mod titles;

pub use titles::normalize_title;
