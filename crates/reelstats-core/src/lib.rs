pub mod error;
pub mod loader;
pub mod model;
pub mod reports;
pub mod store;
