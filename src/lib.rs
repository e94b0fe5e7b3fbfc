pub mod error;
pub mod links;
pub mod model;
pub mod projection;
pub mod services;
pub mod store;
pub mod types;

pub use error::CatalogError;
