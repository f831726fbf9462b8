// Service exports
pub mod catalog;

pub use catalog::{VenueCatalog, CatalogVenue, CatalogError};
