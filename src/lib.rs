//! Venue Chat - local venue recommendation service
//!
//! This library turns free-text requests into venue recommendations without
//! calling an external model. Text is normalized and classified into a city
//! and a set of tags, the catalog is filtered and ranked, and a reply is
//! assembled from templates.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{normalize_text, ChatEngine, Matcher, NarrativeGenerator};
pub use models::{VenueRecord, CityKey, Tag, ClassificationResult, MatchSet, ChatRequest, ChatResponse};
pub use services::{VenueCatalog, CatalogError};
