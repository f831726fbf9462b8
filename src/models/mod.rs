// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{VenueRecord, Coordinates, VenueText, CityKey, Tag, ClassificationResult, MatchSet};
pub use requests::{ChatRequest, VibeRequest};
pub use responses::{ChatResponse, VibeResponse, HealthResponse, ErrorResponse};
