use crate::models::{VenueRecord, VenueText};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the venue catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Catalog contains no venues")]
    Empty,

    #[error("Invalid venue at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// A catalog record together with its normalized text
#[derive(Debug, Clone)]
pub struct CatalogVenue {
    pub record: VenueRecord,
    pub text: VenueText,
}

impl CatalogVenue {
    pub fn new(record: VenueRecord) -> Self {
        let text = VenueText::from_record(&record);
        Self { record, text }
    }
}

/// Immutable in-memory venue list
///
/// Built once at startup and shared read-only between request handlers.
/// Order is the order of the source file and is what ranking ties fall back to.
#[derive(Debug, Clone)]
pub struct VenueCatalog {
    venues: Vec<CatalogVenue>,
}

impl VenueCatalog {
    /// Build a catalog from records, enforcing the catalog invariants
    pub fn new(records: Vec<VenueRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, record) in records.iter().enumerate() {
            validate_record(record)
                .map_err(|reason| CatalogError::InvalidRecord { index, reason })?;
        }

        Ok(Self {
            venues: records.into_iter().map(CatalogVenue::new).collect(),
        })
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<VenueRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load the catalog file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;

        tracing::debug!("Loaded {} venues from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn venues(&self) -> &[CatalogVenue] {
        &self.venues
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogVenue> {
        self.venues.iter()
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

fn validate_record(record: &VenueRecord) -> Result<(), String> {
    if record.name.trim().is_empty() {
        return Err("name is empty".to_string());
    }
    if record.address.trim().is_empty() {
        return Err("address is empty".to_string());
    }
    if !record.rating.is_finite() || !(0.0..=5.0).contains(&record.rating) {
        return Err(format!("rating {} is outside 0-5", record.rating));
    }
    Ok(())
}
