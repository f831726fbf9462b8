use std::collections::BTreeSet;

use crate::core::{city::venue_in_city, tags::venue_has_tag};
use crate::models::{CityKey, Tag};
use crate::services::CatalogVenue;

/// Check if a venue belongs to the requested city
///
/// Stage 1 of the filtering pipeline. No city means no constraint.
#[inline]
pub fn matches_city(venue: &CatalogVenue, city: Option<CityKey>) -> bool {
    match city {
        Some(key) => venue_in_city(key, &venue.text),
        None => true,
    }
}

/// Check if a venue satisfies every requested tag
///
/// Stage 2 of the filtering pipeline. Tags combine with AND; an empty set
/// accepts everything.
#[inline]
pub fn matches_all_tags(venue: &CatalogVenue, tags: &BTreeSet<Tag>) -> bool {
    tags.iter().all(|tag| venue_has_tag(*tag, &venue.text))
}
