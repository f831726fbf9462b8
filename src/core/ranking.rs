use crate::models::MatchSet;
use crate::services::CatalogVenue;

/// Default number of venues returned per reply
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Upper bound on venues in a single reply
pub const MAX_RESULTS_LIMIT: usize = 3;

/// Order candidates by rating (highest first) and keep the top `limit`
///
/// The sort is stable, so venues with equal ratings keep their catalog order.
pub fn rank_venues<'a>(mut candidates: Vec<&'a CatalogVenue>, limit: usize) -> MatchSet<'a> {
    candidates.sort_by(|a, b| b.record.rating.total_cmp(&a.record.rating));
    candidates.truncate(limit);

    MatchSet::new(candidates.into_iter().map(|venue| &venue.record).collect())
}
