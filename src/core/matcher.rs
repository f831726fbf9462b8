use crate::core::{
    city::classify_city,
    filters::{matches_all_tags, matches_city},
    normalize::normalize_text,
    ranking::{rank_venues, DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT},
    tags::classify_tags,
};
use crate::models::{ClassificationResult, MatchSet};
use crate::services::{CatalogVenue, VenueCatalog};

/// Candidates left after filtering, before ranking
#[derive(Debug)]
pub struct FilterOutcome<'a> {
    pub candidates: Vec<&'a CatalogVenue>,
    pub fallback_applied: bool,
}

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub classification: ClassificationResult,
    pub matches: MatchSet<'a>,
    pub total_candidates: usize,
    pub fallback_applied: bool,
}

/// Main matching orchestrator - implements the multi-stage filtering pipeline
///
/// # Pipeline Stages
/// 1. City filter (per-city predicate)
/// 2. Tag filter (every tag predicate must hold)
/// 3. City-only fallback when stages 1-2 leave nothing and a city is known
/// 4. Rating ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    max_results: usize,
}

impl Matcher {
    /// Create a matcher returning at most `max_results` venues
    ///
    /// The limit is clamped to `1..=MAX_RESULTS_LIMIT`.
    pub fn new(max_results: usize) -> Self {
        Self {
            max_results: max_results.clamp(1, MAX_RESULTS_LIMIT),
        }
    }

    pub fn with_default_limit() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Run both classifiers over the request text
    pub fn classify(&self, message: &str) -> ClassificationResult {
        let normalized = normalize_text(message);

        ClassificationResult {
            city: classify_city(&normalized),
            tags: classify_tags(&normalized),
        }
    }

    /// Narrow the catalog using a classification
    ///
    /// Without a city and without tags the whole catalog is returned. When the
    /// combined filter empties the list but a city was recognised, the tag
    /// constraints are dropped and the catalog is filtered by city alone.
    pub fn filter_candidates<'a>(
        &self,
        catalog: &'a VenueCatalog,
        classification: &ClassificationResult,
    ) -> FilterOutcome<'a> {
        let city = classification.city;
        let tags = &classification.tags;

        let candidates: Vec<&CatalogVenue> = catalog
            .iter()
            // Stage 1: City filter
            .filter(|venue| matches_city(venue, city))
            // Stage 2: Tag filter
            .filter(|venue| matches_all_tags(venue, tags))
            .collect();

        // Stage 3: Relax tags when nothing is left but the city is known
        if candidates.is_empty() && city.is_some() {
            let candidates: Vec<&CatalogVenue> = catalog
                .iter()
                .filter(|venue| matches_city(venue, city))
                .collect();

            tracing::debug!(
                "No venue matched city {:?} with tags {:?}, fallback to city only ({} candidates)",
                city,
                tags,
                candidates.len()
            );

            return FilterOutcome {
                candidates,
                fallback_applied: true,
            };
        }

        FilterOutcome {
            candidates,
            fallback_applied: false,
        }
    }

    /// Find the best venues for a free-text request
    pub fn find_matches<'a>(&self, catalog: &'a VenueCatalog, message: &str) -> MatchResult<'a> {
        let classification = self.classify(message);
        let outcome = self.filter_candidates(catalog, &classification);
        let total_candidates = outcome.candidates.len();

        // Stage 4: Ranking
        let matches = rank_venues(outcome.candidates, self.max_results);

        MatchResult {
            classification,
            matches,
            total_candidates,
            fallback_applied: outcome.fallback_applied,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CityKey, Coordinates, Tag, VenueRecord};
    use std::collections::BTreeSet;

    fn create_venue(name: &str, address: &str, description: &str, rating: f64) -> VenueRecord {
        VenueRecord {
            name: name.to_string(),
            address: address.to_string(),
            coordinates: Coordinates { lat: 46.77, long: 23.59 },
            image_url: None,
            short_description: Some(description.to_string()),
            rating,
        }
    }

    fn create_catalog() -> VenueCatalog {
        VenueCatalog::new(vec![
            create_venue("Olivo Cafe", "Piața Muzeului 6, Cluj-Napoca", "Espresso si brunch", 4.6),
            create_venue("Samsara", "Str. Cardinal Iuliu Hossu 3, Cluj-Napoca", "Plant-based, terasa", 4.7),
            create_venue("Klausen Burger", "Str. Ceasornicarilor 4, Timișoara", "Burgeri mari", 4.5),
            create_venue("Casa Bunicii", "Str. Lunga 1, Timișoara", "Mancare traditionala", 4.8),
            create_venue("Roots Coffee", "Calea Victoriei 1, Bucharest", "Cafea de specialitate", 4.4),
        ])
        .unwrap()
    }

    fn names(result: &MatchResult<'_>) -> Vec<String> {
        result.matches.iter().map(|v| v.name.clone()).collect()
    }

    #[test]
    fn test_classify() {
        let matcher = Matcher::default();
        let classification = matcher.classify("O cafenea liniștită în Cluj pentru învățat");

        assert_eq!(classification.city, Some(CityKey::Cluj));
        assert!(classification.tags.contains(&Tag::Coffee));
    }

    #[test]
    fn test_city_and_tag() {
        let matcher = Matcher::default();
        let catalog = create_catalog();

        let result = matcher.find_matches(&catalog, "o cafenea in Cluj");

        assert_eq!(names(&result), vec!["Olivo Cafe"]);
        assert!(!result.fallback_applied);
    }

    #[test]
    fn test_fallback_to_city_only() {
        let matcher = Matcher::default();
        let catalog = create_catalog();

        let result = matcher.find_matches(&catalog, "burger vegan in Timisoara");

        assert_eq!(result.classification.tags, BTreeSet::from([Tag::Vegan, Tag::Burger]));
        assert!(result.fallback_applied);
        assert_eq!(names(&result), vec!["Casa Bunicii", "Klausen Burger"]);
    }

    #[test]
    fn test_no_city_no_tags_uses_whole_catalog() {
        let matcher = Matcher::default();
        let catalog = create_catalog();

        let result = matcher.find_matches(&catalog, "ceva bun");

        assert_eq!(result.total_candidates, catalog.len());
        assert_eq!(names(&result), vec!["Casa Bunicii", "Samsara", "Olivo Cafe"]);
    }

    #[test]
    fn test_tags_without_city_can_be_empty() {
        let matcher = Matcher::default();
        let catalog = create_catalog();

        let result = matcher.find_matches(&catalog, "pizza");

        assert!(result.matches.is_empty());
        assert!(!result.fallback_applied);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let matcher = Matcher::default();
        let catalog = create_catalog();
        let classification = matcher.classify("vegan in cluj");

        let first: Vec<_> = matcher
            .filter_candidates(&catalog, &classification)
            .candidates
            .iter()
            .map(|v| v.record.name.clone())
            .collect();
        let second: Vec<_> = matcher
            .filter_candidates(&catalog, &classification)
            .candidates
            .iter()
            .map(|v| v.record.name.clone())
            .collect();

        assert_eq!(first, vec!["Samsara"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(Matcher::new(0).max_results(), 1);
        assert_eq!(Matcher::new(5).max_results(), MAX_RESULTS_LIMIT);

        let catalog = VenueCatalog::new(
            (0..5)
                .map(|i| create_venue(&format!("Oradea {}", i), "Str. Republicii 9, Oradea", "", 4.0))
                .collect(),
        )
        .unwrap();

        let result = Matcher::new(5).find_matches(&catalog, "ceva in Oradea");
        assert_eq!(result.matches.len(), 3);

        let result = Matcher::new(0).find_matches(&catalog, "ceva in Oradea");
        assert_eq!(result.matches.len(), 1);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::new(1);
        let catalog = create_catalog();

        let result = matcher.find_matches(&catalog, "timisoara");

        assert_eq!(names(&result), vec!["Casa Bunicii"]);
        assert_eq!(result.total_candidates, 2);
    }
}
