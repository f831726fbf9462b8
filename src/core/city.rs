use crate::models::{CityKey, VenueText};

/// One row of the city table: request keywords plus the venue predicate
pub struct CityRule {
    pub key: CityKey,
    pub keywords: &'static [&'static str],
    pub predicate: fn(&VenueText) -> bool,
}

/// City table. Row order decides ambiguous requests: the first row with a
/// keyword hit wins.
pub static CITY_RULES: &[CityRule] = &[
    CityRule {
        key: CityKey::Bucuresti,
        keywords: &["bucuresti", "bucharest"],
        predicate: |v| v.address.contains("bucharest") || v.address.contains("bucuresti"),
    },
    CityRule {
        key: CityKey::Cluj,
        keywords: &["cluj", "cluj-napoca"],
        predicate: |v| v.address.contains("cluj"),
    },
    CityRule {
        key: CityKey::Timisoara,
        keywords: &["timisoara"],
        predicate: |v| v.address.contains("timisoara"),
    },
    CityRule {
        key: CityKey::Iasi,
        keywords: &["iasi"],
        predicate: |v| v.address.contains("iasi"),
    },
    CityRule {
        key: CityKey::Brasov,
        keywords: &["brasov"],
        predicate: |v| v.address.contains("brasov"),
    },
    CityRule {
        key: CityKey::Sibiu,
        keywords: &["sibiu"],
        predicate: |v| v.address.contains("sibiu"),
    },
    // Seaside requests ("la mare", "litoral") land here; venues named after
    // the sea count even when the address says otherwise.
    CityRule {
        key: CityKey::Constanta,
        keywords: &["constanta", "mare", "litoral"],
        predicate: |v| v.address.contains("constanta") || v.name.contains("sea"),
    },
    CityRule {
        key: CityKey::Oradea,
        keywords: &["oradea"],
        predicate: |v| v.address.contains("oradea"),
    },
    CityRule {
        key: CityKey::Galati,
        keywords: &["galati"],
        predicate: |v| v.address.contains("galati"),
    },
    CityRule {
        key: CityKey::Craiova,
        keywords: &["craiova"],
        predicate: |v| v.address.contains("craiova"),
    },
    CityRule {
        key: CityKey::Ploiesti,
        keywords: &["ploiesti"],
        predicate: |v| v.address.contains("ploiesti"),
    },
    CityRule {
        key: CityKey::AlbaIulia,
        keywords: &["alba iulia", "alba-iulia"],
        predicate: |v| v.address.contains("alba iulia"),
    },
    CityRule {
        key: CityKey::TarguMures,
        keywords: &["targu mures", "targu-mures"],
        predicate: |v| v.address.contains("targu mures"),
    },
];

/// Detect the city mentioned in already-normalized text
pub fn classify_city(normalized: &str) -> Option<CityKey> {
    CITY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|rule| rule.key)
}

/// Look up the table row for a city
pub fn city_rule(key: CityKey) -> &'static CityRule {
    CITY_RULES
        .iter()
        .find(|rule| rule.key == key)
        .unwrap_or_else(|| unreachable!("every CityKey has a row in CITY_RULES"))
}

/// Check whether a venue belongs to the given city
#[inline]
pub fn venue_in_city(key: CityKey, venue: &VenueText) -> bool {
    (city_rule(key).predicate)(venue)
}
