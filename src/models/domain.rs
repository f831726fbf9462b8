use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::core::normalize::normalize_text;

/// Venue entry as stored in the static catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    pub rating: f64,
}

impl VenueRecord {
    /// City token: the last comma-separated segment of the address
    pub fn city(&self) -> &str {
        self.address.rsplit(',').next().unwrap_or_default().trim()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

/// Normalized text fields of a venue, computed once when the catalog loads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueText {
    pub name: String,
    pub address: String,
    pub description: String,
}

impl VenueText {
    pub fn from_record(record: &VenueRecord) -> Self {
        Self {
            name: normalize_text(&record.name),
            address: normalize_text(&record.address),
            description: record
                .short_description
                .as_deref()
                .map(normalize_text)
                .unwrap_or_default(),
        }
    }
}

/// Recognised cities, in classifier table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityKey {
    Bucuresti,
    Cluj,
    Timisoara,
    Iasi,
    Brasov,
    Sibiu,
    Constanta,
    Oradea,
    Galati,
    Craiova,
    Ploiesti,
    AlbaIulia,
    TarguMures,
}

impl CityKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CityKey::Bucuresti => "bucuresti",
            CityKey::Cluj => "cluj",
            CityKey::Timisoara => "timisoara",
            CityKey::Iasi => "iasi",
            CityKey::Brasov => "brasov",
            CityKey::Sibiu => "sibiu",
            CityKey::Constanta => "constanta",
            CityKey::Oradea => "oradea",
            CityKey::Galati => "galati",
            CityKey::Craiova => "craiova",
            CityKey::Ploiesti => "ploiesti",
            CityKey::AlbaIulia => "alba_iulia",
            CityKey::TarguMures => "targu_mures",
        }
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Topical labels detected independently from request text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Coffee,
    Vegan,
    Pizza,
    Burger,
    Fish,
    Romantic,
    Students,
    Cheap,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Coffee => "coffee",
            Tag::Vegan => "vegan",
            Tag::Pizza => "pizza",
            Tag::Burger => "burger",
            Tag::Fish => "fish",
            Tag::Romantic => "romantic",
            Tag::Students => "students",
            Tag::Cheap => "cheap",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the classifiers extracted from one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub city: Option<CityKey>,
    pub tags: BTreeSet<Tag>,
}

/// Ranked venues selected for one reply
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSet<'a> {
    venues: Vec<&'a VenueRecord>,
}

impl<'a> MatchSet<'a> {
    pub fn new(venues: Vec<&'a VenueRecord>) -> Self {
        Self { venues }
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a VenueRecord> + '_ {
        self.venues.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a VenueRecord] {
        &self.venues
    }
}
