// Core algorithm exports
pub mod city;
pub mod engine;
pub mod filters;
pub mod matcher;
pub mod narrative;
pub mod normalize;
pub mod ranking;
pub mod tags;
pub mod vibe;

pub use city::{classify_city, venue_in_city, CITY_RULES};
pub use engine::{ChatEngine, ChatReply, ReplyOutcome, EMPTY_INPUT_REPLY};
pub use filters::{matches_all_tags, matches_city};
pub use matcher::{FilterOutcome, MatchResult, Matcher};
pub use narrative::{select_usage, NarrativeGenerator, NO_MATCH_REPLY};
pub use normalize::normalize_text;
pub use ranking::rank_venues;
pub use tags::{classify_tags, venue_has_tag, TAG_RULES};
pub use vibe::generate_vibe;
