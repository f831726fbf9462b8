use std::collections::BTreeSet;

use crate::models::{Tag, VenueText};

/// One row of the tag table: request triggers plus the venue predicate
pub struct TagRule {
    pub tag: Tag,
    pub triggers: &'static [&'static str],
    pub predicate: fn(&VenueText) -> bool,
}

pub static TAG_RULES: &[TagRule] = &[
    TagRule {
        tag: Tag::Coffee,
        triggers: &["cafea", "cafenea", "coffee"],
        predicate: |v| {
            contains_any(&v.name, &["coffee", "cafe"])
                || contains_any(&v.description, &["espresso", "cafea", "brunch"])
        },
    },
    TagRule {
        tag: Tag::Vegan,
        triggers: &["vegan"],
        predicate: |v| v.name.contains("vegan") || v.description.contains("plant-based"),
    },
    TagRule {
        tag: Tag::Pizza,
        triggers: &["pizza", "pizzerie"],
        predicate: |v| contains_any(&v.name, &["pizza", "pizzeria"]),
    },
    TagRule {
        tag: Tag::Burger,
        triggers: &["burger"],
        predicate: |v| v.name.contains("burger"),
    },
    TagRule {
        tag: Tag::Fish,
        triggers: &["peste", "fish", "seafood"],
        predicate: |v| {
            contains_any(&v.name, &["pesc", "sea"])
                || contains_any(&v.description, &["peste", "seafood"])
        },
    },
    TagRule {
        tag: Tag::Romantic,
        triggers: &["romantic", "intalnire", "date"],
        predicate: |v| contains_any(&v.description, &["romantic", "terasa", "linistit"]),
    },
    TagRule {
        tag: Tag::Students,
        triggers: &["student", "studenti", "facultate"],
        predicate: |v| {
            contains_any(&v.description, &["student", "campus", "meniu de pranz", "lunch"])
        },
    },
    TagRule {
        tag: Tag::Cheap,
        triggers: &["ieftin", "low cost", "buget"],
        predicate: |v| {
            contains_any(&v.description, &["ieftin", "cheap", "menu fix", "meniul zilei"])
        },
    },
];

#[inline]
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Detect every tag whose triggers occur in already-normalized text
pub fn classify_tags(normalized: &str) -> BTreeSet<Tag> {
    TAG_RULES
        .iter()
        .filter(|rule| contains_any(normalized, rule.triggers))
        .map(|rule| rule.tag)
        .collect()
}

/// Look up the table row for a tag
pub fn tag_rule(tag: Tag) -> &'static TagRule {
    TAG_RULES
        .iter()
        .find(|rule| rule.tag == tag)
        .unwrap_or_else(|| unreachable!("every Tag has a row in TAG_RULES"))
}

/// Check a single tag predicate against a venue
#[inline]
pub fn venue_has_tag(tag: Tag, venue: &VenueText) -> bool {
    (tag_rule(tag).predicate)(venue)
}
