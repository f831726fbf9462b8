//! Recommendation text generation.
//!
//! Each venue paragraph is stitched from fragments: a random intro, the stored
//! description, an atmosphere line whose branch depends on the rating, a usage
//! line picked from the request keywords, and a random closing remark.
//! Randomness always comes from the caller so output can be reproduced.

use rand::Rng;

use crate::core::normalize::normalize_text;
use crate::models::{MatchSet, VenueRecord};

/// Rating at or above which the high-rating atmosphere lines are used
pub const DEFAULT_HIGH_RATING_THRESHOLD: f64 = 4.7;

pub const MULTIPLE_MATCHES_INTRO: &str =
    "Am gasit mai multe variante care s-ar potrivi cu ce ai intrebat. Iata cateva recomandari:";

pub const NO_MATCH_REPLY: &str = "Nu am reusit sa gasesc un loc potrivit in lista mea pentru ce ai descris. \
Incearca sa mentionezi si orasul sau tipul de local (cafenea, pizza, vegan, peste, etc.).";

type IntroTemplate = fn(&VenueRecord, &str) -> String;
type RatingTemplate = fn(f64) -> String;

static INTRO_TEMPLATES: &[IntroTemplate] = &[
    |venue, city| {
        format!(
            "„{}” este unul dintre cele mai apreciate locuri din {}, aflat la adresa {}.",
            venue.name, city, venue.address
        )
    },
    |venue, city| {
        format!(
            "Daca ajungi prin {}, merita neaparat sa incerci „{}”, situat pe {}.",
            city, venue.name, venue.address
        )
    },
    |venue, city| {
        format!(
            "„{}”, pe {} ({}), este o optiune foarte populara printre localnici si studenti.",
            venue.name, venue.address, city
        )
    },
];

static HIGH_RATING_TEMPLATES: &[RatingTemplate] = &[
    |rating| {
        format!(
            "Atmosfera este calda si prietenoasa, iar recenziile il plaseaza constant peste {:.1} din 5 stele.",
            round_rating(rating)
        )
    },
    |rating| {
        format!(
            "Multi clienti mentioneaza ca se simt foarte relaxati aici, iar ratingul de {:.1} din 5 confirma experienta placuta.",
            round_rating(rating)
        )
    },
];

static STANDARD_RATING_TEMPLATES: &[RatingTemplate] = &[
    |rating| {
        format!(
            "Este un loc echilibrat, cu recenzii bune si un rating general de aproximativ {:.1} din 5.",
            round_rating(rating)
        )
    },
    |rating| {
        format!(
            "Multi clienti mentioneaza ca se simt foarte relaxati aici, iar ratingul de {:.1} din 5 confirma experienta placuta.",
            round_rating(rating)
        )
    },
];

/// Keyword groups for the usage line, in priority order
static USAGE_RULES: &[(&[&str], &str)] = &[
    (
        &["student"],
        "Este potrivit in special pentru studenti, fie ca vii pentru un pranz rapid intre cursuri, fie pentru o seara mai relaxata cu colegii.",
    ),
    (
        &["romantic", "intalnire"],
        "Ambianta il recomanda pentru intalniri romantice: lumina discreta, muzica placuta si posibilitatea de a sta la povesti in liniste.",
    ),
    (
        &["cafea", "cappuccino"],
        "Daca iti place cafeaua buna, aici gasesti espresso corect facut, dar si optiuni precum cappuccino sau latte pentru un moment de relaxare.",
    ),
    (
        &["vegan"],
        "Este o alegere foarte buna pentru cei care prefera optiuni vegane sau mancare mai usoara, bazata pe ingrediente proaspete.",
    ),
];

const GENERIC_USAGE: &str = "Este genul de loc unde poti veni atat cu prietenii, cat si cu familia, pentru a manca bine si a petrece timp intr-un cadru placut.";

static EXTRA_REMARKS: &[&str] = &[
    "Personalul este in general apreciat ca fiind prietenos si prompt, ceea ce contribuie mult la experienta generala.",
    "In functie de ora si de zi, poate fi destul de aglomerat, asa ca merita sa iei in calcul o rezervare sau sa ajungi ceva mai devreme.",
    "Daca iti place sa faci poze pentru Instagram, decorul si platingul mancarurilor se preteaza foarte bine pentru asta.",
];

/// Round to one decimal with ties away from zero, so 4.25 reads as 4.3
#[inline]
fn round_rating(rating: f64) -> f64 {
    (rating * 10.0).round() / 10.0
}

/// Pick one element uniformly at random
pub(crate) fn pick<'t, T, R: Rng + ?Sized>(items: &'t [T], rng: &mut R) -> &'t T {
    &items[rng.random_range(0..items.len())]
}

/// Usage line for a normalized request; the first matching group wins
pub fn select_usage(normalized_request: &str) -> &'static str {
    USAGE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| normalized_request.contains(kw)))
        .map(|(_, sentence)| *sentence)
        .unwrap_or(GENERIC_USAGE)
}

#[derive(Debug, Clone, Copy)]
pub struct NarrativeGenerator {
    high_rating_threshold: f64,
}

impl NarrativeGenerator {
    pub fn new(high_rating_threshold: f64) -> Self {
        Self { high_rating_threshold }
    }

    pub fn high_rating_threshold(&self) -> f64 {
        self.high_rating_threshold
    }

    /// Atmosphere line: the branch is chosen by rating, the phrasing at random
    pub fn atmosphere<R: Rng + ?Sized>(&self, rating: f64, rng: &mut R) -> String {
        let templates = if rating >= self.high_rating_threshold {
            HIGH_RATING_TEMPLATES
        } else {
            STANDARD_RATING_TEMPLATES
        };
        pick(templates, rng)(rating)
    }

    /// One paragraph describing a venue in the context of the request
    pub fn describe_venue<R: Rng + ?Sized>(
        &self,
        venue: &VenueRecord,
        request: &str,
        rng: &mut R,
    ) -> String {
        self.paragraph(venue, select_usage(&normalize_text(request)), rng)
    }

    fn paragraph<R: Rng + ?Sized>(&self, venue: &VenueRecord, usage: &str, rng: &mut R) -> String {
        let city = venue.city();

        let mut fragments: Vec<String> = Vec::with_capacity(5);
        fragments.push(pick(INTRO_TEMPLATES, rng)(venue, city));
        if let Some(description) = venue.short_description.as_deref() {
            fragments.push(description.to_string());
        }
        fragments.push(self.atmosphere(venue.rating, rng));
        fragments.push(usage.to_string());
        fragments.push(pick(EXTRA_REMARKS, rng).to_string());

        fragments.join(" ")
    }

    /// Full reply for a ranked match set
    ///
    /// A single venue yields its paragraph alone; several venues yield an
    /// intro sentence followed by a numbered list.
    pub fn compose_reply<R: Rng + ?Sized>(
        &self,
        matches: &MatchSet<'_>,
        request: &str,
        rng: &mut R,
    ) -> String {
        let usage = select_usage(&normalize_text(request));

        match matches.as_slice() {
            [] => NO_MATCH_REPLY.to_string(),
            [venue] => self.paragraph(venue, usage, rng),
            venues => {
                let mut sections = Vec::with_capacity(venues.len() + 1);
                sections.push(MULTIPLE_MATCHES_INTRO.to_string());
                for (idx, venue) in venues.iter().enumerate() {
                    sections.push(format!("{}. {}", idx + 1, self.paragraph(venue, usage, rng)));
                }
                sections.join("\n\n")
            }
        }
    }
}

impl Default for NarrativeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_RATING_THRESHOLD)
    }
}
