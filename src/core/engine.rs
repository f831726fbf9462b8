use rand::Rng;

use crate::core::{
    matcher::Matcher,
    narrative::{NarrativeGenerator, NO_MATCH_REPLY},
};
use crate::services::VenueCatalog;

pub const EMPTY_INPUT_REPLY: &str = "Poti sa-mi scrii ce fel de loc cauti. De exemplu: \
„O cafenea linistita in Cluj pentru invatat” sau „Un local cu peste la mare”.";

/// How a reply was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    EmptyInput,
    NoMatch,
    Recommended { count: usize, fallback_applied: bool },
}

#[derive(Debug, Clone)]
pub struct ChatReply {
    pub reply: String,
    pub outcome: ReplyOutcome,
}

/// Request-to-reply pipeline: classify, filter, rank, narrate
#[derive(Debug, Clone, Default)]
pub struct ChatEngine {
    matcher: Matcher,
    narrator: NarrativeGenerator,
}

impl ChatEngine {
    pub fn new(matcher: Matcher, narrator: NarrativeGenerator) -> Self {
        Self { matcher, narrator }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn narrator(&self) -> &NarrativeGenerator {
        &self.narrator
    }

    /// Answer a free-text request against the catalog
    pub fn reply<R: Rng + ?Sized>(
        &self,
        catalog: &VenueCatalog,
        message: &str,
        rng: &mut R,
    ) -> ChatReply {
        if message.trim().is_empty() {
            return ChatReply {
                reply: EMPTY_INPUT_REPLY.to_string(),
                outcome: ReplyOutcome::EmptyInput,
            };
        }

        let result = self.matcher.find_matches(catalog, message);

        tracing::debug!(
            "Classified request: city={:?}, tags={:?}, candidates={}, fallback={}",
            result.classification.city,
            result.classification.tags,
            result.total_candidates,
            result.fallback_applied
        );

        if result.matches.is_empty() {
            return ChatReply {
                reply: NO_MATCH_REPLY.to_string(),
                outcome: ReplyOutcome::NoMatch,
            };
        }

        ChatReply {
            reply: self.narrator.compose_reply(&result.matches, message, rng),
            outcome: ReplyOutcome::Recommended {
                count: result.matches.len(),
                fallback_applied: result.fallback_applied,
            },
        }
    }
}
