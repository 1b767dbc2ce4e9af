//! Destination resolution - matches an extracted phrase against the directory
//!
//! Scoring is case-insensitive and additive:
//! - the full phrase appearing in the name is worth [`PHRASE_SCORE`]
//! - every distinct keyword appearing in the name is worth [`KEYWORD_SCORE`]
//! - once `min(2, keywords)` keywords match, each matched keyword earns an
//!   extra [`MULTI_MATCH_BONUS`], so agreement across tokens beats a single
//!   coincidental hit
//!
//! A score of zero is never a match.

use crate::core::types::Destination;
use ahash::AHashSet;
use std::cmp::Ordering;

pub const PHRASE_SCORE: u32 = 10;
pub const KEYWORD_SCORE: u32 = 5;
pub const MULTI_MATCH_BONUS: u32 = 3;

/// What the operator said about the destination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationQuery {
    /// Destination as phrased by the operator
    pub phrase: String,
    /// Distinctive tokens, blank entries removed, order preserved
    pub keywords: Vec<String>,
}

impl DestinationQuery {
    pub fn new(phrase: &str, keywords: &[String]) -> Self {
        Self {
            phrase: phrase.trim().to_string(),
            keywords: keywords
                .iter()
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Without a phrase there is nothing to search for, keywords or not
    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }

    /// Lowercased keywords with duplicates removed, first occurrence kept
    ///
    /// A keyword repeated by the completion service is one token of the
    /// name, so it scores once and counts once towards `min(2, keywords)`.
    fn distinct_keywords(&self) -> Vec<String> {
        let mut seen = AHashSet::new();
        self.keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|k| seen.insert(k.clone()))
            .collect()
    }
}

/// A scored directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub destination: Destination,
    pub score: u32,
}

/// Score a destination name against a query
pub fn score_name(name: &str, query: &DestinationQuery) -> u32 {
    if query.is_empty() {
        return 0;
    }
    let phrase = query.phrase.to_lowercase();
    let name = name.to_lowercase();

    let mut score = 0;
    if name.contains(&phrase) {
        score += PHRASE_SCORE;
    }

    let keywords = query.distinct_keywords();
    let matched = keywords
        .iter()
        .filter(|k| name.contains(k.as_str()))
        .count();
    score += matched as u32 * KEYWORD_SCORE;

    if matched > 0 && matched >= keywords.len().min(2) {
        score += matched as u32 * MULTI_MATCH_BONUS;
    }

    score
}

/// Highest score first, then name, then id
fn resolution_order(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| {
            a.destination
                .name
                .to_lowercase()
                .cmp(&b.destination.name.to_lowercase())
        })
        .then_with(|| a.destination.id.cmp(&b.destination.id))
}

/// Resolves destination phrases against a directory snapshot
pub struct DestinationResolver<'a> {
    directory: &'a [Destination],
}

impl<'a> DestinationResolver<'a> {
    pub fn new(directory: &'a [Destination]) -> Self {
        Self { directory }
    }

    /// Every active destination with a positive score, best first
    pub fn rank(&self, query: &DestinationQuery) -> Vec<MatchCandidate> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<MatchCandidate> = self
            .directory
            .iter()
            .filter(|d| d.active)
            .filter_map(|d| {
                let score = score_name(&d.name, query);
                tracing::debug!(destination = %d.name, score, "Scored destination");
                (score > 0).then(|| MatchCandidate {
                    destination: d.clone(),
                    score,
                })
            })
            .collect();

        candidates.sort_by(resolution_order);
        candidates
    }

    /// The best match, if any destination scored above zero
    pub fn resolve(&self, query: &DestinationQuery) -> Option<MatchCandidate> {
        self.rank(query).into_iter().next()
    }
}
