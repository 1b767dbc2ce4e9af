//! Property tests for destination scoring and resolution

use proptest::prelude::*;
use tour_command::command::resolver::{
    score_name, DestinationQuery, DestinationResolver, KEYWORD_SCORE, MULTI_MATCH_BONUS,
    PHRASE_SCORE,
};
use tour_command::core::types::Destination;

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-m]{3,8}", 1..5)
}

fn directory() -> impl Strategy<Value = Vec<Destination>> {
    prop::collection::vec(words(), 0..8).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, words)| Destination::new(format!("d{}", i), words.join(" ")))
            .collect()
    })
}

fn query(phrase: &str, keywords: &[String]) -> DestinationQuery {
    DestinationQuery::new(phrase, keywords)
}

proptest! {
    /// A phrase contained in the only destination's name always resolves to it
    #[test]
    fn substring_phrase_resolves_with_phrase_score(name in words(), pick in any::<prop::sample::Index>()) {
        let phrase = pick.get(&name).to_uppercase();
        let dir = vec![Destination::new("d1", name.join(" "))];

        let best = DestinationResolver::new(&dir).resolve(&query(&phrase, &[]));

        let best = best.expect("substring phrase must match");
        prop_assert_eq!(best.destination.id.as_str(), "d1");
        prop_assert!(best.score >= PHRASE_SCORE);
    }

    /// All keywords matching earns the bonus exactly once
    #[test]
    fn multi_match_bonus_applied_once(name in words()) {
        let mut distinct: Vec<String> = Vec::new();
        for word in &name {
            if !distinct.contains(word) {
                distinct.push(word.clone());
            }
        }
        let k = distinct.len() as u32;

        // "zzz" never appears in names built from a-m
        let score = score_name(&name.join(" "), &query("zzz", &distinct));

        prop_assert_eq!(score, k * KEYWORD_SCORE + k * MULTI_MATCH_BONUS);
    }

    #[test]
    fn empty_query_never_matches(dir in directory(), blanks in prop::collection::vec(" {0,3}", 0..3)) {
        let resolver = DestinationResolver::new(&dir);
        prop_assert!(resolver.resolve(&query("", &blanks)).is_none());
        prop_assert!(resolver.rank(&query("  ", &[])).is_empty());
    }

    /// Keywords alone never stand in for a missing phrase
    #[test]
    fn blank_phrase_with_keywords_never_matches(
        dir in directory().prop_filter("needs destinations", |d| !d.is_empty()),
        blank in " {0,3}",
        keywords in prop::collection::vec("[a-m]{1,6}", 1..4),
    ) {
        let resolver = DestinationResolver::new(&dir);
        let q = query(&blank, &keywords);
        prop_assert!(resolver.resolve(&q).is_none());
        for d in &dir {
            prop_assert_eq!(score_name(&d.name, &q), 0);
        }
    }

    #[test]
    fn empty_directory_never_matches(phrase in "[a-z ]{0,20}", keywords in prop::collection::vec("[a-z]{0,6}", 0..4)) {
        let resolver = DestinationResolver::new(&[]);
        prop_assert!(resolver.resolve(&query(&phrase, &keywords)).is_none());
    }

    /// Zero never qualifies and the winner holds the top score
    #[test]
    fn resolved_score_is_positive_maximum(dir in directory(), phrase in "[a-m]{1,4}", keywords in prop::collection::vec("[a-m]{1,4}", 0..3)) {
        let q = query(&phrase, &keywords);
        let resolver = DestinationResolver::new(&dir);

        if let Some(best) = resolver.resolve(&q) {
            prop_assert!(best.score > 0);
            for d in &dir {
                prop_assert!(score_name(&d.name, &q) <= best.score);
            }
        } else {
            for d in &dir {
                prop_assert_eq!(score_name(&d.name, &q), 0);
            }
        }
    }

    /// Resolution does not depend on the order the directory arrives in
    #[test]
    fn resolution_ignores_directory_order(dir in directory(), phrase in "[a-m]{1,3}") {
        let q = query(&phrase, &[]);
        let mut reversed = dir.clone();
        reversed.reverse();

        let forward = DestinationResolver::new(&dir).resolve(&q).map(|c| c.destination.id);
        let backward = DestinationResolver::new(&reversed).resolve(&q).map(|c| c.destination.id);

        prop_assert_eq!(forward, backward);
    }
}
