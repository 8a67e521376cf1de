//! Property-based tests for the element comparator.
//!
//! Exercises the score invariants over randomly generated element trees:
//! reflexivity, symmetry, and "score 0 iff exact".

use proptest::prelude::*;
use tagdiff::compare::{
    compare_elements, elements_exact, match_tag, score_elements, MatchOutcome, ScoreWeights,
};
use tagdiff::index::IndexedElement;
use tagdiff::Element;

const TAGS: &[&str] = &["alpha", "beta", "gamma"];
const ATTR_NAMES: &[&str] = &["id", "kind", "name"];

fn arb_element() -> impl Strategy<Value = Element> {
    let leaf = (
        prop::sample::select(TAGS),
        prop::collection::btree_map(
            prop::sample::select(ATTR_NAMES),
            "[a-c]{0,2}",
            0..3,
        ),
        "[ a-c]{0,5}",
    )
        .prop_map(|(tag, attrs, text)| {
            let mut element = Element::new(tag);
            for (name, value) in attrs {
                element.attributes.insert(name.to_string(), value);
            }
            element.text = text;
            element
        });

    leaf.prop_recursive(3, 16, 3, |inner| {
        (
            prop::sample::select(TAGS),
            prop::collection::btree_map(
                prop::sample::select(ATTR_NAMES),
                "[a-c]{0,2}",
                0..3,
            ),
            "[ a-c]{0,5}",
            prop::collection::vec(inner, 0..3),
        )
            .prop_map(|(tag, attrs, text, children)| {
                let mut element = Element::new(tag);
                for (name, value) in attrs {
                    element.attributes.insert(name.to_string(), value);
                }
                element.text = text;
                element.children = children;
                element
            })
    })
}

/// Pairs of elements sharing a tag, as the matcher always produces.
fn arb_same_tag_pair() -> impl Strategy<Value = (Element, Element)> {
    (arb_element(), arb_element()).prop_map(|(a, mut b)| {
        b.tag = a.tag.clone();
        (a, b)
    })
}

proptest! {
    #[test]
    fn prop_compare_reflexive(a in arb_element()) {
        let weights = ScoreWeights::default();
        prop_assert!(elements_exact(&a, &a));
        prop_assert_eq!(score_elements(&a, &a, &weights), 0.0);
        let comparison = compare_elements(&a, &a, &weights);
        prop_assert!(comparison.exact);
        prop_assert!(comparison.detail.is_empty());
    }

    #[test]
    fn prop_exactness_symmetric((a, b) in arb_same_tag_pair()) {
        prop_assert_eq!(elements_exact(&a, &b), elements_exact(&b, &a));
    }

    #[test]
    fn prop_score_symmetric((a, b) in arb_same_tag_pair()) {
        let weights = ScoreWeights::default();
        let ab = score_elements(&a, &b, &weights);
        let ba = score_elements(&b, &a, &weights);
        prop_assert!((ab - ba).abs() < 1e-9, "score asymmetric: {} vs {}", ab, ba);
    }

    #[test]
    fn prop_score_zero_iff_exact((a, b) in arb_same_tag_pair()) {
        let weights = ScoreWeights::default();
        let score = score_elements(&a, &b, &weights);
        prop_assert!(score >= 0.0);
        if elements_exact(&a, &b) {
            prop_assert_eq!(score, 0.0);
        } else {
            prop_assert!(score > 0.0, "non-exact pair scored 0");
        }
    }

    #[test]
    fn prop_score_zero_iff_exact_any_pair(a in arb_element(), b in arb_element()) {
        let weights = ScoreWeights::default();
        let score = score_elements(&a, &b, &weights);
        if elements_exact(&a, &b) {
            prop_assert_eq!(score, 0.0);
        } else {
            prop_assert!(score > 0.0, "non-exact pair scored 0");
        }
    }

    #[test]
    fn prop_matching_is_bijective(
        primary in prop::collection::vec(arb_element(), 0..4),
        basis in prop::collection::vec(arb_element(), 0..4),
    ) {
        // Force everything into one tag group, as match_tag expects.
        let primary: Vec<Element> = primary
            .into_iter()
            .map(|mut e| { e.tag = "alpha".to_string(); e })
            .collect();
        let basis: Vec<Element> = basis
            .into_iter()
            .map(|mut e| { e.tag = "alpha".to_string(); e })
            .collect();

        let primary_paths: Vec<String> =
            (0..primary.len()).map(|i| format!("/r/alpha[{i}]")).collect();
        let basis_paths: Vec<String> =
            (0..basis.len()).map(|i| format!("/b/alpha[{i}]")).collect();

        let primary_group: Vec<IndexedElement<'_>> = primary
            .iter()
            .zip(&primary_paths)
            .map(|(element, path)| IndexedElement { path, element })
            .collect();
        let basis_group: Vec<IndexedElement<'_>> = basis
            .iter()
            .zip(&basis_paths)
            .map(|(element, path)| IndexedElement { path, element })
            .collect();

        let outcomes = match_tag(&primary_group, &basis_group, &ScoreWeights::default());

        let seen_primary: Vec<_> = outcomes.iter().filter_map(MatchOutcome::primary_path).collect();
        let seen_basis: Vec<_> = outcomes.iter().filter_map(MatchOutcome::basis_path).collect();

        // Every element appears in exactly one outcome.
        prop_assert_eq!(seen_primary.len(), primary.len());
        prop_assert_eq!(seen_basis.len(), basis.len());
        let unique_primary: std::collections::HashSet<_> = seen_primary.iter().collect();
        let unique_basis: std::collections::HashSet<_> = seen_basis.iter().collect();
        prop_assert_eq!(unique_primary.len(), primary.len());
        prop_assert_eq!(unique_basis.len(), basis.len());
    }
}
