//! Element exactness, dissimilarity scoring, and diff detail.
//!
//! Two elements are exact matches iff their tags agree, their attribute
//! maps agree (order-independently), their text agrees after whitespace
//! normalization, and their children are pairwise exact in document order.
//! When elements are not exact, a non-negative score says how far apart
//! they are; zero is reserved for exact matches.
//!
//! The score is symmetric: the recursive child pairing used here consumes
//! candidate pairs by globally minimal score, which does not depend on
//! which document is called "primary". The document-order pass mandated
//! for top-level matching lives in [`matcher`](super::matcher) instead.

use super::result::{
    AttributeDiff, AttributeEntry, ChildSummary, DiffDetail, TextDiff,
};
use crate::model::Element;
use serde::{Deserialize, Serialize};

/// Weights for the dissimilarity score.
///
/// The text weight scales a normalized Levenshtein distance in [0, 1];
/// the other weights are per-occurrence penalties. The reorder weight
/// covers the one configuration no other term sees: identical children in
/// a different sibling order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Per attribute missing from one side or differing in value
    pub attribute: f64,
    /// Scale for the normalized text edit distance
    pub text: f64,
    /// Per child element left without a counterpart
    pub unmatched_child: f64,
    /// Per exact-matched child pair sitting at different sibling positions
    pub child_reorder: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            attribute: 1.0,
            text: 2.0,
            unmatched_child: 1.0,
            child_reorder: 0.25,
        }
    }
}

/// Result of comparing two elements of the same tag.
#[derive(Debug, Clone)]
pub struct ElementComparison {
    /// Structural equality after text normalization
    pub exact: bool,
    /// Dissimilarity; 0.0 iff exact
    pub score: f64,
    /// Discrepancies; empty when exact
    pub detail: DiffDetail,
}

/// Normalize text content for comparison: trim and collapse internal
/// whitespace runs to a single space. Documents are not guaranteed to be
/// identically formatted, so raw text is never compared directly.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Structural equality check, recursing through children in document order.
#[must_use]
pub fn elements_exact(a: &Element, b: &Element) -> bool {
    a.tag == b.tag
        && attributes_equal(a, b)
        && normalize_text(&a.text) == normalize_text(&b.text)
        && a.children.len() == b.children.len()
        && a.children
            .iter()
            .zip(&b.children)
            .all(|(ca, cb)| elements_exact(ca, cb))
}

/// Dissimilarity score between two elements. 0.0 iff the elements are
/// exact matches.
///
/// The matcher only ever scores same-tag pairs; a differing tag name still
/// counts as one mismatch so the zero-iff-exact invariant holds for any
/// pair of elements.
#[must_use]
pub fn score_elements(a: &Element, b: &Element, weights: &ScoreWeights) -> f64 {
    if elements_exact(a, b) {
        return 0.0;
    }
    let tag_penalty = if a.tag == b.tag { 0.0 } else { weights.attribute };
    let attr_penalty = attribute_mismatch_count(a, b) as f64 * weights.attribute;
    let text_penalty = text_distance(a, b) * weights.text;
    let child_penalty = match_children(&a.children, &b.children, weights).penalty;
    tag_penalty + attr_penalty + text_penalty + child_penalty
}

/// Full comparison: exactness, score, and diff detail in one pass.
#[must_use]
pub fn compare_elements(a: &Element, b: &Element, weights: &ScoreWeights) -> ElementComparison {
    if elements_exact(a, b) {
        return ElementComparison {
            exact: true,
            score: 0.0,
            detail: DiffDetail::default(),
        };
    }

    let detail = build_diff_detail(a, b, weights);
    let score = score_elements(a, b, weights);
    ElementComparison {
        exact: false,
        score,
        detail,
    }
}

/// Order-independent attribute map equality.
fn attributes_equal(a: &Element, b: &Element) -> bool {
    a.attributes.len() == b.attributes.len()
        && a.attributes
            .iter()
            .all(|(name, value)| b.attributes.get(name) == Some(value))
}

/// Count of attributes present on only one side or with differing values.
fn attribute_mismatch_count(a: &Element, b: &Element) -> usize {
    let only_in_a = a
        .attributes
        .keys()
        .filter(|name| !b.attributes.contains_key(*name))
        .count();
    let only_in_b = b
        .attributes
        .keys()
        .filter(|name| !a.attributes.contains_key(*name))
        .count();
    let differing = a
        .attributes
        .iter()
        .filter(|(name, value)| {
            b.attributes
                .get(*name)
                .is_some_and(|other| other != *value)
        })
        .count();
    only_in_a + only_in_b + differing
}

/// Normalized Levenshtein distance between normalized texts, in [0, 1].
/// 0.0 when the normalized texts are equal.
fn text_distance(a: &Element, b: &Element) -> f64 {
    let norm_a = normalize_text(&a.text);
    let norm_b = normalize_text(&b.text);
    if norm_a == norm_b {
        0.0
    } else {
        1.0 - strsim::normalized_levenshtein(&norm_a, &norm_b)
    }
}

/// How two child lists line up, expressed as a penalty plus outcome counts.
struct ChildMatchStats {
    penalty: f64,
    summary: ChildSummary,
}

/// Match the children of two elements by tag name: exact pass first, then
/// minimum-score pairing of what remains, then one-sided leftovers.
///
/// Used only for scoring and detail, where the pairing must be symmetric;
/// leftover candidates are consumed by globally minimal score with
/// (primary index, basis index) as the tie-break.
fn match_children(a: &[Element], b: &[Element], weights: &ScoreWeights) -> ChildMatchStats {
    let mut summary = ChildSummary::default();
    let mut pair_score_total = 0.0;
    let mut displaced = 0usize;

    for (p_indices, b_indices) in tag_scoped_groups(a, b) {
        let mut b_consumed = vec![false; b_indices.len()];
        let mut p_remaining: Vec<usize> = Vec::new();

        // Exact pass: earliest unconsumed counterpart wins, which pairs the
        // k-th occurrence of a value with the k-th on the other side.
        for &pi in &p_indices {
            let mut matched = false;
            for (slot, &bi) in b_indices.iter().enumerate() {
                if !b_consumed[slot] && elements_exact(&a[pi], &b[bi]) {
                    b_consumed[slot] = true;
                    summary.exact += 1;
                    if pi != bi {
                        displaced += 1;
                    }
                    matched = true;
                    break;
                }
            }
            if !matched {
                p_remaining.push(pi);
            }
        }

        let b_remaining: Vec<usize> = b_indices
            .iter()
            .enumerate()
            .filter(|(slot, _)| !b_consumed[*slot])
            .map(|(_, &bi)| bi)
            .collect();

        // Score every remaining cross pair and consume by global minimum.
        let mut candidates: Vec<(f64, usize, usize)> = Vec::new();
        for (p_pos, &pi) in p_remaining.iter().enumerate() {
            for (b_pos, &bi) in b_remaining.iter().enumerate() {
                candidates.push((score_elements(&a[pi], &b[bi], weights), p_pos, b_pos));
            }
        }
        candidates.sort_by(|x, y| {
            x.0.total_cmp(&y.0)
                .then_with(|| x.1.cmp(&y.1))
                .then_with(|| x.2.cmp(&y.2))
        });

        let mut p_used = vec![false; p_remaining.len()];
        let mut b_used = vec![false; b_remaining.len()];
        for (score, p_pos, b_pos) in candidates {
            if !p_used[p_pos] && !b_used[b_pos] {
                p_used[p_pos] = true;
                b_used[b_pos] = true;
                summary.best_match += 1;
                pair_score_total += score;
            }
        }

        summary.primary_only += p_used.iter().filter(|used| !**used).count();
        summary.basis_only += b_used.iter().filter(|used| !**used).count();
    }

    let unmatched = (summary.primary_only + summary.basis_only) as f64;
    let penalty = pair_score_total
        + unmatched * weights.unmatched_child
        + displaced as f64 * weights.child_reorder;
    ChildMatchStats { penalty, summary }
}

/// Pair up the sibling-index lists of both child slices, tag by tag, in
/// first-occurrence order (primary first, then basis-only tags).
fn tag_scoped_groups(a: &[Element], b: &[Element]) -> Vec<(Vec<usize>, Vec<usize>)> {
    let mut order: Vec<&str> = Vec::new();
    for child in a.iter().chain(b.iter()) {
        if !order.contains(&child.tag.as_str()) {
            order.push(&child.tag);
        }
    }

    order
        .into_iter()
        .map(|tag| {
            let p = indices_with_tag(a, tag);
            let q = indices_with_tag(b, tag);
            (p, q)
        })
        .collect()
}

fn indices_with_tag(children: &[Element], tag: &str) -> Vec<usize> {
    children
        .iter()
        .enumerate()
        .filter(|(_, c)| c.tag == tag)
        .map(|(i, _)| i)
        .collect()
}

/// Enumerate attribute-, text-, and child-level discrepancies.
fn build_diff_detail(a: &Element, b: &Element, weights: &ScoreWeights) -> DiffDetail {
    let attributes_only_in_primary = a
        .attributes
        .iter()
        .filter(|(name, _)| !b.attributes.contains_key(*name))
        .map(|(name, value)| AttributeEntry {
            name: name.clone(),
            value: value.clone(),
        })
        .collect();
    let attributes_only_in_basis = b
        .attributes
        .iter()
        .filter(|(name, _)| !a.attributes.contains_key(*name))
        .map(|(name, value)| AttributeEntry {
            name: name.clone(),
            value: value.clone(),
        })
        .collect();
    let differing_attributes = a
        .attributes
        .iter()
        .filter_map(|(name, value)| {
            b.attributes.get(name).and_then(|other| {
                (other != value).then(|| AttributeDiff {
                    name: name.clone(),
                    primary: value.clone(),
                    basis: other.clone(),
                })
            })
        })
        .collect();

    let text = (normalize_text(&a.text) != normalize_text(&b.text)).then(|| TextDiff {
        primary: a.text.clone(),
        basis: b.text.clone(),
    });

    let children = match_children(&a.children, &b.children, weights).summary;

    DiffDetail {
        attributes_only_in_primary,
        attributes_only_in_basis,
        differing_attributes,
        text,
        children,
    }
}
