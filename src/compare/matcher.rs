//! Per-tag element matching.
//!
//! For one tag name, pairs primary elements against basis elements in two
//! passes: an exact pass (first exact match wins, earliest unconsumed basis
//! candidate as the tie-break), then a best-match pass (minimum score among
//! the remaining candidates, earliest basis index on ties). Whatever is
//! left on either side becomes a one-sided outcome.
//!
//! The matcher never fails on data content; a malformed tree is rejected by
//! the indexer before matching starts.

use super::result::MatchOutcome;
use super::score::{compare_elements, elements_exact, score_elements, ScoreWeights};
use crate::index::IndexedElement;

/// Match one tag's primary elements against its basis elements.
///
/// Outcomes are emitted in primary document order, then basis-only
/// leftovers in basis document order. Each element ends up in exactly one
/// outcome.
pub fn match_tag(
    primary: &[IndexedElement<'_>],
    basis: &[IndexedElement<'_>],
    weights: &ScoreWeights,
) -> Vec<MatchOutcome> {
    let mut slots: Vec<Option<MatchOutcome>> = vec![None; primary.len()];
    let mut basis_consumed = vec![false; basis.len()];

    // Exact pass over the whole group first, so a later primary element can
    // never lose its identical counterpart to an earlier element's
    // best-match pairing.
    for (pi, p) in primary.iter().enumerate() {
        for (bi, b) in basis.iter().enumerate() {
            if !basis_consumed[bi] && elements_exact(p.element, b.element) {
                basis_consumed[bi] = true;
                slots[pi] = Some(MatchOutcome::Exact {
                    primary: p.path.to_string(),
                    basis: b.path.to_string(),
                });
                break;
            }
        }
    }

    // Best-match pass for the primary elements still unpaired.
    for (pi, p) in primary.iter().enumerate() {
        if slots[pi].is_some() {
            continue;
        }

        let mut best: Option<(usize, f64)> = None;
        for (bi, b) in basis.iter().enumerate() {
            if basis_consumed[bi] {
                continue;
            }
            let score = score_elements(p.element, b.element, weights);
            // Strict less-than keeps the earliest basis candidate on ties.
            if best.map_or(true, |(_, best_score)| score < best_score) {
                best = Some((bi, score));
            }
        }

        if let Some((bi, _)) = best {
            basis_consumed[bi] = true;
            let b = &basis[bi];
            let comparison = compare_elements(p.element, b.element, weights);
            slots[pi] = Some(MatchOutcome::BestMatch {
                primary: p.path.to_string(),
                basis: b.path.to_string(),
                score: comparison.score,
                detail: comparison.detail,
            });
        }
    }

    let mut outcomes: Vec<MatchOutcome> = Vec::with_capacity(primary.len() + basis.len());
    for (pi, slot) in slots.into_iter().enumerate() {
        outcomes.push(slot.unwrap_or_else(|| MatchOutcome::PrimaryOnly {
            primary: primary[pi].path.to_string(),
        }));
    }
    for (bi, b) in basis.iter().enumerate() {
        if !basis_consumed[bi] {
            outcomes.push(MatchOutcome::BasisOnly {
                basis: b.path.to_string(),
            });
        }
    }
    outcomes
}
