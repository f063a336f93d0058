//! Keyword frequency scoring.
//!
//! Each input facet has a fixed vocabulary of lowercase keywords. Scoring a
//! bucket counts, per keyword, how many of the bucket's anchors mention it
//! in their description. Detection is presence per anchor, not raw substring
//! multiplicity: an anchor naming "luxury" three times scores once.

use crate::models::Anchor;

/// Budget indicators scanned in budget-tier buckets.
pub const BUDGET_KEYWORDS: &[&str] = &[
    "free",
    "cheap",
    "affordable",
    "budget",
    "luxury",
    "upscale",
    "premium",
    "expensive",
    "guided",
    "private",
    "exclusive",
];

/// Vibe indicators scanned in vibe buckets.
pub const VIBE_KEYWORDS: &[&str] = &[
    "romantic",
    "intimate",
    "chill",
    "relaxed",
    "adventure",
    "active",
    "fun",
    "social",
    "luxurious",
    "upscale",
    "authentic",
    "local",
];

/// Priority indicators scanned in priority buckets, grouped by theme:
/// culture/history, food/dining, adventure/outdoor, relaxation/wellness,
/// shopping, nightlife.
pub const PRIORITY_KEYWORDS: &[&str] = &[
    "culture",
    "history",
    "museum",
    "art",
    "food",
    "dining",
    "restaurant",
    "culinary",
    "adventure",
    "outdoor",
    "hiking",
    "active",
    "relaxation",
    "wellness",
    "spa",
    "chill",
    "shopping",
    "market",
    "boutique",
    "fashion",
    "nightlife",
    "bar",
    "club",
    "entertainment",
];

/// Transportation indicators scanned in mobility buckets.
pub const MOBILITY_KEYWORDS: &[&str] = &[
    "walking",
    "walk",
    "stroll",
    "pedestrian",
    "metro",
    "subway",
    "train",
    "transport",
    "taxi",
    "uber",
    "car",
    "drive",
    "bike",
    "cycling",
    "accessible",
];

/// Count vocabulary keywords across a bucket's anchor descriptions.
///
/// Descriptions are case-folded once per anchor; each keyword scores at most
/// once per anchor. Returns `(keyword, count)` pairs in vocabulary order,
/// with zero-count keywords suppressed.
pub fn keyword_hits(anchors: &[&Anchor], vocabulary: &'static [&'static str]) -> Vec<(&'static str, usize)> {
    let mut counts = vec![0usize; vocabulary.len()];

    for anchor in anchors {
        let description = anchor.description.to_lowercase();
        for (i, keyword) in vocabulary.iter().enumerate() {
            if description.contains(keyword) {
                counts[i] += 1;
            }
        }
    }

    vocabulary
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(keyword, count)| (*keyword, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors_from(descriptions: &[&str]) -> Vec<Anchor> {
        descriptions
            .iter()
            .enumerate()
            .map(|(i, d)| Anchor::new(&format!("Anchor {}", i + 1), d))
            .collect()
    }

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(BUDGET_KEYWORDS.len(), 11);
        assert_eq!(VIBE_KEYWORDS.len(), 12);
        assert_eq!(PRIORITY_KEYWORDS.len(), 24);
        assert_eq!(MOBILITY_KEYWORDS.len(), 15);
    }

    #[test]
    fn test_presence_counts_once_per_anchor() {
        let anchors = anchors_from(&["Pure luxury: luxury rooms, luxury dining."]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        let hits = keyword_hits(&refs, BUDGET_KEYWORDS);
        assert_eq!(hits, vec![("luxury", 1)]);
    }

    #[test]
    fn test_counts_accumulate_across_anchors() {
        let anchors = anchors_from(&[
            "An affordable walking tour.",
            "Affordable bites at a local market.",
            "A premium tasting menu.",
        ]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        let hits = keyword_hits(&refs, BUDGET_KEYWORDS);
        assert_eq!(hits, vec![("affordable", 2), ("premium", 1)]);
    }

    #[test]
    fn test_zero_counts_suppressed() {
        let anchors = anchors_from(&["Nothing relevant here."]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        assert!(keyword_hits(&refs, BUDGET_KEYWORDS).is_empty());
    }

    #[test]
    fn test_case_folding() {
        let anchors = anchors_from(&["EXCLUSIVE Guided access to the vault."]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        let hits = keyword_hits(&refs, BUDGET_KEYWORDS);
        assert_eq!(hits, vec![("guided", 1), ("exclusive", 1)]);
    }

    #[test]
    fn test_substring_overlap_scores_both() {
        // "walking" contains "walk", so one description scores both terms.
        let anchors = anchors_from(&["A walking route along the river."]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        let hits = keyword_hits(&refs, MOBILITY_KEYWORDS);
        assert_eq!(hits, vec![("walking", 1), ("walk", 1)]);
    }

    #[test]
    fn test_results_follow_vocabulary_order() {
        let anchors = anchors_from(&["An exclusive yet cheap and free evening."]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        let hits = keyword_hits(&refs, BUDGET_KEYWORDS);
        let keywords: Vec<&str> = hits.iter().map(|(k, _)| *k).collect();
        assert_eq!(keywords, vec!["free", "cheap", "exclusive"]);
    }

    #[test]
    fn test_empty_bucket() {
        assert!(keyword_hits(&[], VIBE_KEYWORDS).is_empty());
    }
}
