//! Diversity and title-pattern statistics.
//!
//! Computes how varied the suggested anchors are: the unique-title ratio
//! across all successful runs, and the most frequent words appearing in
//! anchor titles.

use crate::models::Anchor;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Title uniqueness across the flat anchor list.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleDiversity {
    /// Total titles, duplicates included.
    pub total: usize,
    /// Distinct title strings (exact comparison, no case folding).
    pub unique: usize,
}

impl TitleDiversity {
    /// Measure diversity over a flat anchor list.
    pub fn from_anchors(anchors: &[&Anchor]) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        for anchor in anchors {
            seen.insert(anchor.title.as_str());
        }
        Self {
            total: anchors.len(),
            unique: seen.len(),
        }
    }

    /// Uniqueness as a percentage; 0.0 when there are no anchors at all.
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.unique as f64 / self.total as f64 * 100.0
    }
}

/// The most frequent words across all anchor titles.
///
/// Titles are case-folded and tokenized on word boundaries; the top `limit`
/// tokens are ranked by raw frequency with ties kept in first-seen order.
/// Short tokens compete for ranking slots here; the report suppresses them
/// only at print time.
pub fn top_title_words(anchors: &[&Anchor], limit: usize) -> Vec<(String, usize)> {
    let word_re = Regex::new(r"\b\w+\b").expect("valid regex");

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for anchor in anchors {
        let title = anchor.title.to_lowercase();
        for token in word_re.find_iter(&title) {
            let word = token.as_str();
            if !counts.contains_key(word) {
                first_seen.push(word.to_string());
            }
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|word| {
            let count = counts.get(&word).copied().unwrap_or(0);
            (word, count)
        })
        .collect();

    // Stable sort: equal counts stay in first-seen order.
    ranked.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors_titled(titles: &[&str]) -> Vec<Anchor> {
        titles.iter().map(|t| Anchor::new(t, "")).collect()
    }

    #[test]
    fn test_diversity_counts_duplicates() {
        let anchors = anchors_titled(&["A", "B", "A"]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        let diversity = TitleDiversity::from_anchors(&refs);
        assert_eq!(diversity.total, 3);
        assert_eq!(diversity.unique, 2);
        assert!((diversity.rate() - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_diversity_empty_is_guarded() {
        let diversity = TitleDiversity::from_anchors(&[]);
        assert_eq!(diversity.total, 0);
        assert_eq!(diversity.rate(), 0.0);
    }

    #[test]
    fn test_top_words_ranked_by_frequency() {
        let anchors = anchors_titled(&[
            "Louvre Museum Tour",
            "Museum of Modern Art",
            "Orsay Museum Evening",
            "Evening Seine Cruise",
        ]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        let words = top_title_words(&refs, 3);
        assert_eq!(words[0], ("museum".to_string(), 3));
        assert_eq!(words[1], ("evening".to_string(), 2));
    }

    #[test]
    fn test_top_words_case_folds_and_tokenizes() {
        let anchors = anchors_titled(&["Seine-Side Picnic!", "picnic at the SEINE"]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        let words = top_title_words(&refs, 10);
        assert!(words.contains(&("seine".to_string(), 2)));
        assert!(words.contains(&("picnic".to_string(), 2)));
    }

    #[test]
    fn test_top_words_ties_keep_first_seen_order() {
        let anchors = anchors_titled(&["alpha beta", "beta alpha"]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        let words = top_title_words(&refs, 2);
        assert_eq!(words[0].0, "alpha");
        assert_eq!(words[1].0, "beta");
    }

    #[test]
    fn test_short_words_still_compete_for_slots() {
        // "de" outranks everything; it must hold a slot even though the
        // report later hides it.
        let anchors = anchors_titled(&[
            "Arc de Triomphe",
            "Place de la Concorde",
            "Pont de Bir-Hakeim",
        ]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        let words = top_title_words(&refs, 2);
        assert_eq!(words[0], ("de".to_string(), 3));
    }

    #[test]
    fn test_limit_truncates() {
        let anchors = anchors_titled(&["one two three four five"]);
        let refs: Vec<&Anchor> = anchors.iter().collect();

        assert_eq!(top_title_words(&refs, 2).len(), 2);
        assert!(top_title_words(&refs, 0).is_empty());
    }
}
