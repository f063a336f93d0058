//! Anchor aggregation across test records.
//!
//! This module groups the anchors of successful runs by each input facet
//! (budget tier, vibe, priority, mobility) and tallies run outcomes. Buckets
//! hold shared borrows of the loaded records; nothing is copied or mutated.

use crate::models::{Anchor, BudgetTier, TestRecord};
use std::collections::HashMap;
use tracing::debug;

/// Anchors grouped by every input facet, plus the flat list used for
/// diversity statistics.
///
/// An anchor lands in exactly one budget bucket and fans out into one bucket
/// per vibe/priority/mobility tag on its record. Failed runs and runs
/// without anchors contribute nothing here.
#[derive(Debug, Default)]
pub struct AnchorPatterns<'a> {
    /// Every anchor from every successful run, in record order.
    pub all_anchors: Vec<&'a Anchor>,
    /// Anchors keyed by the record's classified budget tier.
    pub by_budget: HashMap<BudgetTier, Vec<&'a Anchor>>,
    /// Anchors keyed by each vibe tag on their record.
    pub by_vibe: HashMap<String, Vec<&'a Anchor>>,
    /// Anchors keyed by each priority tag on their record.
    pub by_priority: HashMap<String, Vec<&'a Anchor>>,
    /// Anchors keyed by each mobility tag on their record.
    pub by_mobility: HashMap<String, Vec<&'a Anchor>>,
}

/// Run outcome tallies across the whole result set.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// Total records in the file, failed runs included.
    pub total: usize,
    /// Records with `success == true`.
    pub succeeded: usize,
    /// Everything else.
    pub failed: usize,
}

impl RunSummary {
    /// Tally outcomes for a result set.
    pub fn from_records(records: &[TestRecord]) -> Self {
        let total = records.len();
        let succeeded = records.iter().filter(|r| r.success).count();
        Self {
            total,
            succeeded,
            failed: total - succeeded,
        }
    }

    /// Success rate as a percentage; 0.0 for an empty set.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.succeeded as f64 / self.total as f64 * 100.0
    }
}

/// Group every successful run's anchors by each input facet.
///
/// Budget is classified once per record (first matching range wins); the
/// tag facets fan out, appending the anchor once per tag occurrence.
pub fn aggregate_patterns(records: &[TestRecord]) -> AnchorPatterns<'_> {
    let mut patterns = AnchorPatterns::default();

    for record in records {
        if !record.success {
            continue;
        }

        let intent = &record.input_data.trip_intent_data;
        if intent.is_blank() {
            debug!("Record '{}' has no trip intent data", record.profile_name);
        }
        let tier = BudgetTier::classify(&intent.budget);

        for anchor in record.anchors() {
            patterns.all_anchors.push(anchor);
            patterns.by_budget.entry(tier).or_default().push(anchor);

            for vibe in &intent.vibes {
                patterns.by_vibe.entry(vibe.clone()).or_default().push(anchor);
            }
            for priority in &intent.priorities {
                patterns
                    .by_priority
                    .entry(priority.clone())
                    .or_default()
                    .push(anchor);
            }
            for mobility in &intent.mobility {
                patterns
                    .by_mobility
                    .entry(mobility.clone())
                    .or_default()
                    .push(anchor);
            }
        }
    }

    patterns
}

/// Bucket entries sorted by key, for deterministic report order.
pub fn sorted_buckets<'a, 'b>(
    buckets: &'b HashMap<String, Vec<&'a Anchor>>,
) -> Vec<(&'b str, &'b [&'a Anchor])> {
    let mut entries: Vec<_> = buckets
        .iter()
        .map(|(key, anchors)| (key.as_str(), anchors.as_slice()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
