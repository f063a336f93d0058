//! Data models for the test-result analyzer.
//!
//! This module contains the wire types for Angela test-run records as the
//! comprehensive test suite persists them, plus the budget tier used to
//! group anchors during analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse budget tier an anchor is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BudgetTier {
    /// Shoestring budgets ($30-50/day range).
    Budget,
    /// Top-end budgets ($800-1200/day range).
    Luxury,
    /// Comfortable middle ($200-350/day range).
    MidRange,
    /// Anything that names none of the known ranges.
    Other,
}

/// All tiers in report order.
pub const ALL_TIERS: [BudgetTier; 4] = [
    BudgetTier::Budget,
    BudgetTier::Luxury,
    BudgetTier::MidRange,
    BudgetTier::Other,
];

impl BudgetTier {
    /// Classify a free-text budget label into a tier.
    ///
    /// The three range markers are tested in a fixed order and the first
    /// match wins; labels naming none of them land in `Other`.
    pub fn classify(budget: &str) -> Self {
        if budget.contains("$30-50") {
            BudgetTier::Budget
        } else if budget.contains("$800-1200") {
            BudgetTier::Luxury
        } else if budget.contains("$200-350") {
            BudgetTier::MidRange
        } else {
            BudgetTier::Other
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetTier::Budget => write!(f, "budget"),
            BudgetTier::Luxury => write!(f, "luxury"),
            BudgetTier::MidRange => write!(f, "mid-range"),
            BudgetTier::Other => write!(f, "other"),
        }
    }
}

/// One evaluation run from the comprehensive test suite.
///
/// Failed runs carry `error` instead of `outputAnchors`; everything except
/// the profile name tolerates absence so that partially-written records
/// still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    /// Ordinal assigned by the test suite.
    pub test_number: Option<u32>,
    /// Human-readable profile identifier (e.g. "Paris Budget Backpacker").
    #[serde(default)]
    pub profile_name: String,
    /// Whether the suggestion call succeeded.
    #[serde(default)]
    pub success: bool,
    /// Error message, present only on failed runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The traveler inputs the run was driven by.
    #[serde(default)]
    pub input_data: InputData,
    /// Suggested anchors, present only on successful runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_anchors: Option<Vec<Anchor>>,
    /// When the suite recorded the run.
    pub timestamp: Option<String>,
}

impl TestRecord {
    /// The run's anchors, or an empty slice for failed/anchorless runs.
    pub fn anchors(&self) -> &[Anchor] {
        self.output_anchors.as_deref().unwrap_or(&[])
    }

    /// The failure message, with the suite's fallback wording.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }
}

/// Traveler inputs captured alongside each run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputData {
    /// The intent facets the analysis groups by.
    #[serde(default)]
    pub trip_intent_data: TripIntent,
}

/// The traveler's trip intent: the categorical facets driving suggestions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripIntent {
    /// Free-text daily budget label (e.g. "$200-350/day").
    #[serde(default)]
    pub budget: String,
    /// Vibe tags (e.g. "Romantic & Intimate").
    #[serde(default)]
    pub vibes: Vec<String>,
    /// Priority tags (e.g. "Culture & History").
    #[serde(default)]
    pub priorities: Vec<String>,
    /// Mobility tags (e.g. "Love walking everywhere").
    #[serde(default)]
    pub mobility: Vec<String>,
    /// Travel pace tags; recorded but not a grouping facet.
    #[serde(default)]
    pub travel_pace: Vec<String>,
}

impl TripIntent {
    /// True when every facet is unset, as for records persisted without
    /// `tripIntentData`. Such records still analyze: their anchors classify
    /// into the `other` budget tier and touch no tag buckets.
    pub fn is_blank(&self) -> bool {
        self.budget.is_empty()
            && self.vibes.is_empty()
            && self.priorities.is_empty()
            && self.mobility.is_empty()
            && self.travel_pace.is_empty()
    }
}

/// A single suggested anchor experience.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anchor {
    /// Short name of the experience; may repeat across runs.
    #[serde(default)]
    pub title: String,
    /// Free-text pitch; this is what keyword scoring scans.
    #[serde(default)]
    pub description: String,
    /// Where the experience takes place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Whether the suggestion is a full-day excursion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_day_trip: Option<bool>,
    /// How the anchor shapes the rest of the day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_follow_on: Option<String>,
}

impl Anchor {
    /// Creates a bare anchor; handy for building fixtures.
    #[allow(dead_code)] // Constructor used by tests across modules
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            location: None,
            is_day_trip: None,
            suggested_follow_on: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_ranges() {
        assert_eq!(BudgetTier::classify("$30-50/day"), BudgetTier::Budget);
        assert_eq!(BudgetTier::classify("$800-1200/day"), BudgetTier::Luxury);
        assert_eq!(
            BudgetTier::classify("$200-350 per day"),
            BudgetTier::MidRange
        );
        assert_eq!(BudgetTier::classify("$150-250/day"), BudgetTier::Other);
        assert_eq!(BudgetTier::classify(""), BudgetTier::Other);
    }

    #[test]
    fn test_classify_first_match_wins() {
        // A contrived label naming two ranges classifies by check order,
        // never by the later match.
        assert_eq!(
            BudgetTier::classify("$30-50 or splurge $800-1200"),
            BudgetTier::Budget
        );
        assert_eq!(
            BudgetTier::classify("$800-1200 down from $200-350"),
            BudgetTier::Luxury
        );
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(BudgetTier::Budget.to_string(), "budget");
        assert_eq!(BudgetTier::Luxury.to_string(), "luxury");
        assert_eq!(BudgetTier::MidRange.to_string(), "mid-range");
        assert_eq!(BudgetTier::Other.to_string(), "other");
    }

    #[test]
    fn test_parse_successful_record() {
        let json = r#"{
            "testNumber": 1,
            "profileName": "Paris Budget Backpacker",
            "inputData": {
                "tripData": { "city": "Paris", "season": "Spring" },
                "tripIntentData": {
                    "priorities": ["Culture & History"],
                    "vibes": ["Authentic & Local"],
                    "mobility": ["Love walking everywhere"],
                    "travelPace": ["Slow & Relaxed - Take your time"],
                    "budget": "$30-50/day"
                }
            },
            "outputAnchors": [
                {
                    "title": "Seine Walk",
                    "description": "A chill, affordable stroll.",
                    "location": "Left Bank",
                    "isDayTrip": false,
                    "suggestedFollowOn": "Picnic nearby"
                }
            ],
            "timestamp": "2025-08-14T12:00:00.000Z",
            "success": true
        }"#;

        let record: TestRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.profile_name, "Paris Budget Backpacker");
        assert!(record.success);
        assert_eq!(record.input_data.trip_intent_data.budget, "$30-50/day");
        assert_eq!(record.anchors().len(), 1);
        assert_eq!(record.anchors()[0].title, "Seine Walk");
        assert_eq!(record.anchors()[0].location.as_deref(), Some("Left Bank"));
    }

    #[test]
    fn test_parse_failed_record_without_input() {
        // Failed runs may be missing everything but the identifying fields.
        let json = r#"{
            "profileName": "Paris Luxury Romantic",
            "error": "Failed to generate anchor suggestions",
            "success": false
        }"#;

        let record: TestRecord = serde_json::from_str(json).unwrap();
        assert!(!record.success);
        assert_eq!(
            record.error_message(),
            "Failed to generate anchor suggestions"
        );
        assert!(record.anchors().is_empty());
        assert!(record.input_data.trip_intent_data.is_blank());
    }

    #[test]
    fn test_blank_intent_detection() {
        assert!(TripIntent::default().is_blank());

        let with_budget = TripIntent {
            budget: "$30-50/day".to_string(),
            ..TripIntent::default()
        };
        assert!(!with_budget.is_blank());

        let with_pace = TripIntent {
            travel_pace: vec!["Slow mornings".to_string()],
            ..TripIntent::default()
        };
        assert!(!with_pace.is_blank());
    }

    #[test]
    fn test_error_message_fallback() {
        let json = r#"{ "profileName": "p", "success": false }"#;
        let record: TestRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.error_message(), "Unknown error");
    }
}
