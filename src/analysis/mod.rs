//! Anchor pattern analysis.
//!
//! Aggregation of anchors into facet buckets, keyword scoring against the
//! fixed vocabularies, and diversity statistics over titles.

pub mod aggregator;
pub mod keywords;
pub mod stats;

pub use aggregator::*;
pub use keywords::*;
pub use stats::*;
