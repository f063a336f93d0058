//! Operations-management report services.
//!
//! Breadcrumb services for the ops dashboards. The response envelopes are
//! the frozen contract consumed downstream; metric computation lands later,
//! so every counter serializes as zero.

// Nothing in the analyzer binary calls these yet.
#![allow(dead_code)]

pub mod engagement;
pub mod reports;
pub mod security;
pub mod trips;
