//! General operational reports: user engagement, trip activity, conversion,
//! and the combined management dashboard.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

/// User engagement counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserEngagementMetrics {
    pub total_users: u64,
    pub active_users: u64,
    pub new_signups: u64,
    pub profile_completion_rate: f64,
    pub trip_creation_rate: f64,
    pub engagement_score: f64,
}

/// Envelope for the user engagement report.
#[derive(Debug, Clone, Serialize)]
pub struct UserEngagementReport {
    pub success: bool,
    pub report_type: &'static str,
    pub generated_at: DateTime<Utc>,
    pub metrics: UserEngagementMetrics,
    pub message: &'static str,
}

/// Trip activity counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TripActivityMetrics {
    pub total_trips: u64,
    pub active_trips: u64,
    pub completed_trips: u64,
    pub trip_creation_rate: f64,
    pub average_trip_duration: u64,
    pub popular_destinations: Vec<String>,
}

/// Envelope for the trip activity report.
#[derive(Debug, Clone, Serialize)]
pub struct TripActivityReport {
    pub success: bool,
    pub report_type: &'static str,
    pub generated_at: DateTime<Utc>,
    pub metrics: TripActivityMetrics,
    pub message: &'static str,
}

/// Conversion funnel rates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionMetrics {
    pub signup_to_profile: f64,
    pub profile_to_trip: f64,
    pub trip_to_completion: f64,
    pub overall_conversion: f64,
    pub funnel_dropoff_points: Vec<String>,
}

/// Envelope for the conversion metrics report.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub success: bool,
    pub report_type: &'static str,
    pub generated_at: DateTime<Utc>,
    pub metrics: ConversionMetrics,
    pub message: &'static str,
}

/// Dashboard panels. Each panel is an open map until its source report
/// computes real numbers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardData {
    pub user_metrics: Map<String, Value>,
    pub trip_metrics: Map<String, Value>,
    pub conversion_metrics: Map<String, Value>,
    pub engagement_metrics: Map<String, Value>,
    pub revenue_metrics: Map<String, Value>,
    pub alerts: Vec<String>,
}

/// Envelope for the management dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct ManagementDashboard {
    pub success: bool,
    pub report_type: &'static str,
    pub generated_at: DateTime<Utc>,
    pub dashboard_data: DashboardData,
    pub message: &'static str,
}

/// Service for generating operational reports.
#[derive(Debug, Default)]
pub struct ReportsService;

impl ReportsService {
    pub fn new() -> Self {
        info!("📊 Reports Service initialized");
        Self
    }

    /// Generate the user engagement report.
    pub fn user_engagement_report(&self) -> UserEngagementReport {
        info!("📈 Generating user engagement report");

        UserEngagementReport {
            success: true,
            report_type: "user_engagement",
            generated_at: Utc::now(),
            metrics: UserEngagementMetrics::default(),
            message: "User engagement report generated successfully",
        }
    }

    /// Generate the trip activity report.
    pub fn trip_activity_report(&self) -> TripActivityReport {
        info!("🗺️ Generating trip activity report");

        TripActivityReport {
            success: true,
            report_type: "trip_activity",
            generated_at: Utc::now(),
            metrics: TripActivityMetrics::default(),
            message: "Trip activity report generated successfully",
        }
    }

    /// Generate the conversion funnel metrics.
    pub fn conversion_metrics(&self) -> ConversionReport {
        info!("📊 Generating conversion metrics");

        ConversionReport {
            success: true,
            report_type: "conversion_metrics",
            generated_at: Utc::now(),
            metrics: ConversionMetrics::default(),
            message: "Conversion metrics generated successfully",
        }
    }

    /// Generate the combined management dashboard data.
    pub fn management_dashboard_data(&self) -> ManagementDashboard {
        info!("🎯 Generating management dashboard data");

        ManagementDashboard {
            success: true,
            report_type: "management_dashboard",
            generated_at: Utc::now(),
            dashboard_data: DashboardData::default(),
            message: "Management dashboard data generated successfully",
        }
    }
}
