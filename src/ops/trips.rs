//! Active trip reporting and monitoring.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

/// Counters for currently active trips.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActiveTripMetrics {
    pub total_active_trips: u64,
    pub trips_starting_today: u64,
    pub trips_ending_today: u64,
    pub trips_in_progress: u64,
    pub average_trip_duration: u64,
    pub most_popular_destinations: Vec<String>,
    pub trip_engagement_score: f64,
}

/// Trip counts by lifecycle status.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TripStatusBreakdown {
    pub planning: u64,
    pub confirmed: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub cancelled: u64,
}

/// Envelope for the active trip summary.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveTripSummary {
    pub success: bool,
    pub report_type: &'static str,
    pub generated_at: DateTime<Utc>,
    pub active_trip_metrics: ActiveTripMetrics,
    pub trip_status_breakdown: TripStatusBreakdown,
    pub message: &'static str,
}

/// Trip outcome rates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TripPerformanceMetrics {
    pub trip_completion_rate: f64,
    pub average_planning_time: u64,
    pub user_satisfaction_score: f64,
    pub trip_modification_rate: f64,
    pub itinerary_adherence_rate: f64,
    pub recommendation_usage_rate: f64,
}

/// Qualitative performance findings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformanceInsights {
    pub top_performing_trip_types: Vec<String>,
    pub common_trip_modifications: Vec<String>,
    pub user_feedback_summary: Map<String, Value>,
    pub improvement_opportunities: Vec<String>,
}

/// Envelope for the trip performance analysis.
#[derive(Debug, Clone, Serialize)]
pub struct TripPerformanceAnalysis {
    pub success: bool,
    pub report_type: &'static str,
    pub generated_at: DateTime<Utc>,
    pub performance_metrics: TripPerformanceMetrics,
    pub performance_insights: PerformanceInsights,
    pub message: &'static str,
}

/// Destination demand counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PopularityMetrics {
    pub top_destinations: Vec<String>,
    pub emerging_destinations: Vec<String>,
    pub seasonal_trends: Map<String, Value>,
    pub destination_diversity_score: f64,
    pub international_vs_domestic_ratio: f64,
}

/// Destination movement over the tracked period.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrendAnalysis {
    pub fastest_growing_destinations: Vec<String>,
    pub declining_destinations: Vec<String>,
    pub seasonal_patterns: Map<String, Value>,
    pub travel_preference_insights: Vec<String>,
}

/// Envelope for destination popularity tracking.
#[derive(Debug, Clone, Serialize)]
pub struct DestinationPopularity {
    pub success: bool,
    pub report_type: &'static str,
    pub time_period: String,
    pub generated_at: DateTime<Utc>,
    pub popularity_metrics: PopularityMetrics,
    pub trend_analysis: TrendAnalysis,
    pub message: &'static str,
}

/// Engagement counters for active trips.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TripEngagementMetrics {
    pub average_daily_trip_views: u64,
    pub itinerary_modification_rate: f64,
    pub poi_interest_rate: f64,
    pub trip_sharing_rate: f64,
    pub user_interaction_frequency: f64,
    pub trip_planning_session_duration: u64,
}

/// Behavioral engagement findings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EngagementInsights {
    pub most_engaged_trip_types: Vec<String>,
    pub peak_engagement_times: Vec<String>,
    pub user_behavior_patterns: Map<String, Value>,
    pub engagement_dropoff_points: Vec<String>,
}

/// Envelope for trip engagement monitoring.
#[derive(Debug, Clone, Serialize)]
pub struct TripEngagementMonitoring {
    pub success: bool,
    pub report_type: &'static str,
    pub generated_at: DateTime<Utc>,
    pub engagement_metrics: TripEngagementMetrics,
    pub engagement_insights: EngagementInsights,
    pub recommendations: Vec<&'static str>,
    pub message: &'static str,
}

/// Metric panels pulled from each trip report.
#[derive(Debug, Clone, Serialize)]
pub struct TripDashboardData {
    pub active_trips: ActiveTripMetrics,
    pub performance: TripPerformanceMetrics,
    pub destinations: PopularityMetrics,
    pub engagement: TripEngagementMetrics,
}

/// Envelope for the trip health dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct TripHealthDashboard {
    pub success: bool,
    pub report_type: &'static str,
    pub generated_at: DateTime<Utc>,
    pub dashboard_data: TripDashboardData,
    pub health_score: f64,
    pub alerts: Vec<String>,
    pub recommendations: Vec<&'static str>,
    pub message: &'static str,
}

/// Service for generating active trip reports.
#[derive(Debug, Default)]
pub struct ActiveTripReports;

impl ActiveTripReports {
    pub fn new() -> Self {
        info!("🗺️ Active Trip Reports initialized");
        Self
    }

    /// Generate a summary of all currently active trips.
    pub fn active_trip_summary(&self) -> ActiveTripSummary {
        info!("📊 Generating active trip summary");

        ActiveTripSummary {
            success: true,
            report_type: "active_trip_summary",
            generated_at: Utc::now(),
            active_trip_metrics: ActiveTripMetrics::default(),
            trip_status_breakdown: TripStatusBreakdown::default(),
            message: "Active trip summary generated successfully",
        }
    }

    /// Analyze trip performance metrics.
    pub fn trip_performance_analysis(&self) -> TripPerformanceAnalysis {
        info!("📈 Analyzing trip performance");

        TripPerformanceAnalysis {
            success: true,
            report_type: "trip_performance_analysis",
            generated_at: Utc::now(),
            performance_metrics: TripPerformanceMetrics::default(),
            performance_insights: PerformanceInsights::default(),
            message: "Trip performance analysis completed successfully",
        }
    }

    /// Track destination popularity; `time_period` defaults to monthly.
    pub fn destination_popularity(&self, time_period: Option<&str>) -> DestinationPopularity {
        let time_period = time_period.unwrap_or("monthly");
        info!("🌍 Tracking destination popularity for {} period", time_period);

        DestinationPopularity {
            success: true,
            report_type: "destination_popularity",
            time_period: time_period.to_string(),
            generated_at: Utc::now(),
            popularity_metrics: PopularityMetrics::default(),
            trend_analysis: TrendAnalysis::default(),
            message: "Destination popularity tracking completed successfully",
        }
    }

    /// Monitor user engagement with active trips.
    pub fn trip_engagement_monitoring(&self) -> TripEngagementMonitoring {
        info!("👥 Monitoring trip engagement");

        TripEngagementMonitoring {
            success: true,
            report_type: "trip_engagement_monitoring",
            generated_at: Utc::now(),
            engagement_metrics: TripEngagementMetrics::default(),
            engagement_insights: EngagementInsights::default(),
            recommendations: vec![
                "Optimize trip planning flow for better engagement",
                "Implement push notifications for trip reminders",
            ],
            message: "Trip engagement monitoring completed successfully",
        }
    }

    /// Generate the trip health dashboard by running every trip report and
    /// collecting their metric panels.
    pub fn trip_health_dashboard(&self) -> TripHealthDashboard {
        info!("🏥 Generating trip health dashboard");

        let summary = self.active_trip_summary();
        let performance = self.trip_performance_analysis();
        let destinations = self.destination_popularity(None);
        let engagement = self.trip_engagement_monitoring();

        TripHealthDashboard {
            success: true,
            report_type: "trip_health_dashboard",
            generated_at: Utc::now(),
            dashboard_data: TripDashboardData {
                active_trips: summary.active_trip_metrics,
                performance: performance.performance_metrics,
                destinations: destinations.popularity_metrics,
                engagement: engagement.engagement_metrics,
            },
            health_score: 0.0,
            alerts: Vec::new(),
            recommendations: Vec::new(),
            message: "Trip health dashboard generated successfully",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_trip_summary_envelope() {
        let service = ActiveTripReports::new();
        let summary = service.active_trip_summary();

        assert!(summary.success);
        assert_eq!(summary.report_type, "active_trip_summary");
        assert_eq!(summary.active_trip_metrics.total_active_trips, 0);
        assert_eq!(summary.trip_status_breakdown.planning, 0);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["active_trip_metrics"]["trips_in_progress"], 0);
        assert_eq!(json["trip_status_breakdown"]["cancelled"], 0);
        assert!(json["active_trip_metrics"]["most_popular_destinations"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_trip_performance_envelope() {
        let service = ActiveTripReports::new();
        let analysis = service.trip_performance_analysis();

        assert!(analysis.success);
        assert_eq!(analysis.report_type, "trip_performance_analysis");
        assert_eq!(analysis.performance_metrics.trip_completion_rate, 0.0);

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["performance_metrics"]["average_planning_time"], 0);
        assert!(json["performance_insights"]["user_feedback_summary"]
            .as_object()
            .unwrap()
            .is_empty());
        assert_eq!(
            json["message"],
            "Trip performance analysis completed successfully"
        );
    }

    #[test]
    fn test_destination_popularity_period_defaults_to_monthly() {
        let service = ActiveTripReports::new();

        let report = service.destination_popularity(None);
        assert_eq!(report.report_type, "destination_popularity");
        assert_eq!(report.time_period, "monthly");

        let weekly = service.destination_popularity(Some("weekly"));
        let json = serde_json::to_value(&weekly).unwrap();
        assert_eq!(json["time_period"], "weekly");
        assert_eq!(json["popularity_metrics"]["destination_diversity_score"], 0.0);
        assert!(json["trend_analysis"]["seasonal_patterns"]
            .as_object()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_trip_engagement_envelope() {
        let service = ActiveTripReports::new();
        let report = service.trip_engagement_monitoring();

        assert!(report.success);
        assert_eq!(report.report_type, "trip_engagement_monitoring");
        assert_eq!(report.recommendations.len(), 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["engagement_metrics"]["average_daily_trip_views"], 0);
        assert_eq!(
            json["recommendations"][0],
            "Optimize trip planning flow for better engagement"
        );
    }

    #[test]
    fn test_health_dashboard_collects_every_panel() {
        let service = ActiveTripReports::new();
        let dashboard = service.trip_health_dashboard();

        assert!(dashboard.success);
        assert_eq!(dashboard.report_type, "trip_health_dashboard");
        assert_eq!(dashboard.health_score, 0.0);

        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(
            json["dashboard_data"]["active_trips"]["total_active_trips"],
            0
        );
        assert_eq!(
            json["dashboard_data"]["performance"]["trip_completion_rate"],
            0.0
        );
        assert!(json["dashboard_data"]["destinations"]["top_destinations"]
            .as_array()
            .unwrap()
            .is_empty());
        assert_eq!(json["dashboard_data"]["engagement"]["poi_interest_rate"], 0.0);
        assert!(json["alerts"].as_array().unwrap().is_empty());
        assert!(json["recommendations"].as_array().unwrap().is_empty());
    }
}
