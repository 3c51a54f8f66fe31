use super::baseline::RegulatoryBody;
use crate::scoring::{RankedRate, RiskBand, ScoreSource};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct OverallScoreView {
    pub score: u32,
    pub source: ScoreSource,
    pub source_label: &'static str,
    pub band: RiskBand,
    pub band_label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GaugeStep {
    pub band: RiskBand,
    pub lower: f64,
    pub upper: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegulatorView {
    pub body: RegulatoryBody,
    pub label: &'static str,
    pub score: u32,
    pub band: RiskBand,
    pub band_label: &'static str,
    pub findings: Vec<&'static str>,
}

/// Radar-chart point: actual against target for one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub category: String,
    pub actual: f64,
    pub target: f64,
    pub compliance_rate: f64,
    pub band: RiskBand,
    pub band_label: &'static str,
    pub color: &'static str,
    pub meets_target: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAreaEntry {
    pub category: String,
    pub actual: f64,
    pub compliance_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAreaView {
    pub band: RiskBand,
    pub band_label: &'static str,
    pub categories: Vec<RiskAreaEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub category: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<&'static str>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardInsights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rate: Option<f64>,
    pub categories_at_target: usize,
    pub categories_total: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priority_actions: Vec<RecommendationView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_actions: Vec<RecommendationView>,
}

/// Everything the dashboard page plots, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub audit_received_at: DateTime<Utc>,
    pub overall: OverallScoreView,
    pub gauge_steps: Vec<GaugeStep>,
    pub regulators: Vec<RegulatorView>,
    pub categories: Vec<CategoryView>,
    pub ranked_rates: Vec<RankedRate>,
    pub risk_areas: Vec<RiskAreaView>,
    pub insights: DashboardInsights,
}
