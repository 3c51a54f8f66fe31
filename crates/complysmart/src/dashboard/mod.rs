//! Dashboard assembly: overall gauge, regulator breakdown, category charts,
//! risk areas, and recommendations derived from the score table.

mod baseline;
mod insights;
pub mod views;

pub use baseline::{
    regulator_baseline, regulator_baselines, remediation_steps, RegulatorBaseline,
    RegulatoryBody, COMPLIANCE_SUMMARY,
};
pub use views::{
    CategoryView, DashboardInsights, DashboardView, GaugeStep, OverallScoreView,
    RecommendationView, RegulatorView, RiskAreaEntry, RiskAreaView,
};

use crate::audit::AuditSnapshot;
use crate::scoring::{extract_scores, parse_overall_score, OverallScore, RiskBand, ScoreTable};
use chrono::{DateTime, Utc};

impl DashboardView {
    /// Dashboard for an audit, scored against the built-in compliance summary.
    pub fn build(snapshot: &AuditSnapshot) -> Self {
        let overall = parse_overall_score(snapshot.score_text());
        let table = extract_scores(COMPLIANCE_SUMMARY);
        Self::from_parts(overall, &table, snapshot.received_at)
    }

    pub fn from_parts(
        overall: OverallScore,
        table: &ScoreTable,
        audit_received_at: DateTime<Utc>,
    ) -> Self {
        let overall_band = overall.band();
        let overall_view = OverallScoreView {
            score: overall.value,
            source: overall.source,
            source_label: overall.source.label(),
            band: overall_band,
            band_label: overall_band.label(),
            color: overall_band.color(),
        };

        let gauge_steps = RiskBand::ordered()
            .into_iter()
            .map(|band| {
                let (lower, upper) = band.range();
                GaugeStep {
                    band,
                    lower,
                    upper,
                    color: band.color(),
                }
            })
            .collect();

        let regulators = regulator_baselines()
            .into_iter()
            .map(|baseline| {
                let band = RiskBand::for_rate(f64::from(baseline.score));
                RegulatorView {
                    body: baseline.body,
                    label: baseline.body.label(),
                    score: baseline.score,
                    band,
                    band_label: band.label(),
                    findings: baseline.findings.to_vec(),
                }
            })
            .collect();

        let categories = table
            .iter()
            .map(|(category, score)| {
                let band = score.band();
                CategoryView {
                    category: category.to_string(),
                    actual: score.actual,
                    target: score.target,
                    compliance_rate: score.compliance_rate,
                    band,
                    band_label: band.label(),
                    color: band.color(),
                    meets_target: score.meets_target(),
                }
            })
            .collect();

        let risk_areas = RiskBand::ordered()
            .into_iter()
            .map(|band| RiskAreaView {
                band,
                band_label: band.label(),
                categories: table
                    .iter()
                    .filter(|(_, score)| score.band() == band)
                    .map(|(category, score)| RiskAreaEntry {
                        category: category.to_string(),
                        actual: score.actual,
                        compliance_rate: score.compliance_rate,
                    })
                    .collect(),
            })
            .collect();

        Self {
            audit_received_at,
            overall: overall_view,
            gauge_steps,
            regulators,
            categories,
            ranked_rates: table.ranked_by_rate(),
            risk_areas,
            insights: insights::generate_insights(&overall, table),
        }
    }
}
