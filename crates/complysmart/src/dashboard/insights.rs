use super::baseline::remediation_steps;
use super::views::{DashboardInsights, RecommendationView};
use crate::scoring::{ComplianceScore, OverallScore, RiskBand, ScoreTable};
use std::cmp::Ordering;

/// Minimum number of categories promoted to priority actions.
const PRIORITY_SLOTS: usize = 2;

pub(crate) fn generate_insights(overall: &OverallScore, table: &ScoreTable) -> DashboardInsights {
    let categories_total = table.len();
    let categories_at_target = table
        .iter()
        .filter(|(_, score)| score.meets_target())
        .count();
    let average_rate = table.average_rate();

    let mut attention: Vec<(&str, &ComplianceScore)> = table
        .iter()
        .filter(|(_, score)| score.band() != RiskBand::Low)
        .collect();
    attention.sort_by(|a, b| {
        a.1.compliance_rate
            .partial_cmp(&b.1.compliance_rate)
            .unwrap_or(Ordering::Equal)
    });

    let focus = table.iter().min_by(|a, b| {
        a.1.compliance_rate
            .partial_cmp(&b.1.compliance_rate)
            .unwrap_or(Ordering::Equal)
    });

    let high_risk = attention
        .iter()
        .filter(|(_, score)| score.band() == RiskBand::High)
        .count();
    let priority_count = high_risk.max(PRIORITY_SLOTS).min(attention.len());
    let (priority, secondary) = attention.split_at(priority_count);

    let mut observations = Vec::new();
    if overall.is_fallback() {
        observations.push(format!(
            "Audit did not report an overall score; showing default of {}",
            overall.value
        ));
    }

    if categories_total > 0 {
        observations.push(format!(
            "{} of {} categories meet their standard",
            categories_at_target, categories_total
        ));
    }

    if let Some(average) = average_rate {
        observations.push(format!("Average compliance rate is {average:.1}%"));
    }

    if let Some((category, score)) = focus {
        if score.band() != RiskBand::Low {
            observations.push(format!(
                "{} is furthest from standard at {:.1}% of target",
                category, score.compliance_rate
            ));
        }
    }

    if attention.is_empty() && categories_total > 0 {
        observations.push("All categories are within the low-risk band".to_string());
    }

    DashboardInsights {
        focus_category: focus.map(|(category, _)| category.to_string()),
        focus_rate: focus.map(|(_, score)| score.compliance_rate),
        average_rate,
        categories_at_target,
        categories_total,
        observations,
        priority_actions: priority.iter().map(recommendation).collect(),
        secondary_actions: secondary.iter().map(recommendation).collect(),
    }
}

fn recommendation(entry: &(&str, &ComplianceScore)) -> RecommendationView {
    let (category, score) = *entry;
    RecommendationView {
        category: category.to_string(),
        summary: format!(
            "Improve {} (current {}% vs standard {}%)",
            category, score.actual, score.target
        ),
        steps: remediation_steps(category).to_vec(),
    }
}
