use complysmart::audit::SUGGESTED_QUESTIONS;
use complysmart::dashboard::DashboardView;
use complysmart::scoring::ScoreTable;

pub(crate) fn render_dashboard(dashboard: &DashboardView) {
    let overall = &dashboard.overall;

    println!("Compliance Audit Dashboard");
    println!("Audit received {}", dashboard.audit_received_at.format("%Y-%m-%d %H:%M UTC"));
    println!(
        "\nOverall compliance score: {} ({}, {})",
        overall.score, overall.band_label, overall.source_label
    );

    println!("\nCompliance by regulatory body");
    for regulator in &dashboard.regulators {
        println!(
            "- {}: {} ({})",
            regulator.label, regulator.score, regulator.band_label
        );
        for finding in &regulator.findings {
            println!("    * {finding}");
        }
    }

    println!("\nKey metrics (actual vs standard)");
    for category in &dashboard.categories {
        println!(
            "- {}: {}% vs {}% -> {:.1}% of target",
            category.category, category.actual, category.target, category.compliance_rate
        );
    }

    println!("\nCompliance rate by category");
    for entry in &dashboard.ranked_rates {
        println!(
            "- {:<40} {:>6.1}%  {}",
            entry.category,
            entry.compliance_rate,
            entry.band.label()
        );
    }

    println!("\nRisk areas");
    for area in &dashboard.risk_areas {
        if area.categories.is_empty() {
            println!("- {}: none", area.band_label);
            continue;
        }
        let names: Vec<String> = area
            .categories
            .iter()
            .map(|entry| format!("{} ({}%)", entry.category, entry.actual))
            .collect();
        println!("- {}: {}", area.band_label, names.join(", "));
    }

    let insights = &dashboard.insights;
    if !insights.observations.is_empty() {
        println!("\nObservations");
        for line in &insights.observations {
            println!("- {line}");
        }
    }

    if !insights.priority_actions.is_empty() {
        println!("\nPriority actions");
        for action in &insights.priority_actions {
            println!("- {}", action.summary);
            for step in &action.steps {
                println!("    * {step}");
            }
        }
    }

    if !insights.secondary_actions.is_empty() {
        println!("\nSecondary actions");
        for action in &insights.secondary_actions {
            println!("- {}", action.summary);
            for step in &action.steps {
                println!("    * {step}");
            }
        }
    }
}

pub(crate) fn render_scores(table: &ScoreTable) {
    if table.is_empty() {
        println!("No compliance lines found");
        return;
    }

    println!("Compliance scores");
    for (category, score) in table.iter() {
        println!(
            "- {}: {}% vs {}% -> {:.2}% ({})",
            category,
            score.actual,
            score.target,
            score.compliance_rate,
            score.band().label()
        );
    }

    if let Some(average) = table.average_rate() {
        println!("\nAverage compliance rate: {average:.2}%");
    }
}

pub(crate) fn render_suggestions() {
    println!("Suggested questions");
    for (index, question) in SUGGESTED_QUESTIONS.iter().enumerate() {
        println!("{index}. {question}");
    }
}

pub(crate) fn render_answer(question: &str, answer: &str) {
    println!("Question: {question}");
    println!("\nAnswer\n{answer}");
}
