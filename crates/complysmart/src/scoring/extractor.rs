use super::table::{ComplianceScore, ScoreTable};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `<label>: <actual>% → <standard label>: <target>%`, one line at a time.
static COMPLIANCE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<label>[^:\r\n]+):\s*(?P<actual>[0-9]+(?:\.[0-9]+)?)%\s*→\s*[^:\r\n]+:\s*(?P<target>[0-9]+(?:\.[0-9]+)?)%",
    )
    .expect("compliance line pattern compiles")
});

/// Extract every `label: X% → Standard: Y%` pair from `text`.
///
/// Lines that do not match are skipped. A category seen twice keeps the
/// values of its last occurrence.
pub fn extract_scores(text: &str) -> ScoreTable {
    let mut table = ScoreTable::new();

    for captures in COMPLIANCE_LINE_RE.captures_iter(text) {
        let category = captures["label"].trim();
        if category.is_empty() {
            continue;
        }

        let (Ok(actual), Ok(target)) = (
            captures["actual"].parse::<f64>(),
            captures["target"].parse::<f64>(),
        ) else {
            continue;
        };

        table.insert(category, ComplianceScore::new(actual, target));
    }

    debug!(categories = table.len(), "extracted compliance scores");
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(left: f64, right: f64) {
        assert!(
            (left - right).abs() < 1e-6,
            "expected {right}, found {left}"
        );
    }

    #[test]
    fn extracts_each_matching_line_in_order() {
        let table = extract_scores(
            "KYC Verification Rate: 72% → Standard: 100%\nAML Transaction Monitoring: 85% → Standard: 100%",
        );

        assert_eq!(table.len(), 2);
        let kyc = table.get("KYC Verification Rate").expect("kyc present");
        assert_eq!(kyc.actual, 72.0);
        assert_eq!(kyc.target, 100.0);
        assert_close(kyc.compliance_rate, 72.0);

        let aml = table.get("AML Transaction Monitoring").expect("aml present");
        assert_close(aml.compliance_rate, 85.0);

        let order: Vec<&str> = table.categories().collect();
        assert_eq!(
            order,
            vec!["KYC Verification Rate", "AML Transaction Monitoring"]
        );
    }

    #[test]
    fn rate_is_relative_to_a_non_hundred_target() {
        let table = extract_scores("Loan-to-Value (LTV) Ratio: 65% → Standard: 75%");
        let ltv = table.get("Loan-to-Value (LTV) Ratio").expect("ltv present");
        assert_close(ltv.compliance_rate, 86.666_666_666);
    }

    #[test]
    fn accepts_decimal_percentages() {
        let table = extract_scores("Capital Adequacy Ratio: 12.5% → Threshold: 15%");
        let car = table.get("Capital Adequacy Ratio").expect("car present");
        assert_eq!(car.actual, 12.5);
        assert_close(car.compliance_rate, 83.333_333_333);
    }

    #[test]
    fn zero_target_is_not_an_error() {
        let table = extract_scores("Tax Penalties: 3% → Standard: 0%");
        let penalties = table.get("Tax Penalties").expect("entry present");
        assert_eq!(penalties.compliance_rate, 0.0);
        assert!(penalties.compliance_rate.is_finite());
    }

    #[test]
    fn skips_lines_without_percent_or_arrow() {
        let text = "NPA Rate: 4.8 → Standard: 4\n\
                    Capital Adequacy Ratio: 83% Standard: 100%\n\
                    Disclosure Timeliness: 80% -> Standard: 100%\n\
                    GST Filing Timeliness: 88% → Standard: 100%";
        let table = extract_scores(text);

        assert_eq!(table.len(), 1);
        assert!(table.get("GST Filing Timeliness").is_some());
    }

    #[test]
    fn later_duplicates_win() {
        let text = "KYC Verification Rate: 60% → Standard: 100%\n\
                    KYC Verification Rate: 72% → Standard: 90%";
        let table = extract_scores(text);

        assert_eq!(table.len(), 1);
        let kyc = table.get("KYC Verification Rate").expect("kyc present");
        assert_eq!(kyc.actual, 72.0);
        assert_eq!(kyc.target, 90.0);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(extract_scores("").is_empty());
        assert!(extract_scores("   \n\n").is_empty());
    }

    #[test]
    fn labels_are_trimmed_of_indentation() {
        let text = "\n        TDS Compliance Rate: 92% → Standard: 100%\n        ";
        let table = extract_scores(text);
        assert!(table.get("TDS Compliance Rate").is_some());
    }

    #[test]
    fn malformed_line_does_not_leak_into_next_label() {
        let text = "Summary of findings\nLarge Investor Verification: 50% → Standard: 100%";
        let table = extract_scores(text);
        let categories: Vec<&str> = table.categories().collect();
        assert_eq!(categories, vec!["Large Investor Verification"]);
    }
}
