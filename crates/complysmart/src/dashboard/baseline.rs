use serde::Serialize;

/// Category summary rendered on every dashboard.
pub const COMPLIANCE_SUMMARY: &str = "
        KYC Verification Rate: 72% → Standard: 100%
        AML Transaction Monitoring: 85% → Standard: 100%
        Credit Information Reporting: 75% → Standard: 100%
        Loan-to-Value (LTV) Ratio: 65% → Standard: 75%
        NPA (Non-Performing Assets): 83% → Standard: 100%
        AIF Due Diligence: 65% → Standard: 100%
        Financial Disclosure Timeliness: 80% → Standard: 100%
        Large Investor Verification: 50% → Standard: 100%
        Capital Adequacy Ratio: 83% → Standard: 100%
        GST Filing Timeliness: 88% → Standard: 100%
        TDS Compliance Rate: 92% → Standard: 100%
        ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulatoryBody {
    Rbi,
    Sebi,
    IncomeTax,
    Gst,
}

impl RegulatoryBody {
    pub const fn ordered() -> [Self; 4] {
        [Self::Rbi, Self::Sebi, Self::IncomeTax, Self::Gst]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rbi => "RBI",
            Self::Sebi => "SEBI",
            Self::IncomeTax => "Income Tax",
            Self::Gst => "GST",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RegulatorBaseline {
    pub body: RegulatoryBody,
    pub score: u32,
    pub findings: &'static [&'static str],
}

pub fn regulator_baseline(body: RegulatoryBody) -> RegulatorBaseline {
    match body {
        RegulatoryBody::Rbi => RegulatorBaseline {
            body,
            score: 78,
            findings: &[
                "KYC Verification Rate below standard (72% vs 100%)",
                "AML Transaction Monitoring needs improvement (85% vs 100%)",
                "NPA slightly above threshold (4.8% vs 4%)",
                "Loan-to-Value ratio within acceptable range (65% vs ≤75%)",
            ],
        },
        RegulatoryBody::Sebi => RegulatorBaseline {
            body,
            score: 68,
            findings: &[
                "AIF Due Diligence below standard (65% vs 100%)",
                "Large Investor Verification significantly below requirement (50% vs 100%)",
                "Capital Adequacy Ratio below threshold (12.5% vs ≥15%)",
                "Financial Disclosure delayed by 20 days (standard: on-time)",
            ],
        },
        RegulatoryBody::IncomeTax => RegulatorBaseline {
            body,
            score: 85,
            findings: &[
                "TDS Compliance Rate near standard (92% vs 100%)",
                "Tax Payment Delays of 15-20 days (standard: no delays)",
                "Tax Penalties of ₹3.2 lakh in the last year (standard: no fines)",
            ],
        },
        RegulatoryBody::Gst => RegulatorBaseline {
            body,
            score: 88,
            findings: &["GST Filing mostly on time (88% vs 100%)"],
        },
    }
}

pub fn regulator_baselines() -> Vec<RegulatorBaseline> {
    RegulatoryBody::ordered()
        .into_iter()
        .map(regulator_baseline)
        .collect()
}

/// Remediation steps for categories that have a known playbook.
pub fn remediation_steps(category: &str) -> &'static [&'static str] {
    match category {
        "Large Investor Verification" => &[
            "Implement automated verification systems",
            "Create dedicated team for large investor due diligence",
            "Conduct quarterly verification audits",
        ],
        "AIF Due Diligence" => &[
            "Update due diligence protocols to align with latest SEBI requirements",
            "Implement regular training for staff on due diligence procedures",
            "Create standardized due diligence checklist for all investors",
        ],
        "Capital Adequacy Ratio" => &[
            "Develop capital enhancement plan",
            "Review asset weightings and risk classifications",
            "Consider equity infusion to meet required threshold",
        ],
        "KYC Verification Rate" => &[
            "Streamline KYC process with digital verification",
            "Implement automated reminders for incomplete KYC",
            "Conduct monthly KYC compliance reviews",
        ],
        "NPA (Non-Performing Assets)" => &[
            "Enhance credit assessment procedures",
            "Implement early warning system for potential defaults",
            "Develop specialized recovery strategies for different asset classes",
        ],
        _ => &[],
    }
}
