use super::band::RiskBand;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::warn;

/// Overall score shown when the audit text carries no `Score:` value.
pub const DEFAULT_OVERALL_SCORE: u32 = 65;

static OVERALL_SCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Score:\s*(?P<score>[0-9]+)").expect("overall score pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Reported,
    Fallback,
}

impl ScoreSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reported => "Reported by audit",
            Self::Fallback => "Default (audit score unavailable)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallScore {
    pub value: u32,
    pub source: ScoreSource,
}

impl OverallScore {
    pub const fn fallback() -> Self {
        Self {
            value: DEFAULT_OVERALL_SCORE,
            source: ScoreSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ScoreSource::Fallback
    }

    pub fn band(&self) -> RiskBand {
        RiskBand::for_rate(f64::from(self.value))
    }
}

/// Read the integer following the first `Score:` in `text`.
pub fn parse_overall_score(text: &str) -> OverallScore {
    let parsed = OVERALL_SCORE_RE
        .captures(text)
        .and_then(|captures| captures["score"].parse::<u32>().ok());

    match parsed {
        Some(value) => OverallScore {
            value,
            source: ScoreSource::Reported,
        },
        None => {
            warn!(
                fallback = DEFAULT_OVERALL_SCORE,
                "audit score text has no Score: value, using fallback"
            );
            OverallScore::fallback()
        }
    }
}
