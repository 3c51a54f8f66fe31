use serde::Serialize;

/// Dashboard grouping of compliance rates; also the gauge colour steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    High,
    Medium,
    Low,
}

impl RiskBand {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    pub fn for_rate(rate: f64) -> Self {
        if rate < 50.0 {
            Self::High
        } else if rate < 75.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Medium => "Medium Risk",
            Self::Low => "Low Risk",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::High => "#FF4B4B",
            Self::Medium => "#FFA500",
            Self::Low => "#00B050",
        }
    }

    /// Half-open gauge range `[lower, upper)` covered by the band.
    pub const fn range(self) -> (f64, f64) {
        match self {
            Self::High => (0.0, 50.0),
            Self::Medium => (50.0, 75.0),
            Self::Low => (75.0, 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(RiskBand::for_rate(0.0), RiskBand::High);
        assert_eq!(RiskBand::for_rate(49.9), RiskBand::High);
        assert_eq!(RiskBand::for_rate(50.0), RiskBand::Medium);
        assert_eq!(RiskBand::for_rate(74.99), RiskBand::Medium);
        assert_eq!(RiskBand::for_rate(75.0), RiskBand::Low);
        assert_eq!(RiskBand::for_rate(130.0), RiskBand::Low);
    }

    #[test]
    fn ranges_tile_the_gauge() {
        let ranges: Vec<(f64, f64)> = RiskBand::ordered().iter().map(|b| b.range()).collect();
        assert_eq!(ranges.first().map(|r| r.0), Some(0.0));
        assert_eq!(ranges.last().map(|r| r.1), Some(100.0));
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }
}
