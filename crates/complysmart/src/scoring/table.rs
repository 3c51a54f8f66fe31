use super::band::RiskBand;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::io::Write;

/// Measured value, threshold, and the derived rate for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceScore {
    pub actual: f64,
    pub target: f64,
    pub compliance_rate: f64,
}

impl ComplianceScore {
    /// Derives the compliance rate. A zero target yields a rate of 0.
    pub fn new(actual: f64, target: f64) -> Self {
        let compliance_rate = if target > 0.0 {
            let rate = actual / target * 100.0;
            if rate.is_finite() {
                rate
            } else {
                0.0
            }
        } else {
            0.0
        };

        Self {
            actual,
            target,
            compliance_rate,
        }
    }

    pub fn band(&self) -> RiskBand {
        RiskBand::for_rate(self.compliance_rate)
    }

    pub fn meets_target(&self) -> bool {
        self.target > 0.0 && self.actual >= self.target
    }
}

/// Category scores in first-seen order.
///
/// Re-inserting a category replaces its values but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    entries: Vec<(String, ComplianceScore)>,
}

/// One bar of the compliance-rate chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRate {
    pub category: String,
    pub compliance_rate: f64,
    pub band: RiskBand,
    pub color: &'static str,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    category: &'a str,
    actual: f64,
    target: f64,
    compliance_rate: f64,
    risk_band: &'static str,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, score: ComplianceScore) {
        let category = category.into();
        match self.entries.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => *existing = score,
            None => self.entries.push((category, score)),
        }
    }

    pub fn get(&self, category: &str) -> Option<&ComplianceScore> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, score)| score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComplianceScore)> {
        self.entries
            .iter()
            .map(|(name, score)| (name.as_str(), score))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Mean compliance rate across all categories, `None` when empty.
    pub fn average_rate(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: f64 = self.entries.iter().map(|(_, score)| score.compliance_rate).sum();
        Some(total / self.entries.len() as f64)
    }

    /// Categories sorted by compliance rate, highest first. Ties keep input order.
    pub fn ranked_by_rate(&self) -> Vec<RankedRate> {
        let mut ranked: Vec<RankedRate> = self
            .entries
            .iter()
            .map(|(name, score)| {
                let band = score.band();
                RankedRate {
                    category: name.clone(),
                    compliance_rate: score.compliance_rate,
                    band,
                    color: band.color(),
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.compliance_rate
                .partial_cmp(&a.compliance_rate)
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (category, score) in self.iter() {
            csv_writer.serialize(CsvRow {
                category,
                actual: score.actual,
                target: score.target,
                compliance_rate: score.compliance_rate,
                risk_band: score.band().label(),
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String, csv::Error> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|err| {
            csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
        })
    }
}

impl Serialize for ScoreTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, score) in &self.entries {
            map.serialize_entry(category, score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_target_yields_zero_rate() {
        let score = ComplianceScore::new(40.0, 0.0);
        assert_eq!(score.compliance_rate, 0.0);
        assert!(!score.meets_target());
    }

    #[test]
    fn rate_above_target_is_not_clamped() {
        let score = ComplianceScore::new(120.0, 100.0);
        assert!((score.compliance_rate - 120.0).abs() < 1e-9);
        assert!(score.meets_target());
    }

    #[test]
    fn reinsert_keeps_first_position_with_latest_values() {
        let mut table = ScoreTable::new();
        table.insert("KYC", ComplianceScore::new(50.0, 100.0));
        table.insert("AML", ComplianceScore::new(85.0, 100.0));
        table.insert("KYC", ComplianceScore::new(72.0, 100.0));

        let order: Vec<&str> = table.categories().collect();
        assert_eq!(order, vec!["KYC", "AML"]);
        assert_eq!(table.get("KYC").map(|score| score.actual), Some(72.0));
    }

    #[test]
    fn ranked_rates_sort_descending_with_band_colors() {
        let mut table = ScoreTable::new();
        table.insert("Large Investor Verification", ComplianceScore::new(50.0, 100.0));
        table.insert("TDS Compliance Rate", ComplianceScore::new(92.0, 100.0));
        table.insert("AIF Due Diligence", ComplianceScore::new(65.0, 100.0));

        let ranked = table.ranked_by_rate();
        let names: Vec<&str> = ranked.iter().map(|entry| entry.category.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "TDS Compliance Rate",
                "AIF Due Diligence",
                "Large Investor Verification"
            ]
        );
        assert_eq!(ranked[0].color, "#00B050");
        assert_eq!(ranked[1].color, "#FFA500");
        assert_eq!(ranked[2].band, RiskBand::Medium);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut table = ScoreTable::new();
        table.insert("Zeta", ComplianceScore::new(10.0, 20.0));
        table.insert("Alpha", ComplianceScore::new(0.0, 0.0));

        let json = serde_json::to_string(&table).expect("table serializes");
        assert_eq!(
            json,
            r#"{"Zeta":{"actual":10.0,"target":20.0,"compliance_rate":50.0},"Alpha":{"actual":0.0,"target":0.0,"compliance_rate":0.0}}"#
        );
    }

    #[test]
    fn csv_export_includes_header_and_band() {
        let mut table = ScoreTable::new();
        table.insert("GST Filing Timeliness", ComplianceScore::new(88.0, 100.0));

        let csv = table.to_csv_string().expect("csv renders");
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("category,actual,target,compliance_rate,risk_band")
        );
        assert_eq!(lines.next(), Some("GST Filing Timeliness,88.0,100.0,88.0,Low Risk"));
    }
}
