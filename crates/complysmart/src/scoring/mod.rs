//! Score extraction and derivation.
//!
//! Everything here is a pure function of its input: tables are rebuilt on
//! every call and never mutated in place by callers.

mod band;
mod extractor;
mod overall;
mod table;

pub use band::RiskBand;
pub use extractor::extract_scores;
pub use overall::{parse_overall_score, OverallScore, ScoreSource, DEFAULT_OVERALL_SCORE};
pub use table::{ComplianceScore, RankedRate, ScoreTable};
