//! Compliance scoring for regulatory dashboards.
//!
//! The crate turns free-form compliance summaries into per-category scores,
//! talks to the remote audit service, and assembles the dashboard views the
//! service layer renders.

pub mod audit;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod scoring;
pub mod telemetry;
