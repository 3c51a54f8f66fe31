use super::client::AuditResponse;
use super::questions::suggested_question;
use crate::dashboard::DashboardView;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An audit response together with the moment it was received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditSnapshot {
    pub response: AuditResponse,
    pub received_at: DateTime<Utc>,
}

impl AuditSnapshot {
    pub fn new(response: AuditResponse, received_at: DateTime<Utc>) -> Self {
        Self {
            response,
            received_at,
        }
    }

    pub fn report(&self) -> &str {
        &self.response.audit
    }

    pub fn score_text(&self) -> &str {
        &self.response.score
    }
}

/// State of one interactive session.
///
/// Holds the most recent audit and the question queued for the Q&A box.
/// Owners create it empty and drop it when the session ends.
#[derive(Debug, Default, Clone)]
pub struct AuditSession {
    latest: Option<AuditSnapshot>,
    audits_run: u32,
    pending_question: Option<String>,
}

impl AuditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new audit, replacing the previous one.
    pub fn record_audit(&mut self, response: AuditResponse, received_at: DateTime<Utc>) -> &AuditSnapshot {
        self.audits_run = self.audits_run.saturating_add(1);
        self.latest.insert(AuditSnapshot::new(response, received_at))
    }

    pub fn latest(&self) -> Option<&AuditSnapshot> {
        self.latest.as_ref()
    }

    pub fn has_audit(&self) -> bool {
        self.latest.is_some()
    }

    pub fn audits_run(&self) -> u32 {
        self.audits_run
    }

    pub fn report(&self) -> Option<&str> {
        self.latest.as_ref().map(AuditSnapshot::report)
    }

    pub fn dashboard(&self) -> Option<DashboardView> {
        self.latest.as_ref().map(DashboardView::build)
    }

    /// Queue one of the suggested questions. Returns the queued text.
    pub fn select_suggestion(&mut self, index: usize) -> Option<&str> {
        let question = suggested_question(index)?;
        self.pending_question = Some(question.to_string());
        self.pending_question.as_deref()
    }

    pub fn queue_question(&mut self, question: impl Into<String>) {
        let question = question.into();
        if question.trim().is_empty() {
            self.pending_question = None;
        } else {
            self.pending_question = Some(question);
        }
    }

    pub fn pending_question(&self) -> Option<&str> {
        self.pending_question.as_deref()
    }

    /// Consume the queued question once it has been answered.
    pub fn take_question(&mut self) -> Option<String> {
        self.pending_question.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn response(score: &str) -> AuditResponse {
        AuditResponse {
            score: score.to_string(),
            audit: format!("## Audit\n{score}"),
        }
    }

    #[test]
    fn new_session_has_no_dashboard() {
        let session = AuditSession::new();
        assert!(!session.has_audit());
        assert!(session.dashboard().is_none());
        assert!(session.report().is_none());
    }

    #[test]
    fn later_audit_replaces_earlier_one() {
        let mut session = AuditSession::new();
        let first = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();

        session.record_audit(response("Score: 61"), first);
        session.record_audit(response("Score: 74"), second);

        let latest = session.latest().expect("audit stored");
        assert_eq!(latest.received_at, second);
        assert_eq!(latest.score_text(), "Score: 74");
        assert_eq!(session.audits_run(), 2);

        let dashboard = session.dashboard().expect("dashboard available");
        assert_eq!(dashboard.overall.score, 74);
    }

    #[test]
    fn suggestion_is_queued_until_taken() {
        let mut session = AuditSession::new();
        let queued = session.select_suggestion(1).map(str::to_string);
        assert_eq!(
            queued.as_deref(),
            Some("How can we improve our KYC verification rate?")
        );
        assert!(session.select_suggestion(99).is_none());
        assert_eq!(session.pending_question(), queued.as_deref());

        assert_eq!(session.take_question(), queued);
        assert!(session.pending_question().is_none());
    }

    #[test]
    fn blank_question_clears_queue() {
        let mut session = AuditSession::new();
        session.queue_question("What changed?");
        session.queue_question("  ");
        assert!(session.pending_question().is_none());
    }
}
