//! Remote audit service access and the per-session audit state.

mod client;
mod questions;
mod session;

pub use client::{AnswerResponse, AuditApiClient, AuditApiError, AuditResponse, QuestionRequest};
pub use questions::{suggested_question, SUGGESTED_QUESTIONS};
pub use session::{AuditSession, AuditSnapshot};
