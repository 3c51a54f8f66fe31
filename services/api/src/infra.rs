use complysmart::audit::{AuditApiClient, AuditSession};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) audit: AuditState,
}

/// The remote client plus the one interactive session this process serves.
#[derive(Clone)]
pub(crate) struct AuditState {
    pub(crate) client: AuditApiClient,
    session: Arc<Mutex<AuditSession>>,
}

impl AuditState {
    pub(crate) fn new(client: AuditApiClient) -> Self {
        Self {
            client,
            session: Arc::new(Mutex::new(AuditSession::new())),
        }
    }

    /// Never hold the guard across an `.await`.
    pub(crate) fn session(&self) -> MutexGuard<'_, AuditSession> {
        self.session.lock().expect("audit session mutex poisoned")
    }
}
