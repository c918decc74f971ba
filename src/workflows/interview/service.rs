use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{ReportId, SessionId};
use super::repository::{ReportRecord, ReportRepository, RepositoryError, SessionStore};
use super::scoring::{ReportSynthesizer, ScoringConfig};

/// Service composing the session store, report repository, and synthesizer.
pub struct ReportService<S, R> {
    sessions: Arc<S>,
    reports: Arc<R>,
    synthesizer: Arc<ReportSynthesizer>,
}

static REPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_report_id() -> ReportId {
    let id = REPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReportId(format!("report-{id:06}"))
}

impl<S, R> ReportService<S, R>
where
    S: SessionStore + 'static,
    R: ReportRepository + 'static,
{
    pub fn new(sessions: Arc<S>, reports: Arc<R>, config: ScoringConfig) -> Self {
        Self {
            sessions,
            reports,
            synthesizer: Arc::new(ReportSynthesizer::new(config)),
        }
    }

    /// Synthesize and persist the outcome report for a completed session.
    ///
    /// A session that already has a report yields
    /// [`ReportServiceError::AlreadyReported`]; re-scoring requires a new
    /// report row, never an update.
    pub fn finalize(&self, session_id: &SessionId) -> Result<ReportRecord, ReportServiceError> {
        let session = self
            .sessions
            .fetch(session_id)?
            .ok_or_else(|| ReportServiceError::SessionNotFound(session_id.clone()))?;

        if self.reports.fetch_for_session(session_id)?.is_some() {
            warn!(session = %session_id, "outcome report already exists");
            return Err(ReportServiceError::AlreadyReported(session_id.clone()));
        }

        let report = self
            .synthesizer
            .synthesize(&session, next_report_id(), Utc::now());

        info!(
            session = %session_id,
            report = %report.report_id,
            probability = report.success_probability,
            gaps = report.top_gaps.len(),
            "outcome report synthesized"
        );

        let record = ReportRecord {
            report,
            feedback_summary: None,
        };

        let stored = self.reports.insert(record)?;
        Ok(stored)
    }

    /// Fetch the stored report for API responses.
    pub fn get(&self, session_id: &SessionId) -> Result<ReportRecord, ReportServiceError> {
        let record = self
            .reports
            .fetch_for_session(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the report service.
#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error("session {0} not found")]
    SessionNotFound(SessionId),
    #[error("session {0} already has an outcome report")]
    AlreadyReported(SessionId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
