use serde::{Deserialize, Serialize};

use super::domain::{SessionId, SessionSnapshot};
use super::report::OutcomeReport;

/// Storage record pairing the report with its free-text summary column.
///
/// `feedback_summary` is persisted alongside the structured fields but is
/// authored by a separate subsystem; this engine leaves it unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub report: OutcomeReport,
    pub feedback_summary: Option<String>,
}

/// Read capability over completed sessions, owned by the conduct subsystem.
pub trait SessionStore: Send + Sync {
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionSnapshot>, RepositoryError>;
}

/// Storage abstraction for synthesized reports so the service module can be
/// exercised in isolation. Reports are written exactly once; implementations
/// must reject a second insert for the same session.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError>;
    fn fetch_for_session(&self, id: &SessionId) -> Result<Option<ReportRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
