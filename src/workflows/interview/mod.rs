//! Interview outcome scoring and report synthesis.
//!
//! The scoring engine is pure and synchronous: it reads a completed session
//! snapshot through the [`domain::ScoredSession`] capability and assembles an
//! immutable [`report::OutcomeReport`]. Persistence and session conduct sit
//! behind the traits in [`repository`].

pub mod domain;
pub mod report;
pub mod repository;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerRecord, Dimension, InterviewQuestion, NextQuestionView, ReportId, ScoredSession,
    SessionId, SessionSnapshot, SessionViewError,
};
pub use report::{OutcomeReport, OutcomeReportView, ReportStamp};
pub use repository::{ReportRecord, ReportRepository, RepositoryError, SessionStore};
pub use scoring::{CompetencyAssessment, GapPriority, ReportSynthesizer, ScoringConfig, SkillGap};
pub use service::{ReportService, ReportServiceError};
