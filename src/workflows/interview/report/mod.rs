mod views;

pub use views::{OutcomeReportView, ReportStamp};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ReportId, SessionId};
use super::scoring::{CompetencyAssessment, SkillGap};

/// Outcome value produced exactly once per completed session.
///
/// Reports are immutable: re-scoring a session means producing a new report,
/// never editing an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub report_id: ReportId,
    pub created_at: DateTime<Utc>,
    pub session_id: SessionId,
    pub session_overall_score: f64,
    /// Banded estimate in `[0, 1]`.
    pub success_probability: f64,
    pub competency_breakdown: BTreeMap<String, CompetencyAssessment>,
    /// At most three entries, highest priority first.
    pub top_gaps: Vec<SkillGap>,
    /// Never empty; falls back to documented default text.
    pub strengths: Vec<String>,
}

impl OutcomeReport {
    /// Boundary DTO handed to the presentation and persistence layers.
    pub fn to_view(&self) -> OutcomeReportView {
        OutcomeReportView {
            session_id: self.session_id.clone(),
            session_overall_score: self.session_overall_score,
            success_probability: self.success_probability,
            competency_breakdown: self.competency_breakdown.clone(),
            top_gaps: self.top_gaps.clone(),
            strengths: self.strengths.clone(),
            report: ReportStamp {
                id: self.report_id.clone(),
                created_at: self.created_at,
            },
        }
    }
}
