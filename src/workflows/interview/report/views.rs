use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::domain::{ReportId, SessionId};
use super::super::scoring::{CompetencyAssessment, SkillGap};

/// Serialized report boundary. Field names are stable for client and
/// storage compatibility and must not be renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeReportView {
    #[serde(rename = "sessionId")]
    pub session_id: SessionId,
    pub session_overall_score: f64,
    pub success_probability: f64,
    pub competency_breakdown: BTreeMap<String, CompetencyAssessment>,
    pub top_gaps: Vec<SkillGap>,
    pub strengths: Vec<String>,
    pub report: ReportStamp,
}

/// Identity envelope for the persisted report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStamp {
    pub id: ReportId,
    pub created_at: DateTime<Utc>,
}
