use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use crate::workflows::interview::domain::{
    AnswerRecord, InterviewQuestion, ScoredSession, SessionId, SessionSnapshot,
};
use crate::workflows::interview::repository::{
    ReportRecord, ReportRepository, RepositoryError, SessionStore,
};

pub(super) fn report_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 3, 14, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn question(id: &str) -> InterviewQuestion {
    InterviewQuestion {
        question_id: id.to_string(),
        text: format!("Tell me about a time you handled {id}"),
        category: "behavioral".to_string(),
        difficulty: 3.0,
    }
}

pub(super) fn answer(question_id: &str) -> AnswerRecord {
    AnswerRecord {
        question_id: question_id.to_string(),
        answer: "I led the effort and measured the result.".to_string(),
        answered_at: report_timestamp(),
    }
}

/// Completed snapshot with one question/answer pair per overall score.
pub(super) fn completed_session(
    id: &str,
    clarity: &[f64],
    completeness: &[f64],
    relevance: &[f64],
    confidence: &[f64],
    overall: &[f64],
    session_overall: Option<f64>,
) -> SessionSnapshot {
    let questions: Vec<InterviewQuestion> = (0..overall.len())
        .map(|index| question(&format!("q-{index}")))
        .collect();
    let responses: Vec<AnswerRecord> = questions
        .iter()
        .map(|question| answer(&question.question_id))
        .collect();

    SessionSnapshot {
        session_id: SessionId(id.to_string()),
        questions,
        responses,
        clarity_scores: clarity.to_vec(),
        completeness_scores: completeness.to_vec(),
        relevance_scores: relevance.to_vec(),
        confidence_scores: confidence.to_vec(),
        overall_scores: overall.to_vec(),
        overall_score: session_overall,
    }
}

/// Minimal stand-in proving the synthesizer only needs the read capability.
pub(super) struct SyntheticSession {
    pub id: SessionId,
    pub clarity: Vec<f64>,
    pub completeness: Vec<f64>,
    pub relevance: Vec<f64>,
    pub confidence: Vec<f64>,
    pub overall: Vec<f64>,
    pub session_overall: Option<f64>,
}

impl ScoredSession for SyntheticSession {
    fn id(&self) -> &SessionId {
        &self.id
    }

    fn clarity_scores(&self) -> &[f64] {
        &self.clarity
    }

    fn completeness_scores(&self) -> &[f64] {
        &self.completeness
    }

    fn relevance_scores(&self) -> &[f64] {
        &self.relevance
    }

    fn confidence_scores(&self) -> &[f64] {
        &self.confidence
    }

    fn overall_scores(&self) -> &[f64] {
        &self.overall
    }

    fn overall_score(&self) -> Option<f64> {
        self.session_overall
    }
}

#[derive(Default)]
pub(super) struct InMemorySessions {
    sessions: Mutex<HashMap<String, SessionSnapshot>>,
}

impl InMemorySessions {
    pub(super) fn with(session: SessionSnapshot) -> Self {
        let store = Self::default();
        store
            .sessions
            .lock()
            .expect("session store poisoned")
            .insert(session.session_id.0.clone(), session);
        store
    }
}

impl SessionStore for InMemorySessions {
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionSnapshot>, RepositoryError> {
        let sessions = self.sessions.lock().expect("session store poisoned");
        Ok(sessions.get(&id.0).cloned())
    }
}

#[derive(Default)]
pub(super) struct InMemoryReports {
    records: Mutex<HashMap<String, ReportRecord>>,
}

impl ReportRepository for InMemoryReports {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        let mut records = self.records.lock().expect("report store poisoned");
        let key = record.report.session_id.0.clone();
        if records.contains_key(&key) {
            return Err(RepositoryError::Conflict);
        }
        records.insert(key, record.clone());
        Ok(record)
    }

    fn fetch_for_session(&self, id: &SessionId) -> Result<Option<ReportRecord>, RepositoryError> {
        let records = self.records.lock().expect("report store poisoned");
        Ok(records.get(&id.0).cloned())
    }
}
