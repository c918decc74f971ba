use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for interview sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for synthesized outcome reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub String);

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Question drawn from the externally owned question bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question_id: String,
    pub text: String,
    pub category: String,
    pub difficulty: f64,
}

/// Candidate answer captured turn-by-turn by the conduct workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: String,
    pub answer: String,
    pub answered_at: DateTime<Utc>,
}

/// Completed-session snapshot handed in by the conduct subsystem.
///
/// The five score sequences are parallel, indexed by answer order, with each
/// value expected in `[0, 10]`. Equal lengths are assumed, not verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub questions: Vec<InterviewQuestion>,
    pub responses: Vec<AnswerRecord>,
    pub clarity_scores: Vec<f64>,
    pub completeness_scores: Vec<f64>,
    pub relevance_scores: Vec<f64>,
    pub confidence_scores: Vec<f64>,
    pub overall_scores: Vec<f64>,
    /// Session-level score assigned at completion. Synthesis treats an
    /// absent value as 0, which conflates "never scored" with the lowest
    /// possible score.
    pub overall_score: Option<f64>,
}

/// Per-answer evaluation axes, in fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Clarity,
    Completeness,
    Relevance,
    Confidence,
}

impl Dimension {
    pub const fn ordered() -> [Dimension; 4] {
        [
            Dimension::Clarity,
            Dimension::Completeness,
            Dimension::Relevance,
            Dimension::Confidence,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Clarity => "clarity",
            Self::Completeness => "completeness",
            Self::Relevance => "relevance",
            Self::Confidence => "confidence",
        }
    }
}

/// Read capability over a scored session so synthetic sessions can stand in
/// for the full entity graph in tests.
pub trait ScoredSession {
    fn id(&self) -> &SessionId;
    fn clarity_scores(&self) -> &[f64];
    fn completeness_scores(&self) -> &[f64];
    fn relevance_scores(&self) -> &[f64];
    fn confidence_scores(&self) -> &[f64];
    fn overall_scores(&self) -> &[f64];
    fn overall_score(&self) -> Option<f64>;
}

impl ScoredSession for SessionSnapshot {
    fn id(&self) -> &SessionId {
        &self.session_id
    }

    fn clarity_scores(&self) -> &[f64] {
        &self.clarity_scores
    }

    fn completeness_scores(&self) -> &[f64] {
        &self.completeness_scores
    }

    fn relevance_scores(&self) -> &[f64] {
        &self.relevance_scores
    }

    fn confidence_scores(&self) -> &[f64] {
        &self.confidence_scores
    }

    fn overall_scores(&self) -> &[f64] {
        &self.overall_scores
    }

    fn overall_score(&self) -> Option<f64> {
        self.overall_score
    }
}

impl SessionSnapshot {
    /// Number of answers recorded so far.
    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    /// View of the next question the conduct workflow should present.
    ///
    /// Requesting this on an exhausted session indicates a logic bug in the
    /// caller and is surfaced as [`SessionViewError::Exhausted`]; there is
    /// no retry semantics.
    pub fn next_question(&self) -> Result<NextQuestionView, SessionViewError> {
        let index = self.responses.len();
        let question = self
            .questions
            .get(index)
            .ok_or_else(|| SessionViewError::Exhausted(self.session_id.clone()))?;

        Ok(NextQuestionView {
            session_id: self.session_id.clone(),
            question_id: question.question_id.clone(),
            text: question.text.clone(),
            category: question.category.clone(),
            difficulty: question.difficulty,
            question_number: index + 1,
            total_questions: self.questions.len(),
        })
    }
}

/// Presentation view feeding the interview-taking flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextQuestionView {
    pub session_id: SessionId,
    pub question_id: String,
    pub text: String,
    pub category: String,
    pub difficulty: f64,
    pub question_number: usize,
    pub total_questions: usize,
}

/// Invariant violation raised when mapping a session to a view.
#[derive(Debug, thiserror::Error)]
pub enum SessionViewError {
    #[error("session {0} has no pending question")]
    Exhausted(SessionId),
}
