mod aggregate;
mod breakdown;
mod config;
mod gaps;
mod probability;
mod strengths;

pub use breakdown::CompetencyAssessment;
pub use config::ScoringConfig;
pub use gaps::{GapPriority, SkillGap};

pub(crate) use aggregate::mean;
pub(crate) use breakdown::build_breakdown;
pub(crate) use gaps::analyze_gaps;
pub(crate) use probability::estimate_success;
pub(crate) use strengths::identify_strengths;

use chrono::{DateTime, Utc};

use super::domain::{Dimension, ReportId, ScoredSession};
use super::report::OutcomeReport;

/// Per-dimension means computed once per synthesis pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DimensionMeans {
    pub clarity: f64,
    pub completeness: f64,
    pub relevance: f64,
    pub confidence: f64,
}

impl DimensionMeans {
    pub(crate) fn of(session: &impl ScoredSession) -> Self {
        Self {
            clarity: mean(session.clarity_scores()),
            completeness: mean(session.completeness_scores()),
            relevance: mean(session.relevance_scores()),
            confidence: mean(session.confidence_scores()),
        }
    }

    /// Means paired with their dimension, in fixed evaluation order.
    pub(crate) fn ordered(&self) -> [(Dimension, f64); 4] {
        Dimension::ordered().map(|dimension| (dimension, self.value(dimension)))
    }

    fn value(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Clarity => self.clarity,
            Dimension::Completeness => self.completeness,
            Dimension::Relevance => self.relevance,
            Dimension::Confidence => self.confidence,
        }
    }
}

/// Stateless synthesizer applying the rubric to a completed session.
pub struct ReportSynthesizer {
    config: ScoringConfig,
}

impl ReportSynthesizer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Assembles the outcome report for a completed session snapshot.
    ///
    /// Pure given its inputs; report identity and timestamp are assigned by
    /// the caller. An absent session overall score is treated as 0.
    pub fn synthesize(
        &self,
        session: &impl ScoredSession,
        report_id: ReportId,
        created_at: DateTime<Utc>,
    ) -> OutcomeReport {
        let means = DimensionMeans::of(session);
        let overall_mean = mean(session.overall_scores());
        let session_overall_score = session.overall_score().unwrap_or(0.0);

        OutcomeReport {
            report_id,
            created_at,
            session_id: session.id().clone(),
            session_overall_score,
            success_probability: estimate_success(session_overall_score),
            competency_breakdown: build_breakdown(overall_mean, &self.config),
            top_gaps: analyze_gaps(&means, &self.config),
            strengths: identify_strengths(&means, overall_mean, &self.config),
        }
    }
}
