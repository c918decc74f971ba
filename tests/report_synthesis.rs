use chrono::{TimeZone, Utc};
use interview_ai::workflows::interview::{
    AnswerRecord, GapPriority, InterviewQuestion, OutcomeReportView, ReportId, ReportSynthesizer,
    ScoringConfig, SessionId, SessionSnapshot, SessionViewError,
};

fn completed_session() -> SessionSnapshot {
    let questions: Vec<InterviewQuestion> = (0..2)
        .map(|index| InterviewQuestion {
            question_id: format!("q-{index}"),
            text: format!("Question {index}"),
            category: "behavioral".to_string(),
            difficulty: 3.0,
        })
        .collect();

    let answered_at = Utc
        .with_ymd_and_hms(2025, 11, 3, 15, 0, 0)
        .single()
        .expect("valid timestamp");

    let responses: Vec<AnswerRecord> = questions
        .iter()
        .map(|question| AnswerRecord {
            question_id: question.question_id.clone(),
            answer: "A structured answer.".to_string(),
            answered_at,
        })
        .collect();

    SessionSnapshot {
        session_id: SessionId("session-integration".to_string()),
        questions,
        responses,
        clarity_scores: vec![9.0, 9.0],
        completeness_scores: vec![4.0, 4.0],
        relevance_scores: vec![9.0, 9.0],
        confidence_scores: vec![9.0, 9.0],
        overall_scores: vec![90.0, 85.0],
        overall_score: Some(87.0),
    }
}

#[test]
fn completed_session_yields_the_documented_outcome_report() {
    let session = completed_session();
    let synthesizer = ReportSynthesizer::new(ScoringConfig::default());

    let created_at = Utc
        .with_ymd_and_hms(2025, 11, 3, 15, 5, 0)
        .single()
        .expect("valid timestamp");
    let report = synthesizer.synthesize(
        &session,
        ReportId("report-000100".to_string()),
        created_at,
    );

    assert_eq!(report.success_probability, 0.85);
    assert_eq!(report.session_overall_score, 87.0);

    assert_eq!(report.top_gaps.len(), 1);
    assert_eq!(report.top_gaps[0].gap, "Completeness of answers");
    assert_eq!(report.top_gaps[0].priority, GapPriority::High);
    assert_eq!(
        report.top_gaps[0].action,
        "Ensure all parts of the question are addressed"
    );

    assert_eq!(
        report.strengths,
        vec![
            "Excellent clarity and structure in answers",
            "Strong alignment of answers with role requirements",
            "Confident and composed communication",
        ]
    );

    let overall = report
        .competency_breakdown
        .get("Overall Performance")
        .expect("overall bucket present");
    assert_eq!(overall.score, 87.5);
    assert_eq!(overall.gap, -17.5);
    assert_eq!(overall.comment, "Excellent performance demonstrated");
}

#[test]
fn report_view_round_trips_through_persisted_json() {
    let session = completed_session();
    let synthesizer = ReportSynthesizer::new(ScoringConfig::default());

    let created_at = Utc
        .with_ymd_and_hms(2025, 11, 3, 15, 5, 0)
        .single()
        .expect("valid timestamp");
    let view = synthesizer
        .synthesize(
            &session,
            ReportId("report-000101".to_string()),
            created_at,
        )
        .to_view();

    let stored = serde_json::to_string(&view).expect("view serializes");
    let loaded: OutcomeReportView = serde_json::from_str(&stored).expect("view deserializes");

    assert_eq!(loaded, view);

    let raw: serde_json::Value = serde_json::from_str(&stored).expect("valid json");
    assert_eq!(raw["sessionId"], "session-integration");
    assert_eq!(raw["report"]["id"], "report-000101");
    assert_eq!(raw["top_gaps"][0]["priority"], "HIGH");
}

#[test]
fn exhausted_session_refuses_a_next_question_view() {
    let session = completed_session();

    match session.next_question() {
        Err(SessionViewError::Exhausted(id)) => assert_eq!(id, session.session_id),
        other => panic!("expected exhausted-session error, got {other:?}"),
    }
}
