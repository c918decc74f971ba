//! Scoring and outcome-report synthesis for AI-led mock interview sessions.
//!
//! The crate receives a completed session snapshot (questions, answers, and
//! five parallel per-answer score sequences) and produces an immutable
//! outcome report: competency breakdown, prioritized skill gaps, strengths,
//! and a banded success-probability estimate. Transport, persistence, and
//! session conduct live behind the traits in
//! [`workflows::interview::repository`].

pub mod config;
pub mod workflows;
