//! Exam result scoring.
//!
//! A pure read-side computation: given a persisted submission and its
//! answers joined to their questions and selected alternatives, derive the
//! count-correct, percentage-correct, and per-answer review rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Alternative, Exam, ExamSubmission, Question, Student};

/// One answer joined to its question and selected alternative.
///
/// The service builds these rows from the store's relationship queries;
/// the scorer never touches the store.
#[derive(Debug, Clone)]
pub struct GradedAnswer {
    /// The question that was answered.
    pub question: Question,
    /// The alternative the student selected for it.
    pub selected: Alternative,
}

/// A single review row in an exam result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerReview {
    /// Question display text.
    pub question: String,
    /// Selected-alternative display text.
    pub selected_alternative: String,
    /// Whether the selected alternative was the correct one.
    pub is_correct: bool,
}

/// The scored view of one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResult {
    /// Submission identifier.
    pub id: Uuid,
    /// Student display name.
    pub student: String,
    /// Exam display name.
    pub exam: String,
    /// When the submission was created.
    pub submitted_at: DateTime<Utc>,
    /// Per-answer review rows, ordered by question number.
    pub answers: Vec<AnswerReview>,
    /// Count of answers whose selected alternative is correct.
    pub total_correct: u32,
    /// Count of the submission's answers.
    pub total_questions: u32,
    /// `(total_correct / total_questions) * 100`, or 0 for an empty exam.
    /// No rounding is applied; fractional percentages are legitimate.
    pub percentage_score: f64,
}

/// Score a submission from its joined answer rows.
pub fn score_submission(
    submission: &ExamSubmission,
    student: &Student,
    exam: &Exam,
    graded: &[GradedAnswer],
) -> ExamResult {
    let mut rows: Vec<&GradedAnswer> = graded.iter().collect();
    rows.sort_by_key(|g| g.question.number);

    let answers: Vec<AnswerReview> = rows
        .iter()
        .map(|g| AnswerReview {
            question: g.question.content.clone(),
            selected_alternative: g.selected.content.clone(),
            is_correct: g.selected.is_correct,
        })
        .collect();

    let total_questions = answers.len() as u32;
    let total_correct = answers.iter().filter(|a| a.is_correct).count() as u32;
    let percentage_score = if total_questions > 0 {
        (f64::from(total_correct) / f64::from(total_questions)) * 100.0
    } else {
        0.0
    };

    ExamResult {
        id: submission.id,
        student: student.name.clone(),
        exam: exam.name.clone(),
        submitted_at: submission.submitted_at,
        answers,
        total_correct,
        total_questions,
        percentage_score,
    }
}
