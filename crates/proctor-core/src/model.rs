//! Core data model types for proctor.
//!
//! These are the fundamental entities the submission service operates on:
//! students, exams with their questions and alternatives, and the submission
//! records produced when a student hands in an answer set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered student. Referenced by submissions, never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
}

/// A named collection of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    /// Unique identifier.
    pub id: Uuid,
    /// Human-readable exam name (e.g. "Algebra Midterm").
    pub name: String,
}

/// A single prompt within an exam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier.
    pub id: Uuid,
    /// The exam this question belongs to.
    pub exam_id: Uuid,
    /// 1-based position of the question within its exam.
    pub number: u32,
    /// The prompt text shown to the student.
    pub content: String,
}

/// One selectable option for a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    /// Unique identifier.
    pub id: Uuid,
    /// The question this alternative belongs to.
    pub question_id: Uuid,
    /// Display letter ("A", "B", ...).
    pub label: String,
    /// The option text.
    pub content: String,
    /// Whether selecting this alternative counts as a correct answer.
    pub is_correct: bool,
}

/// One student's one-time attempt at one exam.
///
/// Created atomically together with its answers; read-only afterward.
/// At most one submission exists per (student, exam) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSubmission {
    /// Unique identifier.
    pub id: Uuid,
    /// The submitting student.
    pub student_id: Uuid,
    /// The exam being attempted.
    pub exam_id: Uuid,
    /// Set once at creation.
    pub submitted_at: DateTime<Utc>,
}

/// A student's selected alternative for one question within a submission.
///
/// At most one answer exists per (submission, question) pair, and the
/// selected alternative always belongs to the referenced question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The submission this answer belongs to.
    pub submission_id: Uuid,
    /// The question being answered.
    pub question_id: Uuid,
    /// The alternative the student picked.
    pub selected_alternative_id: Uuid,
}

/// A proposed (question, alternative) pair in an incoming submission request.
///
/// This is the typed input the validator works on; handlers build it from
/// request payloads instead of passing ids through a generic context map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerChoice {
    /// The question being answered.
    pub question_id: Uuid,
    /// The alternative the student picked for it.
    pub selected_alternative_id: Uuid,
}
