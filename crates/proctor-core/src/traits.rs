//! The store seam consumed by the submission service.
//!
//! `SubmissionStore` is the async trait implemented by the `proctor-store`
//! crate. It covers exactly the collaborator operations the core needs:
//! lookup-by-id, the two relationship queries, and the atomic
//! submission+answers insert.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{Alternative, Answer, Exam, ExamSubmission, Question, Student};

/// The submission row handed to `create_submission`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubmission {
    pub id: Uuid,
    pub student_id: Uuid,
    pub exam_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

/// One answer row handed to `create_submission` alongside the submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAnswer {
    pub question_id: Uuid,
    pub selected_alternative_id: Uuid,
}

/// Persistent store backing the submission service.
///
/// Implementations must enforce the unique (student, exam) constraint
/// inside `create_submission` itself: a check-then-insert sequence split
/// across calls loses the race between two concurrent submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Look up a student by id.
    async fn find_student(&self, id: Uuid) -> Result<Option<Student>, StoreError>;

    /// Look up an exam by id.
    async fn find_exam(&self, id: Uuid) -> Result<Option<Exam>, StoreError>;

    /// All questions belonging to an exam, ordered by question number.
    async fn questions_for_exam(&self, exam_id: Uuid) -> Result<Vec<Question>, StoreError>;

    /// All alternatives belonging to a question.
    async fn alternatives_for_question(
        &self,
        question_id: Uuid,
    ) -> Result<Vec<Alternative>, StoreError>;

    /// The submission for a (student, exam) pair, if one exists.
    async fn find_submission(
        &self,
        student_id: Uuid,
        exam_id: Uuid,
    ) -> Result<Option<ExamSubmission>, StoreError>;

    /// All answers belonging to a submission.
    async fn answers_for_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<Answer>, StoreError>;

    /// Insert a submission and all of its answers as one atomic unit.
    ///
    /// Either every row lands or none does. Fails with
    /// `StoreError::DuplicateSubmission` when a submission for the same
    /// (student, exam) pair already exists, including one created
    /// concurrently after the caller's own existence check.
    async fn create_submission(
        &self,
        submission: NewSubmission,
        answers: Vec<NewAnswer>,
    ) -> Result<ExamSubmission, StoreError>;
}
