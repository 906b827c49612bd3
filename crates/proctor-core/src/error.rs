//! Submission error taxonomy.
//!
//! Defined in `proctor-core` so the service and the HTTP layer can classify
//! failures for status mapping without string matching. Exactly two
//! caller-facing classes exist: "resource absent" (`NotFound`) and "request
//! rejected" (`Rejected`); store faults are internal.

use thiserror::Error;
use uuid::Uuid;

/// Why an incoming answer set was rejected.
///
/// The display message of each variant is the human-readable reason
/// surfaced to the caller. The first violation encountered is reported,
/// never an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The student has already submitted this exam.
    #[error("this student has already submitted this exam")]
    AlreadySubmitted,

    /// The number of answers does not match the exam's question count.
    #[error("the number of answers does not match the number of questions in the exam: expected {expected}, got {got}")]
    CountMismatch { expected: usize, got: usize },

    /// An answer references a question the exam does not own.
    #[error("question {question_id} does not belong to exam {exam_id}")]
    QuestionNotInExam { question_id: Uuid, exam_id: Uuid },

    /// Two answers in the request reference the same question.
    #[error("the answer for question {question_id} is duplicated")]
    DuplicateAnswer { question_id: Uuid },

    /// The selected alternative belongs to a different question.
    #[error("alternative {alternative_id} does not belong to question {question_id}")]
    AlternativeMismatch {
        alternative_id: Uuid,
        question_id: Uuid,
    },

    /// The selected alternative id resolves to no known alternative.
    #[error("unknown alternative: {alternative_id}")]
    UnknownAlternative { alternative_id: Uuid },
}

/// The referenced resource that turned out to be absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Resource {
    #[error("student {0} not found")]
    Student(Uuid),

    #[error("exam {0} not found")]
    Exam(Uuid),

    #[error("no submission found for student {student_id} on exam {exam_id}")]
    Submission { student_id: Uuid, exam_id: Uuid },
}

/// Failures raised by a `SubmissionStore` backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The unique (student, exam) constraint rejected an insert.
    #[error("a submission for student {student_id} on exam {exam_id} already exists")]
    DuplicateSubmission { student_id: Uuid, exam_id: Uuid },

    /// The unique (submission, question) constraint rejected an insert.
    #[error("submission {submission_id} already holds an answer for question {question_id}")]
    DuplicateAnswer {
        submission_id: Uuid,
        question_id: Uuid,
    },

    /// A row referenced an id the store does not hold.
    #[error("{entity} references missing {referenced}: {id}")]
    ReferentialViolation {
        entity: &'static str,
        referenced: &'static str,
        id: Uuid,
    },

    /// Backend-specific failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns `true` if this error is the (student, exam) uniqueness
    /// constraint firing, the one store failure callers may race into.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateSubmission { .. })
    }
}

/// Top-level error for the two submission operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// A referenced student, exam, or submission does not exist.
    #[error("{0}")]
    NotFound(Resource),

    /// The request was understood but violates a submission rule.
    #[error("{0}")]
    Rejected(#[from] Rejection),

    /// The store failed in a way the caller cannot repair.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmissionError {
    /// Returns `true` for the "resource absent" failure class.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SubmissionError::NotFound(_))
    }

    /// Returns the rejection reason, if this is the "request rejected" class.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            SubmissionError::Rejected(r) => Some(r),
            _ => None,
        }
    }
}
