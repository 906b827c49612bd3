//! The submission service: the two operations at the system boundary.
//!
//! `submit` runs the validation pipeline and hands the accepted answer set
//! to the store's atomic insert; `result` reads a stored submission back
//! and scores it. Both are single units of work with no shared mutable
//! state beyond the store itself.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{Rejection, Resource, StoreError, SubmissionError};
use crate::model::{Alternative, AnswerChoice, ExamSubmission, Question};
use crate::score::{score_submission, ExamResult, GradedAnswer};
use crate::traits::{NewAnswer, NewSubmission, SubmissionStore};
use crate::validate::validate_answer_set;

/// Validates, persists, and scores exam submissions.
pub struct SubmissionService {
    store: Arc<dyn SubmissionStore>,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    /// Accept or reject a proposed answer set for (student, exam).
    ///
    /// Checks run in a fixed order and the first violation is reported:
    /// student exists, exam exists, no prior submission, then the pure
    /// answer-set checks. On acceptance the submission and its answers are
    /// created in one atomic store call; a lost race against a concurrent
    /// submission surfaces as `AlreadySubmitted`, same as the early check.
    pub async fn submit(
        &self,
        student_id: Uuid,
        exam_id: Uuid,
        answers: &[AnswerChoice],
    ) -> Result<ExamSubmission, SubmissionError> {
        let student = self
            .store
            .find_student(student_id)
            .await?
            .ok_or(SubmissionError::NotFound(Resource::Student(student_id)))?;
        let exam = self
            .store
            .find_exam(exam_id)
            .await?
            .ok_or(SubmissionError::NotFound(Resource::Exam(exam_id)))?;

        if self.store.find_submission(student_id, exam_id).await?.is_some() {
            return Err(Rejection::AlreadySubmitted.into());
        }

        let questions = self.store.questions_for_exam(exam_id).await?;
        let alternatives = self.exam_alternatives(&questions).await?;
        validate_answer_set(exam_id, &questions, &alternatives, answers)?;

        let submission = NewSubmission {
            id: Uuid::new_v4(),
            student_id,
            exam_id,
            submitted_at: Utc::now(),
        };
        let rows: Vec<NewAnswer> = answers
            .iter()
            .map(|a| NewAnswer {
                question_id: a.question_id,
                selected_alternative_id: a.selected_alternative_id,
            })
            .collect();

        match self.store.create_submission(submission, rows).await {
            Ok(created) => {
                tracing::info!(
                    submission = %created.id,
                    student = %student.name,
                    exam = %exam.name,
                    answers = answers.len(),
                    "submission accepted"
                );
                Ok(created)
            }
            // A concurrent submit won the race after our existence check.
            Err(e) if e.is_duplicate() => Err(Rejection::AlreadySubmitted.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Score the stored submission for (student, exam).
    ///
    /// A single submission lookup decides existence; whether the student,
    /// the exam, or the submission itself is absent, the caller sees the
    /// same not-found outcome.
    pub async fn result(
        &self,
        student_id: Uuid,
        exam_id: Uuid,
    ) -> Result<ExamResult, SubmissionError> {
        let submission = self
            .store
            .find_submission(student_id, exam_id)
            .await?
            .ok_or(SubmissionError::NotFound(Resource::Submission {
                student_id,
                exam_id,
            }))?;

        // The submission exists, so its student and exam rows must too.
        let student = self
            .store
            .find_student(student_id)
            .await?
            .ok_or(StoreError::ReferentialViolation {
                entity: "submission",
                referenced: "student",
                id: student_id,
            })?;
        let exam = self
            .store
            .find_exam(exam_id)
            .await?
            .ok_or(StoreError::ReferentialViolation {
                entity: "submission",
                referenced: "exam",
                id: exam_id,
            })?;

        let questions = self.store.questions_for_exam(exam_id).await?;
        let question_index: HashMap<Uuid, _> =
            questions.into_iter().map(|q| (q.id, q)).collect();
        let alternatives = {
            let qs: Vec<_> = question_index.values().cloned().collect();
            self.exam_alternatives(&qs).await?
        };

        let answers = self.store.answers_for_submission(submission.id).await?;
        let mut graded = Vec::with_capacity(answers.len());
        for answer in &answers {
            let question = question_index
                .get(&answer.question_id)
                .cloned()
                .ok_or(StoreError::ReferentialViolation {
                    entity: "answer",
                    referenced: "question",
                    id: answer.question_id,
                })?;
            let selected = alternatives
                .get(&answer.selected_alternative_id)
                .cloned()
                .ok_or(StoreError::ReferentialViolation {
                    entity: "answer",
                    referenced: "alternative",
                    id: answer.selected_alternative_id,
                })?;
            graded.push(GradedAnswer { question, selected });
        }

        Ok(score_submission(&submission, &student, &exam, &graded))
    }

    /// Fetch every alternative owned by the given questions, indexed by id.
    async fn exam_alternatives(
        &self,
        questions: &[Question],
    ) -> Result<HashMap<Uuid, Alternative>, StoreError> {
        let mut alternatives = HashMap::new();
        for question in questions {
            for alternative in self.store.alternatives_for_question(question.id).await? {
                alternatives.insert(alternative.id, alternative);
            }
        }
        Ok(alternatives)
    }
}
