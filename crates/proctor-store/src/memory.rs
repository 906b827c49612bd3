//! In-memory submission store.
//!
//! The reference `SubmissionStore` backend: all tables live in `HashMap`s
//! behind a single mutex, so `create_submission` is one critical section
//! and the unique (student, exam) constraint cannot lose a race between
//! two concurrent submission attempts.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use proctor_core::error::StoreError;
use proctor_core::model::{Alternative, Answer, Exam, ExamSubmission, Question, Student};
use proctor_core::traits::{NewAnswer, NewSubmission, SubmissionStore};

#[derive(Debug, Default)]
struct Inner {
    students: HashMap<Uuid, Student>,
    exams: HashMap<Uuid, Exam>,
    questions: HashMap<Uuid, Question>,
    alternatives: HashMap<Uuid, Alternative>,
    submissions: HashMap<Uuid, ExamSubmission>,
    answers: Vec<Answer>,
    /// Unique index: (student_id, exam_id) -> submission id.
    submission_index: HashMap<(Uuid, Uuid), Uuid>,
}

/// An in-memory `SubmissionStore`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".into()))
    }

    /// Insert a student row (seeding path).
    pub fn insert_student(&self, student: Student) -> Result<(), StoreError> {
        self.lock()?.students.insert(student.id, student);
        Ok(())
    }

    /// Insert an exam row (seeding path).
    pub fn insert_exam(&self, exam: Exam) -> Result<(), StoreError> {
        self.lock()?.exams.insert(exam.id, exam);
        Ok(())
    }

    /// Insert a question row (seeding path). The owning exam must exist.
    pub fn insert_question(&self, question: Question) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        if !inner.exams.contains_key(&question.exam_id) {
            return Err(StoreError::ReferentialViolation {
                entity: "question",
                referenced: "exam",
                id: question.exam_id,
            });
        }
        inner.questions.insert(question.id, question);
        Ok(())
    }

    /// Insert an alternative row (seeding path). The owning question must exist.
    pub fn insert_alternative(&self, alternative: Alternative) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        if !inner.questions.contains_key(&alternative.question_id) {
            return Err(StoreError::ReferentialViolation {
                entity: "alternative",
                referenced: "question",
                id: alternative.question_id,
            });
        }
        inner.alternatives.insert(alternative.id, alternative);
        Ok(())
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn find_student(&self, id: Uuid) -> Result<Option<Student>, StoreError> {
        Ok(self.lock()?.students.get(&id).cloned())
    }

    async fn find_exam(&self, id: Uuid) -> Result<Option<Exam>, StoreError> {
        Ok(self.lock()?.exams.get(&id).cloned())
    }

    async fn questions_for_exam(&self, exam_id: Uuid) -> Result<Vec<Question>, StoreError> {
        let inner = self.lock()?;
        let mut questions: Vec<Question> = inner
            .questions
            .values()
            .filter(|q| q.exam_id == exam_id)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.number);
        Ok(questions)
    }

    async fn alternatives_for_question(
        &self,
        question_id: Uuid,
    ) -> Result<Vec<Alternative>, StoreError> {
        let inner = self.lock()?;
        let mut alternatives: Vec<Alternative> = inner
            .alternatives
            .values()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect();
        alternatives.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(alternatives)
    }

    async fn find_submission(
        &self,
        student_id: Uuid,
        exam_id: Uuid,
    ) -> Result<Option<ExamSubmission>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .submission_index
            .get(&(student_id, exam_id))
            .and_then(|id| inner.submissions.get(id))
            .cloned())
    }

    async fn answers_for_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<Answer>, StoreError> {
        Ok(self
            .lock()?
            .answers
            .iter()
            .filter(|a| a.submission_id == submission_id)
            .cloned()
            .collect())
    }

    async fn create_submission(
        &self,
        submission: NewSubmission,
        answers: Vec<NewAnswer>,
    ) -> Result<ExamSubmission, StoreError> {
        let mut inner = self.lock()?;
        let key = (submission.student_id, submission.exam_id);

        if inner.submission_index.contains_key(&key) {
            return Err(StoreError::DuplicateSubmission {
                student_id: submission.student_id,
                exam_id: submission.exam_id,
            });
        }

        // Every constraint is verified before the first write, so a
        // failure here leaves no partial submission behind.
        if !inner.students.contains_key(&submission.student_id) {
            return Err(StoreError::ReferentialViolation {
                entity: "submission",
                referenced: "student",
                id: submission.student_id,
            });
        }
        if !inner.exams.contains_key(&submission.exam_id) {
            return Err(StoreError::ReferentialViolation {
                entity: "submission",
                referenced: "exam",
                id: submission.exam_id,
            });
        }
        let mut answered = std::collections::HashSet::new();
        for answer in &answers {
            if !inner.questions.contains_key(&answer.question_id) {
                return Err(StoreError::ReferentialViolation {
                    entity: "answer",
                    referenced: "question",
                    id: answer.question_id,
                });
            }
            if !inner.alternatives.contains_key(&answer.selected_alternative_id) {
                return Err(StoreError::ReferentialViolation {
                    entity: "answer",
                    referenced: "alternative",
                    id: answer.selected_alternative_id,
                });
            }
            if !answered.insert(answer.question_id) {
                return Err(StoreError::DuplicateAnswer {
                    submission_id: submission.id,
                    question_id: answer.question_id,
                });
            }
        }

        let created = ExamSubmission {
            id: submission.id,
            student_id: submission.student_id,
            exam_id: submission.exam_id,
            submitted_at: submission.submitted_at,
        };
        tracing::debug!(submission = %created.id, answers = answers.len(), "inserting submission");
        inner.submission_index.insert(key, created.id);
        inner.submissions.insert(created.id, created.clone());
        for answer in answers {
            inner.answers.push(Answer {
                submission_id: created.id,
                question_id: answer.question_id,
                selected_alternative_id: answer.selected_alternative_id,
            });
        }

        Ok(created)
    }
}
