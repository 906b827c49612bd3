//! Roster seeding.
//!
//! Applies a parsed roster to a `MemoryStore`. Rows are inserted in
//! dependency order (exams before their questions, questions before their
//! alternatives) so the store's referential checks hold throughout.

use proctor_core::error::StoreError;
use proctor_core::fixture::Roster;

use crate::memory::MemoryStore;

/// Counts of what a seeding pass inserted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSummary {
    pub students: usize,
    pub exams: usize,
    pub questions: usize,
    pub alternatives: usize,
}

impl SeedSummary {
    pub fn add(&mut self, other: SeedSummary) {
        self.students += other.students;
        self.exams += other.exams;
        self.questions += other.questions;
        self.alternatives += other.alternatives;
    }
}

/// Insert every entity of a roster into the store.
pub fn seed_store(store: &MemoryStore, roster: &Roster) -> Result<SeedSummary, StoreError> {
    for student in &roster.students {
        store.insert_student(student.clone())?;
    }
    for exam in &roster.exams {
        store.insert_exam(exam.clone())?;
    }
    for question in &roster.questions {
        store.insert_question(question.clone())?;
    }
    for alternative in &roster.alternatives {
        store.insert_alternative(alternative.clone())?;
    }

    Ok(SeedSummary {
        students: roster.students.len(),
        exams: roster.exams.len(),
        questions: roster.questions.len(),
        alternatives: roster.alternatives.len(),
    })
}
