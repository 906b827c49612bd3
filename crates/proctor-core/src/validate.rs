//! Answer-set validation.
//!
//! Pure checks over data the service already fetched: completeness,
//! exam membership, duplicate answers, and alternative ownership. The
//! existence and duplicate-submission checks live in the service because
//! they need the store.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::error::Rejection;
use crate::model::{Alternative, AnswerChoice, Question};

/// Validate a proposed answer set against an exam's question set.
///
/// `questions` are the exam's questions and `alternatives` maps alternative
/// id to alternative for every alternative those questions own. Checks run
/// in a fixed order (completeness, then membership, then duplicates, then
/// ownership) and each pass scans answers in submitted order, so the first
/// violation in that order is the one reported.
pub fn validate_answer_set(
    exam_id: Uuid,
    questions: &[Question],
    alternatives: &HashMap<Uuid, Alternative>,
    answers: &[AnswerChoice],
) -> Result<(), Rejection> {
    if answers.len() != questions.len() {
        return Err(Rejection::CountMismatch {
            expected: questions.len(),
            got: answers.len(),
        });
    }

    let exam_question_ids: HashSet<Uuid> = questions.iter().map(|q| q.id).collect();
    for answer in answers {
        if !exam_question_ids.contains(&answer.question_id) {
            return Err(Rejection::QuestionNotInExam {
                question_id: answer.question_id,
                exam_id,
            });
        }
    }

    let mut answered: HashSet<Uuid> = HashSet::with_capacity(answers.len());
    for answer in answers {
        if !answered.insert(answer.question_id) {
            return Err(Rejection::DuplicateAnswer {
                question_id: answer.question_id,
            });
        }
    }

    for answer in answers {
        match alternatives.get(&answer.selected_alternative_id) {
            None => {
                return Err(Rejection::UnknownAlternative {
                    alternative_id: answer.selected_alternative_id,
                });
            }
            Some(alternative) if alternative.question_id != answer.question_id => {
                return Err(Rejection::AlternativeMismatch {
                    alternative_id: alternative.id,
                    question_id: answer.question_id,
                });
            }
            Some(_) => {}
        }
    }

    Ok(())
}
