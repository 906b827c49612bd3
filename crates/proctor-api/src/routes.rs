//! Submission routes.
//!
//! Two operations at the boundary: create a submission for a (student,
//! exam) pair, and read the scored result back. Path parameters identify
//! the pair; the body carries only the answers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use proctor_core::model::AnswerChoice;
use proctor_core::score::ExamResult;

use crate::error::ApiError;
use crate::AppState;

/// One answer in a submission request.
#[derive(Debug, Deserialize)]
pub struct AnswerPayload {
    /// The question being answered.
    pub question: Uuid,
    /// The alternative the student picked.
    pub selected_alternative: Uuid,
}

/// Body of the create-submission request.
#[derive(Debug, Deserialize)]
pub struct SubmitPayload {
    pub answers: Vec<AnswerPayload>,
}

/// Body of a successful create-submission response.
#[derive(Debug, Serialize)]
pub struct SubmissionCreated {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/students/:student_id/exams/:exam_id/submissions",
            post(create_submission),
        )
        .route(
            "/students/:student_id/exams/:exam_id/submissions/result",
            get(get_result),
        )
}

async fn create_submission(
    State(state): State<AppState>,
    Path((student_id, exam_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<SubmitPayload>,
) -> Result<(StatusCode, Json<SubmissionCreated>), ApiError> {
    let answers: Vec<AnswerChoice> = payload
        .answers
        .iter()
        .map(|a| AnswerChoice {
            question_id: a.question,
            selected_alternative_id: a.selected_alternative,
        })
        .collect();

    let submission = state.service.submit(student_id, exam_id, &answers).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmissionCreated {
            id: submission.id,
            submitted_at: submission.submitted_at,
        }),
    ))
}

async fn get_result(
    State(state): State<AppState>,
    Path((student_id, exam_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ExamResult>, ApiError> {
    let result = state.service.result(student_id, exam_id).await?;
    Ok(Json(result))
}
