use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::AppError;
use crate::response::ErrorResponse;
use crate::AppState;

use super::dto::{AiResponse, ObjectionRequest, PracticeFeedback, PracticeResponse};

/// 반론 대응 코칭
///
/// 가맹점주의 반론에 대해 LLM이 바로 쓸 수 있는 대응 전략을 생성합니다.
#[utoipa::path(
    post,
    path = "/api/objection/handle",
    tag = "Coach",
    request_body = ObjectionRequest,
    responses(
        (status = 200, description = "응답 생성 성공", body = AiResponse),
        (status = 400, description = "잘못된 요청 형식", body = ErrorResponse),
        (status = 429, description = "요청 한도 초과", body = ErrorResponse),
        (status = 500, description = "LLM 호출 실패", body = ErrorResponse)
    )
)]
pub async fn handle_objection(
    State(state): State<AppState>,
    request: Result<Json<ObjectionRequest>, JsonRejection>,
) -> Result<Json<AiResponse>, AppError> {
    let Json(request) = request?;

    tracing::info!(
        objection_length = request.objection_text.len(),
        language = ?request.language,
        scenario_id = ?request.scenario_id,
        "Objection request received"
    );

    let response = state.coach.handle_objection(request).await?;

    tracing::info!(
        response_length = response.response.len(),
        scenario_used = ?response.scenario_used.as_ref().map(|s| s.id),
        "Objection response generated"
    );

    Ok(Json(response))
}

/// 연습 응답 피드백
///
/// 시나리오에 대한 상담원의 응답을 LLM이 평가하고 점수와 개선 제안을 돌려줍니다.
#[utoipa::path(
    post,
    path = "/api/practice/feedback",
    tag = "Coach",
    request_body = PracticeResponse,
    responses(
        (status = 200, description = "피드백 생성 성공", body = PracticeFeedback),
        (status = 400, description = "잘못된 요청 형식", body = ErrorResponse),
        (status = 404, description = "시나리오 없음", body = ErrorResponse),
        (status = 429, description = "요청 한도 초과", body = ErrorResponse),
        (status = 500, description = "LLM 호출 실패", body = ErrorResponse)
    )
)]
pub async fn practice_feedback(
    State(state): State<AppState>,
    request: Result<Json<PracticeResponse>, JsonRejection>,
) -> Result<Json<PracticeFeedback>, AppError> {
    let Json(request) = request?;

    tracing::info!(
        scenario_id = request.scenario_id,
        response_type = ?request.response_type,
        response_length = request.user_response.len(),
        "Practice feedback request received"
    );

    let feedback = state.coach.practice_feedback(request).await?;

    tracing::info!(
        score = ?feedback.score,
        suggestion_count = feedback.suggestions.len(),
        "Practice feedback generated"
    );

    Ok(Json(feedback))
}
