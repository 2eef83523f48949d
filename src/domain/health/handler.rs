use axum::{extract::State, Json};

use super::dto::HealthStatus;
use super::service::check_health;
use crate::response::MessageResponse;
use crate::AppState;

/// 헬스체크 API
///
/// 서버 상태, 버전, 가동 시간, 카탈로그 크기, LLM 연결 상태를 반환합니다.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "헬스체크 성공", body = HealthStatus)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let status = check_health(&state.coach, state.started_at, state.catalog.len()).await;
    Json(status)
}

/// API 루트
#[utoipa::path(
    get,
    path = "/api/",
    tag = "Health",
    responses(
        (status = 200, description = "서비스 이름", body = MessageResponse)
    )
)]
pub async fn api_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Sales Training Assistant API".to_string(),
    })
}
