use axum::{extract::State, Json};

use crate::error::AppError;
use crate::response::ErrorResponse;
use crate::AppState;

use super::dto::{CategoriesResponse, Scenario};

/// 연습 모드에서 한 번에 내려주는 시나리오 수
pub const PRACTICE_SET_SIZE: usize = 10;

/// 전체 시나리오 조회
#[utoipa::path(
    get,
    path = "/api/scenarios",
    tag = "Scenario",
    responses(
        (status = 200, description = "전체 시나리오 목록", body = Vec<Scenario>)
    )
)]
pub async fn list_scenarios(State(state): State<AppState>) -> Json<Vec<Scenario>> {
    Json(state.catalog.all().to_vec())
}

/// 시나리오 카테고리 조회
#[utoipa::path(
    get,
    path = "/api/scenarios/categories",
    tag = "Scenario",
    responses(
        (status = 200, description = "중복 없는 카테고리 목록", body = CategoriesResponse)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.categories(),
    })
}

/// 연습용 랜덤 시나리오 조회
///
/// 카탈로그에서 중복 없이 10개를 무작위로 뽑습니다.
#[utoipa::path(
    get,
    path = "/api/scenarios/practice",
    tag = "Scenario",
    responses(
        (status = 200, description = "무작위 연습 시나리오 10개", body = Vec<Scenario>),
        (status = 500, description = "카탈로그가 10개 미만", body = ErrorResponse)
    )
)]
pub async fn practice_scenarios(
    State(state): State<AppState>,
) -> Result<Json<Vec<Scenario>>, AppError> {
    let scenarios = state
        .catalog
        .sample(PRACTICE_SET_SIZE, &mut rand::thread_rng())
        .map_err(|e| AppError::internal(e.to_string()))?;

    tracing::debug!(
        ids = ?scenarios.iter().map(|s| s.id).collect::<Vec<_>>(),
        "Practice scenarios sampled"
    );

    Ok(Json(scenarios))
}
