use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 연습용 반론 시나리오
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Scenario {
    /// 시나리오 ID (1부터 시작, 고유)
    #[schema(example = 1)]
    pub id: u32,

    /// 반론 카테고리
    #[schema(example = "Pricing & Commission Objections")]
    pub category: String,

    /// 가맹점주의 반론 문장
    #[schema(example = "Your commission is too high.")]
    pub objection: String,

    /// 반론이 나오는 상황 설명
    #[schema(example = "The merchant is comparing your fee structure to a competitor or their current margins.")]
    pub context: String,

    /// 권장 대응 방향
    #[schema(example = "Reframe as an investment, not a cost. Show value vs. price.")]
    pub suggested_response: String,
}

/// 카테고리 목록 응답
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}
